//! Integration tests for sharedir

mod http_end_to_end;
mod tree_properties;
