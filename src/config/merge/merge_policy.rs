//! Default layer every merge starts from.

use crate::config::SharedirConfig;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Builder seeded with the serialized `SharedirConfig::default()`.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let defaults = Config::try_from(&SharedirConfig::default())?;
    Ok(Config::builder().add_source(defaults))
}
