//! HTTP surface: JSON endpoints for listing and mutating the shared root, the
//! browser UI, and raw file serving under the static prefix.

mod page;
mod routes;

pub use page::{escape_html, render_error_page, render_page, render_tree_view};

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::workspace::FileCommandService;
use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post, put};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub(crate) service: Arc<FileCommandService>,
    pub(crate) config: Arc<ServerConfig>,
}

impl AppState {
    /// Prepare state for `config`, creating the root if it does not exist.
    pub fn new(config: ServerConfig) -> Result<Self, ApiError> {
        std::fs::create_dir_all(&config.root).map_err(|e| {
            ApiError::io(
                format!("Failed to create root directory {}", config.root.display()),
                e,
            )
        })?;
        let root = dunce::canonicalize(&config.root).map_err(|e| {
            ApiError::io(
                format!("Failed to resolve root directory {}", config.root.display()),
                e,
            )
        })?;
        Ok(Self {
            service: Arc::new(FileCommandService::new(root)),
            config: Arc::new(config),
        })
    }
}

/// Build the router for `state`.
pub fn router(state: AppState) -> Router {
    let static_prefix = state.config.normalized_static_prefix();
    let files = ServeDir::new(state.service.root());

    Router::new()
        .route("/", get(routes::index))
        .route("/tree", get(routes::tree))
        .route("/tree-view", get(routes::tree_view))
        .route(
            "/list-contents",
            get(routes::list_contents).fallback(routes::method_not_allowed),
        )
        .route(
            "/create-folder",
            post(routes::create_item).fallback(routes::method_not_allowed),
        )
        .route(
            "/delete-item",
            delete(routes::delete_item).fallback(routes::method_not_allowed),
        )
        .route(
            "/edit-file",
            put(routes::edit_file).fallback(routes::method_not_allowed),
        )
        .route(
            "/rename-item",
            put(routes::rename_item).fallback(routes::method_not_allowed),
        )
        .route(
            "/upload-file",
            post(routes::upload_file).fallback(routes::method_not_allowed),
        )
        .nest_service(&static_prefix, files)
        .layer(DefaultBodyLimit::max(state.config.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `config.bind` and serve until Ctrl-C.
pub async fn serve(config: ServerConfig) -> Result<(), ApiError> {
    let listener = TcpListener::bind(&config.bind)
        .await
        .map_err(|e| ApiError::io(format!("Failed to bind {}", config.bind), e))?;
    serve_with_listener(listener, config).await
}

/// Serve on an already-bound listener until Ctrl-C.
pub async fn serve_with_listener(
    listener: TcpListener,
    config: ServerConfig,
) -> Result<(), ApiError> {
    let state = AppState::new(config)?;
    let addr = listener
        .local_addr()
        .map_err(|e| ApiError::io("Failed to read listener address", e))?;
    info!(
        %addr,
        root = %state.service.root().display(),
        static_prefix = %state.config.normalized_static_prefix(),
        "Serving shared directory"
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::io("Server error", e))?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
