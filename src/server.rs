//! Server utilities.

use crate::ServerConfig;
use axum::Router;
use std::{fmt, io};
use tokio::net::TcpListener;

/// Error type for server operations.
#[derive(Debug)]
pub enum ServerError {
    /// Failed to bind to address.
    Bind(io::Error),
    /// Server runtime error.
    Runtime(io::Error),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bind(e) => write!(f, "Failed to bind to address: {}", e),
            Self::Runtime(e) => write!(f, "Server error: {}", e),
        }
    }
}

impl std::error::Error for ServerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Bind(e) | Self::Runtime(e) => Some(e),
        }
    }
}

/// Bind the configured address and serve a router until the process is
/// externally terminated.
pub async fn serve_router(
    router: Router,
    config: &(impl AsRef<ServerConfig> + Sync),
) -> Result<(), ServerError> {
    let config = config.as_ref();
    let listener = TcpListener::bind(config.addr())
        .await
        .map_err(ServerError::Bind)?;

    tracing::info!("The Server is running on the port {}", config.port);

    axum::serve(listener, router)
        .await
        .map_err(ServerError::Runtime)
}
