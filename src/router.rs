//! Router extension trait for axum-like API.

use axum::Router;

use crate::ServerConfig;

/// Extension trait that provides the server's middleware stack and serve
/// loop as chainable methods on `Router`.
///
/// # Example
///
/// ```rust,ignore
/// use sayhi_server::{greeting_routes, RouterExt};
///
/// greeting_routes()
///     .with_default_layers()
///     .serve(&config)
///     .await?;
/// ```
pub trait RouterExt: Sized {
    /// Applies the default middleware stack.
    ///
    /// Layers applied (innermost to outermost):
    /// - `TraceLayer` - Request/response logging with latency
    /// - `CorsLayer` - Permissive CORS on every response (outermost)
    fn with_default_layers(self) -> Self;

    /// Serve the router until the process is externally terminated.
    fn serve(
        self,
        config: &(impl AsRef<ServerConfig> + Sync),
    ) -> impl std::future::Future<Output = Result<(), crate::ServerError>> + Send;
}

impl RouterExt for Router {
    fn with_default_layers(self) -> Self {
        crate::layer::default_layers(self)
    }

    async fn serve(
        self,
        config: &(impl AsRef<ServerConfig> + Sync),
    ) -> Result<(), crate::ServerError> {
        crate::server::serve_router(self, config).await
    }
}
