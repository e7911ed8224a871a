use axum::routing::get;
use axum::Router;

/// Returns a router with the `GET /` greeting endpoint.
pub fn greeting_routes() -> Router {
    Router::new().route("/", get(greeting_handler))
}

/// Responds with the fixed greeting, logging one line per invocation.
async fn greeting_handler() -> &'static str {
    tracing::info!("The get api is working fine");
    "This is call request say hi"
}
