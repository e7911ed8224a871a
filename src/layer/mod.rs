mod trace;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use trace::DefaultTraceLayer;

/// Applies the default middleware stack to a router.
pub(crate) fn default_layers(router: Router) -> Router {
    // CorsLayer is added last so it is outermost and stamps the permissive
    // headers on every response, including 404s from unmatched routes.
    router.layer(DefaultTraceLayer::new()).layer(cors_layer())
}

/// Permissive CORS: any origin, standard methods and headers, no
/// credentialed restriction.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
