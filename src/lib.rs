//! # sayhi-server
//!
//! Single-endpoint greeting server built on axum.
//!
//! Reads its listen port from the `PORT` environment variable (default
//! `2017`, `.env` files honored), applies a permissive CORS policy to every
//! response, and answers `GET /` with a fixed plaintext greeting. All other
//! routes fall through to axum's defaults.

mod config;
mod layer;
mod logging;
mod router;
mod routes;
mod server;

pub use config::{ConfigError, ServerConfig};
pub use logging::{init_logging, LogFormat};
pub use router::RouterExt;
pub use routes::greeting_routes;
pub use server::ServerError;
