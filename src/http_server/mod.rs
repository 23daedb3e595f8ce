//! # HTTP Server Module
//!
//! Axum server exposing the song store.
//!
//! # Endpoints
//!
//! - `/` - HTML front end
//! - `/health` - Health check
//! - `/api/songs*` - Song CRUD
//! - `/observability/metrics` - Counters

pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod page_routes;
pub mod server;
pub mod song_routes;
pub mod state;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
pub use state::{AppState, SharedState};
