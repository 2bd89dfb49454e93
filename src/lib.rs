//! Pokedex API: CRUD REST service for pokemon, their categories, owners, countries,
//! reviewers and reviews.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod mapper;
pub mod model;
pub mod repository;
pub mod response;
pub mod routes;
pub mod sql;
pub mod state;
pub mod store;
pub mod validation;

pub use config::{ServerConfig, StoreBackend};
pub use error::{AppError, ConfigError, ErrorKind};
pub use routes::{api_routes, common_routes};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_tables, MemoryStore, PgStore, Store};

use axum::Router;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

/// The full application: resource and operational routes behind a request body
/// limit, tracing and CORS. The body limit is innermost.
pub fn app(state: AppState, body_limit_bytes: usize) -> Router {
    Router::new()
        .merge(api_routes())
        .merge(common_routes())
        .layer(RequestBodyLimitLayer::new(body_limit_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
