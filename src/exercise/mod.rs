mod dto;
pub mod handlers;
pub mod model;
mod repo;
mod repo_types;
pub mod scoring;
mod services;

pub use repo::list_in_range;

use crate::state::AppState;
use axum::Router;

pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .merge(handlers::read_routes())
        .merge(handlers::write_routes(max_upload_bytes))
}
