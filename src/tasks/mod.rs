mod dto;
pub mod handlers;
pub mod model;
mod pool;
mod repo;
mod repo_types;
pub mod selector;

pub use repo::list_in_range;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
