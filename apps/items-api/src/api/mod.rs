//! HTTP routes for the items service.

pub mod health;
pub mod items;

use axum::Router;

use crate::state::AppState;

/// Routes nested under `/api` by `axum_helpers::create_router`
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/items", items::router(state))
}
