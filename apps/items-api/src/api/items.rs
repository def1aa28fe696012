//! Wires the items domain to the configured MongoDB collection.

use axum::Router;
use domain_items::{ItemService, MongoItemRepository, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository =
        MongoItemRepository::with_collection(state.db.clone(), &state.config.items_collection);
    handlers::router(ItemService::new(repository))
}
