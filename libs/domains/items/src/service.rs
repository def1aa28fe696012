//! Item Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItemDto, Item, ItemFilter, UpdateItemDto};
use crate::repository::ItemRepository;

/// Item operations over an injected repository.
///
/// Owns id generation, filtering and the existence check that precedes
/// update and delete.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Share a repository handle, so tests can assert on the store the service writes to.
    pub fn from_shared(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn list_items(&self, filter: ItemFilter) -> ItemResult<Vec<Item>> {
        let items = self.repository.list_items().await?;
        Ok(filter.apply(items))
    }

    #[instrument(skip(self))]
    pub async fn get_item(&self, id: Uuid) -> ItemResult<Item> {
        self.repository
            .get_item(id)
            .await?
            .ok_or(ItemError::NotFound(id))
    }

    #[instrument(skip(self, input), fields(item_name = %input.name))]
    pub async fn create_item(&self, input: CreateItemDto) -> ItemResult<Item> {
        input
            .validate()
            .map_err(|e| ItemError::Validation(e.to_string()))?;

        let item = Item::new(input);
        self.repository.create_item(item.clone()).await?;

        Ok(item)
    }

    /// Replace name and price; id and creation date are kept.
    #[instrument(skip(self, input))]
    pub async fn update_item(&self, id: Uuid, input: UpdateItemDto) -> ItemResult<()> {
        input
            .validate()
            .map_err(|e| ItemError::Validation(e.to_string()))?;

        let existing = self.get_item(id).await?;
        let updated = existing.with_update(input);

        // The item can vanish between the check and the write.
        if !self.repository.update_item(updated).await? {
            return Err(ItemError::NotFound(id));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: Uuid) -> ItemResult<()> {
        self.get_item(id).await?;

        if !self.repository.delete_item(id).await? {
            return Err(ItemError::NotFound(id));
        }
        Ok(())
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
