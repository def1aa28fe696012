use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ItemResult;
use crate::models::Item;

/// Data access for the item collection.
///
/// Existence checks belong to the caller: `update_item` and `delete_item`
/// report whether a document matched instead of failing on a miss.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Every stored item; empty when the collection is empty
    async fn list_items(&self) -> ItemResult<Vec<Item>>;

    /// The item with this id, or `None`
    async fn get_item(&self, id: Uuid) -> ItemResult<Option<Item>>;

    /// Persist a fully populated item; `DuplicateKey` if the id is taken
    async fn create_item(&self, item: Item) -> ItemResult<()>;

    /// Replace the stored item with the same id; `false` if none matched
    async fn update_item(&self, item: Item) -> ItemResult<bool>;

    /// Remove the item; `false` if none matched
    async fn delete_item(&self, id: Uuid) -> ItemResult<bool>;
}
