//! In-process ItemRepository for tests and local runs without MongoDB.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{ItemError, ItemResult};
use crate::models::Item;
use crate::repository::ItemRepository;

/// Insertion-ordered item store guarded by an async `RwLock`.
///
/// The lock is held for one operation at a time and never across calls.
#[derive(Default)]
pub struct InMemoryItemRepository {
    items: RwLock<Vec<Item>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeded repository. Later duplicates of an id are dropped.
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        let mut seeded: Vec<Item> = Vec::new();
        for item in items {
            if !seeded.iter().any(|existing| existing.id == item.id) {
                seeded.push(item);
            }
        }
        Self {
            items: RwLock::new(seeded),
        }
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn list_items(&self) -> ItemResult<Vec<Item>> {
        Ok(self.items.read().await.clone())
    }

    async fn get_item(&self, id: Uuid) -> ItemResult<Option<Item>> {
        Ok(self.items.read().await.iter().find(|i| i.id == id).cloned())
    }

    async fn create_item(&self, item: Item) -> ItemResult<()> {
        let mut items = self.items.write().await;
        if items.iter().any(|existing| existing.id == item.id) {
            return Err(ItemError::DuplicateKey(item.id));
        }
        items.push(item);
        Ok(())
    }

    async fn update_item(&self, item: Item) -> ItemResult<bool> {
        let mut items = self.items.write().await;
        match items.iter_mut().find(|existing| existing.id == item.id) {
            Some(slot) => {
                *slot = item;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_item(&self, id: Uuid) -> ItemResult<bool> {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|existing| existing.id != id);
        Ok(items.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CreateItemDto;
    use rust_decimal::Decimal;

    fn item(name: &str) -> Item {
        Item::new(CreateItemDto {
            name: name.to_string(),
            price: Decimal::new(5, 0),
        })
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_id() {
        let repo = InMemoryItemRepository::new();
        let potion = item("Potion");

        repo.create_item(potion.clone()).await.unwrap();
        let err = repo.create_item(potion.clone()).await.unwrap_err();

        assert!(matches!(err, ItemError::DuplicateKey(id) if id == potion.id));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_update_and_delete_report_matches() {
        let potion = item("Potion");
        let repo = InMemoryItemRepository::with_items([potion.clone()]);

        let mut renamed = potion.clone();
        renamed.name = Some("Ether".to_string());
        assert!(repo.update_item(renamed.clone()).await.unwrap());
        assert_eq!(repo.get_item(potion.id).await.unwrap(), Some(renamed));

        assert!(!repo.update_item(item("Ghost")).await.unwrap());

        assert!(repo.delete_item(potion.id).await.unwrap());
        assert!(!repo.delete_item(potion.id).await.unwrap());
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let items = vec![item("a"), item("b"), item("c")];
        let repo = InMemoryItemRepository::with_items(items.clone());
        assert_eq!(repo.list_items().await.unwrap(), items);
    }
}
