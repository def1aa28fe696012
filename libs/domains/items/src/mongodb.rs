//! MongoDB implementation of ItemRepository

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Document, doc},
    error::{ErrorKind, WriteFailure},
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ItemError, ItemResult};
use crate::models::Item;
use crate::repository::ItemRepository;

/// Collection used by [`MongoItemRepository::new`]
pub const DEFAULT_COLLECTION: &str = "items";

const DUPLICATE_KEY_CODE: i32 = 11000;

pub struct MongoItemRepository {
    collection: Collection<Item>,
}

impl MongoItemRepository {
    /// Repository over the `items` collection of `db`.
    ///
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let repo = MongoItemRepository::new(client.database("catalog"));
    /// ```
    pub fn new(db: Database) -> Self {
        Self::with_collection(db, DEFAULT_COLLECTION)
    }

    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<Item>(collection_name);
        Self { collection }
    }

    /// `_id` filter in the same string form the codec writes.
    fn by_id(id: Uuid) -> Document {
        doc! { "_id": id.hyphenated().to_string() }
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(e)) if e.code == DUPLICATE_KEY_CODE
    )
}

#[async_trait]
impl ItemRepository for MongoItemRepository {
    #[instrument(skip(self))]
    async fn list_items(&self) -> ItemResult<Vec<Item>> {
        let cursor = self.collection.find(doc! {}).await?;
        let items: Vec<Item> = cursor.try_collect().await?;
        tracing::debug!(count = items.len(), "Listed items");
        Ok(items)
    }

    #[instrument(skip(self))]
    async fn get_item(&self, id: Uuid) -> ItemResult<Option<Item>> {
        let item = self.collection.find_one(Self::by_id(id)).await?;
        Ok(item)
    }

    #[instrument(skip(self, item), fields(item_id = %item.id))]
    async fn create_item(&self, item: Item) -> ItemResult<()> {
        self.collection.insert_one(&item).await.map_err(|e| {
            if is_duplicate_key(&e) {
                ItemError::DuplicateKey(item.id)
            } else {
                ItemError::from(e)
            }
        })?;

        tracing::info!("Item created successfully");
        Ok(())
    }

    #[instrument(skip(self, item), fields(item_id = %item.id))]
    async fn update_item(&self, item: Item) -> ItemResult<bool> {
        let result = self
            .collection
            .replace_one(Self::by_id(item.id), &item)
            .await?;

        let matched = result.matched_count > 0;
        if matched {
            tracing::info!("Item updated successfully");
        }
        Ok(matched)
    }

    #[instrument(skip(self))]
    async fn delete_item(&self, id: Uuid) -> ItemResult<bool> {
        let result = self.collection.delete_one(Self::by_id(id)).await?;

        let deleted = result.deleted_count > 0;
        if deleted {
            tracing::info!("Item deleted successfully");
        }
        Ok(deleted)
    }
}
