use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::codec;

/// Item entity as stored in MongoDB.
///
/// `id` and `created_date` are assigned once by [`Item::new`] and carried
/// over unchanged by [`Item::with_update`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(rename = "_id", with = "codec::uuid_string")]
    pub id: Uuid,
    /// May be absent in documents written by other clients
    #[serde(default)]
    pub name: Option<String>,
    pub price: Decimal,
    #[serde(with = "codec::datetime_string")]
    pub created_date: DateTime<Utc>,
}

/// Item as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    pub id: Uuid,
    pub name: Option<String>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64, example = 12.5)]
    pub price: Decimal,
    pub created_date: DateTime<Utc>,
}

/// DTO for creating a new item
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateItemDto {
    #[validate(length(min = 1, max = 200))]
    #[schema(example = "Potion")]
    pub name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64, example = 12.5)]
    pub price: Decimal,
}

/// DTO for replacing an item's name and price
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateItemDto {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64)]
    pub price: Decimal,
}

/// Query parameters for listing items
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ItemFilter {
    /// Case-insensitive substring of the item name
    pub name: Option<String>,
}

impl ItemFilter {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// An empty or whitespace-only filter selects everything.
    fn needle(&self) -> Option<String> {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .map(str::to_lowercase)
    }

    pub fn is_empty(&self) -> bool {
        self.needle().is_none()
    }

    pub fn matches(&self, item: &Item) -> bool {
        match self.needle() {
            None => true,
            Some(needle) => item
                .name
                .as_deref()
                .is_some_and(|name| name.to_lowercase().contains(&needle)),
        }
    }

    /// Keep the items this filter matches, preserving order.
    pub fn apply(&self, items: Vec<Item>) -> Vec<Item> {
        if self.is_empty() {
            return items;
        }
        items.into_iter().filter(|item| self.matches(item)).collect()
    }
}

impl Item {
    /// New item with a fresh v4 id, stamped with the current UTC time.
    pub fn new(input: CreateItemDto) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: Some(input.name),
            price: input.price,
            created_date: Utc::now(),
        }
    }

    /// Copy of this item with `name` and `price` replaced.
    pub fn with_update(&self, update: UpdateItemDto) -> Self {
        Self {
            name: Some(update.name),
            price: update.price,
            ..self.clone()
        }
    }
}

impl From<Item> for ItemDto {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            price: item.price,
            created_date: item.created_date,
        }
    }
}
