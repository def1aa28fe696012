//! Items Domain
//!
//! The Item catalog: entity and DTOs, the repository abstraction with MongoDB
//! and in-memory implementations, the service and the HTTP handlers.
//!
//! ```text
//! Handlers    HTTP extraction, status mapping
//!    │
//! Service     id generation, filtering, existence checks
//!    │
//! Repository  trait + MongoDB / in-memory implementations
//!    │
//! Models      entity, DTOs, stored-format codecs
//! ```
//!
//! ```rust,no_run
//! use domain_items::{handlers, ItemService, MongoItemRepository};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let repository = MongoItemRepository::new(client.database("catalog"));
//! let router = axum::Router::new().nest("/items", handlers::router(ItemService::new(repository)));
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{ItemError, ItemResult};
pub use handlers::ApiDoc;
pub use memory::InMemoryItemRepository;
pub use models::{CreateItemDto, Item, ItemDto, ItemFilter, UpdateItemDto};
pub use mongodb::MongoItemRepository;
pub use repository::ItemRepository;
pub use service::ItemService;
