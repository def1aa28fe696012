use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Item not found: {0}")]
    NotFound(Uuid),

    #[error("Item with id '{0}' already exists")]
    DuplicateKey(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Document store unavailable: {0}")]
    StoreUnavailable(String),
}

pub type ItemResult<T> = Result<T, ItemError>;

impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::NotFound(id) => AppError::NotFound(format!("Item {} not found", id)),
            ItemError::DuplicateKey(id) => {
                AppError::Conflict(format!("Item with id '{}' already exists", id))
            }
            ItemError::Validation(msg) => AppError::BadRequest(msg),
            ItemError::StoreUnavailable(msg) => AppError::ServiceUnavailable(msg),
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        match self {
            // Missing items answer with a bare 404.
            ItemError::NotFound(id) => {
                tracing::info!(item_id = %id, "Item not found");
                StatusCode::NOT_FOUND.into_response()
            }
            other => AppError::from(other).into_response(),
        }
    }
}

/// Any driver error that is not a duplicate key means the store could not
/// serve the request.
impl From<mongodb::error::Error> for ItemError {
    fn from(err: mongodb::error::Error) -> Self {
        ItemError::StoreUnavailable(err.to_string())
    }
}
