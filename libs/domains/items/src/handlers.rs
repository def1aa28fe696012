use axum::{
    Json, Router,
    extract::{OriginalUri, Query, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    UuidPath, ValidatedJson,
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, ConflictResponse,
        ServiceUnavailableResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItemDto, ItemDto, ItemFilter, UpdateItemDto};
use crate::repository::ItemRepository;
use crate::service::ItemService;

/// OpenAPI documentation for Items API
#[derive(OpenApi)]
#[openapi(
    paths(list_items, create_item, get_item, update_item, delete_item),
    components(
        schemas(ItemDto, CreateItemDto, UpdateItemDto),
        responses(
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            ConflictResponse,
            ServiceUnavailableResponse
        )
    ),
    tags(
        (name = "Items", description = "Item catalog endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;

/// Items router; mount it at the resource root, e.g. `/items`.
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/{id}", get(get_item).put(update_item).delete(delete_item))
        .with_state(shared_service)
}

/// List items, optionally filtered by name
#[utoipa::path(
    get,
    path = "",
    tag = "Items",
    params(ItemFilter),
    responses(
        (status = 200, description = "List of items", body = Vec<ItemDto>),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn list_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    Query(filter): Query<ItemFilter>,
) -> ItemResult<Json<Vec<ItemDto>>> {
    let items = service.list_items(filter).await?;
    Ok(Json(items.into_iter().map(ItemDto::from).collect()))
}

/// Create a new item
#[utoipa::path(
    post,
    path = "",
    tag = "Items",
    request_body = CreateItemDto,
    responses(
        (status = 201, description = "Item created", body = ItemDto,
            headers(("Location" = String, description = "URL of the created item"))),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn create_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    OriginalUri(uri): OriginalUri,
    ValidatedJson(input): ValidatedJson<CreateItemDto>,
) -> ItemResult<impl IntoResponse> {
    let item = service.create_item(input).await?;

    let location = format!("{}/{}", uri.path().trim_end_matches('/'), item.id);
    let location = HeaderValue::from_str(&location)
        .map_err(|e| ItemError::Validation(format!("invalid location: {}", e)))?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ItemDto::from(item)),
    ))
}

/// Get an item by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = ItemDto),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, description = "Item not found"),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn get_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    UuidPath(id): UuidPath,
) -> ItemResult<Json<ItemDto>> {
    let item = service.get_item(id).await?;
    Ok(Json(item.into()))
}

/// Replace an item's name and price
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    request_body = UpdateItemDto,
    responses(
        (status = 204, description = "Item updated"),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, description = "Item not found"),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn update_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateItemDto>,
) -> ItemResult<StatusCode> {
    service.update_item(id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, description = "Item not found"),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn delete_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    UuidPath(id): UuidPath,
) -> ItemResult<StatusCode> {
    service.delete_item(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
