//! JSON body extractor that runs `validator` rules.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Like [`Json`], but the payload must also pass [`Validate::validate`].
///
/// Rejections:
/// - body is not JSON / wrong content type: axum's status with `JSON_EXTRACTION`
/// - validation fails: 400 with `VALIDATION_ERROR` and per-field `details`
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct CreateItemDto {
///     #[validate(length(min = 1, max = 200))]
///     name: String,
/// }
///
/// async fn create(ValidatedJson(input): ValidatedJson<CreateItemDto>) -> StatusCode {
///     StatusCode::CREATED
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::from(rejection).into_response())?;

        data.validate()
            .map_err(|errors| AppError::from(errors).into_response())?;

        Ok(ValidatedJson(data))
    }
}
