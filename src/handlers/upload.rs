use axum::extract::{Extension, Multipart};
use axum::Json;
use serde_json::{json, Value};

use crate::auth::roles;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::services::upload_service;

/// Accepts a multipart form with a single "file" field holding the image
pub async fn staff_image(
    Extension(user): Extension<AuthUser>,
    mut multipart: Multipart,
) -> Result<Json<Value>, ApiError> {
    user.require_any(&[roles::ADMIN, roles::EDITOR])?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let content_type = field.content_type().map(|s| s.to_string());
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(e.to_string()))?;

        let url =
            upload_service::save_staff_image(bytes.to_vec(), content_type.as_deref()).await?;
        return Ok(Json(json!({ "url": url })));
    }

    Err(ApiError::bad_request("No file uploaded"))
}
