use axum::extract::{Extension, Path};
use axum::Json;
use uuid::Uuid;

use crate::auth::roles;
use crate::database::models::staff::{StaffListItem, StaffProfile};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::services::staff_service::{self, CreateStaff, UpdateStaff};

pub async fn list() -> Result<Json<Vec<StaffListItem>>, ApiError> {
    Ok(Json(staff_service::find_all().await?))
}

pub async fn get(Path(id): Path<Uuid>) -> Result<Json<StaffListItem>, ApiError> {
    Ok(Json(staff_service::find_one(id).await?))
}

pub async fn create(
    Extension(user): Extension<AuthUser>,
    Json(input): Json<CreateStaff>,
) -> Result<Json<StaffProfile>, ApiError> {
    user.require_any(&[roles::ADMIN, roles::EDITOR])?;
    Ok(Json(staff_service::create(input).await?))
}

pub async fn update(
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateStaff>,
) -> Result<Json<StaffProfile>, ApiError> {
    user.require_any(&[roles::ADMIN, roles::EDITOR])?;
    Ok(Json(staff_service::update(id, input).await?))
}

pub async fn remove(
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<StaffProfile>, ApiError> {
    user.require_any(&[roles::ADMIN, roles::EDITOR])?;
    Ok(Json(staff_service::remove(id).await?))
}
