use axum::extract::{Extension, Path};
use axum::Json;

use crate::auth::roles;
use crate::database::models::department::AdminPosition;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::services::department_service::{self, CreateAdminPosition, UpdateAdminPosition};

pub async fn list() -> Result<Json<Vec<AdminPosition>>, ApiError> {
    Ok(Json(department_service::find_all_admin_positions().await?))
}

pub async fn create(
    Extension(user): Extension<AuthUser>,
    Json(input): Json<CreateAdminPosition>,
) -> Result<Json<AdminPosition>, ApiError> {
    user.require_any(&[roles::ADMIN, roles::EDITOR])?;
    Ok(Json(department_service::create_admin_position(input).await?))
}

pub async fn update(
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateAdminPosition>,
) -> Result<Json<AdminPosition>, ApiError> {
    user.require_any(&[roles::ADMIN, roles::EDITOR])?;
    Ok(Json(department_service::update_admin_position(id, input).await?))
}

pub async fn remove(
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i32>,
) -> Result<Json<AdminPosition>, ApiError> {
    user.require_any(&[roles::ADMIN, roles::EDITOR])?;
    Ok(Json(department_service::remove_admin_position(id).await?))
}
