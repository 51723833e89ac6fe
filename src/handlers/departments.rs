use axum::extract::{Extension, Path};
use axum::Json;

use crate::auth::roles;
use crate::database::models::department::Department;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::services::department_service::{self, CreateDepartment, UpdateDepartment};

pub async fn list() -> Result<Json<Vec<Department>>, ApiError> {
    Ok(Json(department_service::find_all().await?))
}

pub async fn get(Path(id): Path<i32>) -> Result<Json<Department>, ApiError> {
    Ok(Json(department_service::find_one(id).await?))
}

pub async fn create(
    Extension(user): Extension<AuthUser>,
    Json(input): Json<CreateDepartment>,
) -> Result<Json<Department>, ApiError> {
    user.require_any(&[roles::ADMIN, roles::EDITOR])?;
    Ok(Json(department_service::create(input).await?))
}

pub async fn update(
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateDepartment>,
) -> Result<Json<Department>, ApiError> {
    user.require_any(&[roles::ADMIN, roles::EDITOR])?;
    Ok(Json(department_service::update(id, input).await?))
}

pub async fn remove(
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i32>,
) -> Result<Json<Department>, ApiError> {
    user.require_any(&[roles::ADMIN, roles::EDITOR])?;
    Ok(Json(department_service::remove(id).await?))
}
