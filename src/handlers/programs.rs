use axum::extract::{Extension, Path};
use axum::Json;
use uuid::Uuid;

use crate::auth::roles;
use crate::database::models::program::Program;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::services::program_service::{self, CreateProgram, UpdateProgram};

pub async fn list() -> Result<Json<Vec<Program>>, ApiError> {
    Ok(Json(program_service::find_all().await?))
}

pub async fn get(Path(id): Path<Uuid>) -> Result<Json<Program>, ApiError> {
    Ok(Json(program_service::find_one(id).await?))
}

/// Public lookup by the short program code used in frontend URLs
pub async fn get_by_code(Path(code): Path<String>) -> Result<Json<Program>, ApiError> {
    Ok(Json(program_service::find_by_code(&code).await?))
}

pub async fn create(
    Extension(user): Extension<AuthUser>,
    Json(input): Json<CreateProgram>,
) -> Result<Json<Program>, ApiError> {
    user.require_any(&[roles::ADMIN, roles::EDITOR])?;
    Ok(Json(program_service::create(input).await?))
}

pub async fn update(
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateProgram>,
) -> Result<Json<Program>, ApiError> {
    user.require_any(&[roles::ADMIN, roles::EDITOR])?;
    Ok(Json(program_service::update(id, input).await?))
}

pub async fn remove(
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Program>, ApiError> {
    user.require_any(&[roles::ADMIN, roles::EDITOR])?;
    Ok(Json(program_service::remove(id).await?))
}
