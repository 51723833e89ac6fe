use axum::extract::{Extension, Path};
use axum::Json;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::auth::roles;
use crate::database::models::news::News;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::services::news_service::{self, CreateNews, UpdateNews};

pub async fn list() -> Result<Json<Vec<News>>, ApiError> {
    Ok(Json(news_service::find_all().await?))
}

pub async fn get(Path(id): Path<Uuid>) -> Result<Json<News>, ApiError> {
    Ok(Json(news_service::find_one(id).await?))
}

pub async fn get_by_slug(Path(slug): Path<String>) -> Result<Json<News>, ApiError> {
    Ok(Json(news_service::find_by_slug(&slug).await?))
}

pub async fn create(
    Extension(user): Extension<AuthUser>,
    Json(input): Json<CreateNews>,
) -> Result<Json<News>, ApiError> {
    user.require_any(&[roles::ADMIN, roles::EDITOR])?;
    Ok(Json(news_service::create(input).await?))
}

pub async fn update(
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateNews>,
) -> Result<Json<News>, ApiError> {
    user.require_any(&[roles::ADMIN, roles::EDITOR])?;
    Ok(Json(news_service::update(id, input).await?))
}

pub async fn remove(
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    user.require_any(&[roles::ADMIN, roles::EDITOR])?;
    news_service::remove(id).await?;
    Ok(Json(json!({ "success": true })))
}
