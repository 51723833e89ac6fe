//! Chiang Rai Studies sub-site endpoints. Reads are public, writes sit
//! behind the JWT middleware with the usual editor gate.

use axum::extract::{Extension, Path, Query};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::auth::roles;
use crate::database::models::chiang_rai::{
    Activity, ActivityType, Article, Artifact, FacultyStaffPick, Identity, IdentityCategory,
    SiteStaff,
};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::services::chiang_rai_service::{
    self, ActivityPage, CreateActivity, CreateArticle, CreateArtifact, CreateSiteStaff,
    ImportSiteStaff, SearchResults, UpdateActivity, UpdateArticle, UpdateArtifact,
};

// --- Identities ---

pub async fn list_identities() -> Result<Json<Vec<Identity>>, ApiError> {
    Ok(Json(chiang_rai_service::find_identities().await?))
}

pub async fn get_identity(Path(code): Path<String>) -> Result<Json<Identity>, ApiError> {
    Ok(Json(chiang_rai_service::find_identity(&code).await?))
}

// --- Search ---

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

pub async fn search(Query(query): Query<SearchQuery>) -> Result<Json<SearchResults>, ApiError> {
    Ok(Json(chiang_rai_service::search(&query.q).await?))
}

// --- Artifacts ---

#[derive(Debug, Deserialize)]
pub struct ArtifactQuery {
    pub category: Option<String>,
    pub search: Option<String>,
}

pub async fn list_artifacts(
    Query(query): Query<ArtifactQuery>,
) -> Result<Json<Vec<Artifact>>, ApiError> {
    // "ALL" and unknown category values fall through to an unfiltered list
    let category = query.category.as_deref().and_then(IdentityCategory::parse);
    let artifacts = chiang_rai_service::find_artifacts(category, query.search.as_deref()).await?;
    Ok(Json(artifacts))
}

pub async fn get_artifact(Path(id): Path<Uuid>) -> Result<Json<Artifact>, ApiError> {
    Ok(Json(chiang_rai_service::find_artifact(id).await?))
}

pub async fn create_artifact(
    Extension(user): Extension<AuthUser>,
    Json(input): Json<CreateArtifact>,
) -> Result<Json<Artifact>, ApiError> {
    user.require_any(&[roles::ADMIN, roles::EDITOR])?;
    Ok(Json(chiang_rai_service::create_artifact(input).await?))
}

pub async fn update_artifact(
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateArtifact>,
) -> Result<Json<Artifact>, ApiError> {
    user.require_any(&[roles::ADMIN, roles::EDITOR])?;
    Ok(Json(chiang_rai_service::update_artifact(id, input).await?))
}

pub async fn remove_artifact(
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    user.require_any(&[roles::ADMIN, roles::EDITOR])?;
    chiang_rai_service::remove_artifact(id).await?;
    Ok(Json(json!({ "success": true })))
}

// --- Articles ---

pub async fn list_articles() -> Result<Json<Vec<Article>>, ApiError> {
    Ok(Json(chiang_rai_service::find_articles().await?))
}

pub async fn get_article_by_slug(Path(slug): Path<String>) -> Result<Json<Article>, ApiError> {
    Ok(Json(chiang_rai_service::find_article_by_slug(&slug).await?))
}

/// Admin edit pages fetch by id rather than slug
pub async fn get_article(Path(id): Path<Uuid>) -> Result<Json<Article>, ApiError> {
    Ok(Json(chiang_rai_service::find_article(id).await?))
}

pub async fn create_article(
    Extension(user): Extension<AuthUser>,
    Json(input): Json<CreateArticle>,
) -> Result<Json<Article>, ApiError> {
    user.require_any(&[roles::ADMIN, roles::EDITOR])?;
    Ok(Json(chiang_rai_service::create_article(input).await?))
}

pub async fn update_article(
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateArticle>,
) -> Result<Json<Article>, ApiError> {
    user.require_any(&[roles::ADMIN, roles::EDITOR])?;
    Ok(Json(chiang_rai_service::update_article(id, input).await?))
}

pub async fn remove_article(
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    user.require_any(&[roles::ADMIN, roles::EDITOR])?;
    chiang_rai_service::remove_article(id).await?;
    Ok(Json(json!({ "success": true })))
}

// --- Activities ---

#[derive(Debug, Deserialize)]
pub struct ActivityQuery {
    #[serde(rename = "type")]
    pub activity_type: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

pub async fn list_activities(
    Query(query): Query<ActivityQuery>,
) -> Result<Json<ActivityPage>, ApiError> {
    let kind = query.activity_type.as_deref().and_then(ActivityType::parse);
    let page = chiang_rai_service::find_activities(
        kind,
        query.page.unwrap_or(1),
        query.limit.unwrap_or(10),
    )
    .await?;
    Ok(Json(page))
}

pub async fn get_activity_by_slug(Path(slug): Path<String>) -> Result<Json<Activity>, ApiError> {
    Ok(Json(chiang_rai_service::find_activity_by_slug(&slug).await?))
}

pub async fn get_activity(Path(id): Path<Uuid>) -> Result<Json<Activity>, ApiError> {
    Ok(Json(chiang_rai_service::find_activity(id).await?))
}

pub async fn create_activity(
    Extension(user): Extension<AuthUser>,
    Json(input): Json<CreateActivity>,
) -> Result<Json<Activity>, ApiError> {
    user.require_any(&[roles::ADMIN, roles::EDITOR])?;
    Ok(Json(chiang_rai_service::create_activity(input).await?))
}

pub async fn update_activity(
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateActivity>,
) -> Result<Json<Activity>, ApiError> {
    user.require_any(&[roles::ADMIN, roles::EDITOR])?;
    Ok(Json(chiang_rai_service::update_activity(id, input).await?))
}

pub async fn remove_activity(
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    user.require_any(&[roles::ADMIN, roles::EDITOR])?;
    chiang_rai_service::remove_activity(id).await?;
    Ok(Json(json!({ "success": true })))
}

// --- Sub-site staff ---

pub async fn list_staff() -> Result<Json<Vec<SiteStaff>>, ApiError> {
    Ok(Json(chiang_rai_service::find_site_staff().await?))
}

pub async fn create_staff(
    Extension(user): Extension<AuthUser>,
    Json(input): Json<CreateSiteStaff>,
) -> Result<Json<SiteStaff>, ApiError> {
    user.require_any(&[roles::ADMIN, roles::EDITOR])?;
    Ok(Json(chiang_rai_service::create_site_staff(input).await?))
}

pub async fn import_staff(
    Extension(user): Extension<AuthUser>,
    Json(input): Json<ImportSiteStaff>,
) -> Result<Json<SiteStaff>, ApiError> {
    user.require_any(&[roles::ADMIN, roles::EDITOR])?;
    Ok(Json(chiang_rai_service::import_site_staff(input).await?))
}

pub async fn remove_staff(
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    user.require_any(&[roles::ADMIN, roles::EDITOR])?;
    chiang_rai_service::remove_site_staff(id).await?;
    Ok(Json(json!({ "success": true })))
}

/// Faculty directory listing for the admin import picker
pub async fn faculty_staff(
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<FacultyStaffPick>>, ApiError> {
    user.require_any(&[roles::ADMIN, roles::EDITOR])?;
    Ok(Json(chiang_rai_service::faculty_staff_list().await?))
}
