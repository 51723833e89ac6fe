//! Chiang Rai Studies sub-site: identities, artifacts, articles, activities
//! and the sub-site staff page.
//!
//! Public listing endpoints seed their table on first use, see [`seed_data`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::info;
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::database::models::chiang_rai::{
    Activity, ActivityType, Article, Artifact, FacultyStaffPick, Identity, IdentityCategory,
    SiteStaff, StaffGroup,
};
use crate::database::models::staff::StaffProfile;
use crate::services::{seed_data, ServiceError};

const IDENTITY_COLUMNS: &str = "id, code, name_th, name_en, description, image_url";

const ARTIFACT_COLUMNS: &str = "id, title, description, content, identity_id, category, \
     media_type, media_urls, thumbnail_url, author, is_published, created_at, updated_at";

// "abstract" is reserved in Rust, so the row type carries it as abstract_text
const ARTICLE_COLUMNS: &str = "id, title, slug, abstract AS abstract_text, content, \
     thumbnail_url, tags, author, is_published, published_at, created_at";

const ACTIVITY_COLUMNS: &str = "id, title, slug, activity_type, description, content, \
     thumbnail_url, media_urls, location, event_date, event_end_date, author, tags, \
     is_published, is_featured, published_at, created_at, updated_at";

const SITE_STAFF_COLUMNS: &str = "id, staff_group, title, first_name, last_name, position, \
     academic_title, email, image_url, bio, faculty_staff_id, sort_order, is_active, \
     created_at, updated_at";

const SEARCH_LIMIT: i64 = 10;

// ---------------------------------------------------------------------------
// Lazy seeding
//
// Each ensure_* helper counts the table and inserts the fixed batch when it
// is empty. The batch goes in as one multi-row INSERT, so a table is either
// fully seeded or untouched. The count and the insert are still not atomic:
// two concurrent first requests can both observe zero and both insert,
// duplicating the batch.

fn identities_insert() -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(
        "INSERT INTO chiang_rai_identities (code, name_th, name_en, description, image_url) ",
    );
    builder.push_values(seed_data::default_identities(), |mut row, seed| {
        row.push_bind(seed.code)
            .push_bind(seed.name_th)
            .push_bind(seed.name_en)
            .push_bind(seed.description)
            .push_bind(seed.image_url);
    });
    builder
}

fn artifacts_insert() -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(
        "INSERT INTO chiang_rai_artifacts \
         (title, description, content, category, media_type, media_urls, thumbnail_url, is_published) ",
    );
    builder.push_values(seed_data::sample_artifacts(), |mut row, seed| {
        let media_urls: Vec<String> = seed.media_urls.iter().map(|u| u.to_string()).collect();
        row.push_bind(seed.title)
            .push_bind(seed.description)
            .push_bind(seed.content)
            .push_bind(seed.category)
            .push_bind(seed.media_type)
            .push_bind(media_urls)
            .push_bind(seed.thumbnail_url)
            .push_bind(true);
    });
    builder
}

fn articles_insert() -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(
        "INSERT INTO chiang_rai_articles \
         (title, slug, abstract, content, author, thumbnail_url, is_published, published_at) ",
    );
    builder.push_values(seed_data::sample_articles(), |mut row, seed| {
        row.push_bind(seed.title)
            .push_bind(seed.slug)
            .push_bind(seed.abstract_text)
            .push_bind(seed.content)
            .push_bind(seed.author)
            .push_bind(seed.thumbnail_url)
            .push_bind(true)
            .push_bind(Utc::now());
    });
    builder
}

fn activities_insert() -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(
        "INSERT INTO chiang_rai_activities \
         (title, slug, activity_type, description, content, thumbnail_url, is_published, published_at) ",
    );
    builder.push_values(seed_data::sample_activities(), |mut row, seed| {
        row.push_bind(seed.title)
            .push_bind(seed.slug)
            .push_bind(seed.activity_type)
            .push_bind(seed.description)
            .push_bind(seed.content)
            .push_bind(seed.thumbnail_url)
            .push_bind(true)
            .push_bind(seed.published_date());
    });
    builder
}

async fn ensure_identities_seeded(pool: &PgPool) -> Result<(), ServiceError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM chiang_rai_identities")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(());
    }

    info!("Seeding Chiang Rai identity categories");
    identities_insert().build().execute(pool).await?;
    Ok(())
}

async fn ensure_artifacts_seeded(pool: &PgPool) -> Result<(), ServiceError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM chiang_rai_artifacts")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(());
    }

    info!("Seeding Chiang Rai artifacts");
    artifacts_insert().build().execute(pool).await?;
    Ok(())
}

async fn ensure_articles_seeded(pool: &PgPool) -> Result<(), ServiceError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM chiang_rai_articles")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(());
    }

    info!("Seeding Chiang Rai articles");
    articles_insert().build().execute(pool).await?;
    Ok(())
}

async fn ensure_activities_seeded(pool: &PgPool) -> Result<(), ServiceError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM chiang_rai_activities")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(());
    }

    info!("Seeding Chiang Rai activities");
    activities_insert().build().execute(pool).await?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Identities

pub async fn find_identities() -> Result<Vec<Identity>, ServiceError> {
    let pool = DatabaseManager::pool().await?;
    ensure_identities_seeded(&pool).await?;

    let identities = sqlx::query_as::<_, Identity>(&format!(
        "SELECT {IDENTITY_COLUMNS} FROM chiang_rai_identities ORDER BY id"
    ))
    .fetch_all(&pool)
    .await?;

    Ok(identities)
}

pub async fn find_identity(code: &str) -> Result<Identity, ServiceError> {
    let category = IdentityCategory::parse(code)
        .ok_or_else(|| ServiceError::not_found(format!("Identity \"{}\" not found", code)))?;

    let pool = DatabaseManager::pool().await?;
    ensure_identities_seeded(&pool).await?;

    let identity = sqlx::query_as::<_, Identity>(&format!(
        "SELECT {IDENTITY_COLUMNS} FROM chiang_rai_identities WHERE code = $1"
    ))
    .bind(category)
    .fetch_optional(&pool)
    .await?
    .ok_or_else(|| ServiceError::not_found(format!("Identity \"{}\" not found", code)))?;

    Ok(identity)
}

// ---------------------------------------------------------------------------
// Search

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub artifacts: Vec<Artifact>,
    pub articles: Vec<Article>,
    pub activities: Vec<Activity>,
}

/// Substring search across artifacts, articles and activities, at most
/// [`SEARCH_LIMIT`] hits per collection. A blank query returns empty sets
/// without touching the database.
pub async fn search(query: &str) -> Result<SearchResults, ServiceError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Ok(SearchResults::default());
    }

    let pool = DatabaseManager::pool().await?;
    let pattern = format!("%{}%", trimmed);

    let (artifacts, articles, activities) = tokio::try_join!(
        search_artifacts(&pool, &pattern),
        search_articles(&pool, &pattern),
        search_activities(&pool, &pattern),
    )?;

    Ok(SearchResults { artifacts, articles, activities })
}

async fn search_artifacts(pool: &PgPool, pattern: &str) -> Result<Vec<Artifact>, ServiceError> {
    let rows = sqlx::query_as::<_, Artifact>(&format!(
        "SELECT {ARTIFACT_COLUMNS} FROM chiang_rai_artifacts
         WHERE is_published = true AND (title ILIKE $1 OR description ILIKE $1)
         ORDER BY created_at DESC LIMIT $2"
    ))
    .bind(pattern)
    .bind(SEARCH_LIMIT)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

async fn search_articles(pool: &PgPool, pattern: &str) -> Result<Vec<Article>, ServiceError> {
    let rows = sqlx::query_as::<_, Article>(&format!(
        "SELECT {ARTICLE_COLUMNS} FROM chiang_rai_articles
         WHERE is_published = true AND (title ILIKE $1 OR abstract ILIKE $1)
         ORDER BY published_at DESC LIMIT $2"
    ))
    .bind(pattern)
    .bind(SEARCH_LIMIT)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

async fn search_activities(pool: &PgPool, pattern: &str) -> Result<Vec<Activity>, ServiceError> {
    let rows = sqlx::query_as::<_, Activity>(&format!(
        "SELECT {ACTIVITY_COLUMNS} FROM chiang_rai_activities
         WHERE is_published = true AND (title ILIKE $1 OR description ILIKE $1)
         ORDER BY published_at DESC LIMIT $2"
    ))
    .bind(pattern)
    .bind(SEARCH_LIMIT)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

// ---------------------------------------------------------------------------
// Artifacts

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArtifact {
    pub title: String,
    pub description: Option<String>,
    pub content: Option<String>,
    pub identity_id: Option<i32>,
    pub category: Option<IdentityCategory>,
    pub media_type: Option<String>,
    pub media_urls: Option<Vec<String>>,
    pub thumbnail_url: Option<String>,
    pub author: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArtifact {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub identity_id: Option<i32>,
    pub category: Option<IdentityCategory>,
    pub media_type: Option<String>,
    pub media_urls: Option<Vec<String>>,
    pub thumbnail_url: Option<String>,
    pub author: Option<String>,
    pub is_published: Option<bool>,
}

pub async fn find_artifacts(
    category: Option<IdentityCategory>,
    search: Option<&str>,
) -> Result<Vec<Artifact>, ServiceError> {
    let pool = DatabaseManager::pool().await?;
    ensure_artifacts_seeded(&pool).await?;

    let search = search.map(str::trim).filter(|s| !s.is_empty());

    let artifacts = match (category, search) {
        (Some(category), Some(term)) => {
            sqlx::query_as::<_, Artifact>(&format!(
                "SELECT {ARTIFACT_COLUMNS} FROM chiang_rai_artifacts
                 WHERE is_published = true AND category = $1
                   AND (title ILIKE $2 OR description ILIKE $2)
                 ORDER BY created_at DESC"
            ))
            .bind(category)
            .bind(format!("%{}%", term))
            .fetch_all(&pool)
            .await?
        }
        (Some(category), None) => {
            sqlx::query_as::<_, Artifact>(&format!(
                "SELECT {ARTIFACT_COLUMNS} FROM chiang_rai_artifacts
                 WHERE is_published = true AND category = $1
                 ORDER BY created_at DESC"
            ))
            .bind(category)
            .fetch_all(&pool)
            .await?
        }
        (None, Some(term)) => {
            sqlx::query_as::<_, Artifact>(&format!(
                "SELECT {ARTIFACT_COLUMNS} FROM chiang_rai_artifacts
                 WHERE is_published = true AND (title ILIKE $1 OR description ILIKE $1)
                 ORDER BY created_at DESC"
            ))
            .bind(format!("%{}%", term))
            .fetch_all(&pool)
            .await?
        }
        (None, None) => {
            sqlx::query_as::<_, Artifact>(&format!(
                "SELECT {ARTIFACT_COLUMNS} FROM chiang_rai_artifacts
                 WHERE is_published = true ORDER BY created_at DESC"
            ))
            .fetch_all(&pool)
            .await?
        }
    };

    Ok(artifacts)
}

pub async fn find_artifact(id: Uuid) -> Result<Artifact, ServiceError> {
    let pool = DatabaseManager::pool().await?;

    let artifact = sqlx::query_as::<_, Artifact>(&format!(
        "SELECT {ARTIFACT_COLUMNS} FROM chiang_rai_artifacts WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(&pool)
    .await?
    .ok_or_else(|| ServiceError::not_found(format!("Artifact with ID {} not found", id)))?;

    Ok(artifact)
}

pub async fn create_artifact(input: CreateArtifact) -> Result<Artifact, ServiceError> {
    let pool = DatabaseManager::pool().await?;

    let artifact = sqlx::query_as::<_, Artifact>(&format!(
        "INSERT INTO chiang_rai_artifacts
             (title, description, content, identity_id, category, media_type, media_urls,
              thumbnail_url, author, is_published)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, true)
         RETURNING {ARTIFACT_COLUMNS}"
    ))
    .bind(&input.title)
    .bind(&input.description)
    .bind(&input.content)
    .bind(input.identity_id)
    .bind(input.category)
    .bind(&input.media_type)
    .bind(&input.media_urls)
    .bind(&input.thumbnail_url)
    .bind(&input.author)
    .fetch_one(&pool)
    .await?;

    Ok(artifact)
}

pub async fn update_artifact(id: Uuid, input: UpdateArtifact) -> Result<Artifact, ServiceError> {
    let pool = DatabaseManager::pool().await?;

    let artifact = sqlx::query_as::<_, Artifact>(&format!(
        "UPDATE chiang_rai_artifacts SET
             title = COALESCE($2, title),
             description = COALESCE($3, description),
             content = COALESCE($4, content),
             identity_id = COALESCE($5, identity_id),
             category = COALESCE($6, category),
             media_type = COALESCE($7, media_type),
             media_urls = COALESCE($8, media_urls),
             thumbnail_url = COALESCE($9, thumbnail_url),
             author = COALESCE($10, author),
             is_published = COALESCE($11, is_published),
             updated_at = now()
         WHERE id = $1
         RETURNING {ARTIFACT_COLUMNS}"
    ))
    .bind(id)
    .bind(&input.title)
    .bind(&input.description)
    .bind(&input.content)
    .bind(input.identity_id)
    .bind(input.category)
    .bind(&input.media_type)
    .bind(&input.media_urls)
    .bind(&input.thumbnail_url)
    .bind(&input.author)
    .bind(input.is_published)
    .fetch_optional(&pool)
    .await?
    .ok_or_else(|| ServiceError::not_found(format!("Artifact with ID {} not found", id)))?;

    Ok(artifact)
}

pub async fn remove_artifact(id: Uuid) -> Result<(), ServiceError> {
    let pool = DatabaseManager::pool().await?;

    let result = sqlx::query("DELETE FROM chiang_rai_artifacts WHERE id = $1")
        .bind(id)
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ServiceError::not_found(format!("Artifact with ID {} not found", id)));
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Articles

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticle {
    pub title: String,
    pub slug: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub content: String,
    pub thumbnail_url: Option<String>,
    pub tags: Option<Vec<String>>,
    pub author: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticle {
    pub title: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub content: Option<String>,
    pub thumbnail_url: Option<String>,
    pub tags: Option<Vec<String>>,
    pub author: Option<String>,
    pub is_published: Option<bool>,
}

fn slugify(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

pub async fn find_articles() -> Result<Vec<Article>, ServiceError> {
    let pool = DatabaseManager::pool().await?;
    ensure_articles_seeded(&pool).await?;

    let articles = sqlx::query_as::<_, Article>(&format!(
        "SELECT {ARTICLE_COLUMNS} FROM chiang_rai_articles
         WHERE is_published = true ORDER BY published_at DESC"
    ))
    .fetch_all(&pool)
    .await?;

    Ok(articles)
}

pub async fn find_article(id: Uuid) -> Result<Article, ServiceError> {
    let pool = DatabaseManager::pool().await?;

    let article = sqlx::query_as::<_, Article>(&format!(
        "SELECT {ARTICLE_COLUMNS} FROM chiang_rai_articles WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(&pool)
    .await?
    .ok_or_else(|| ServiceError::not_found(format!("Article with ID {} not found", id)))?;

    Ok(article)
}

pub async fn find_article_by_slug(slug: &str) -> Result<Article, ServiceError> {
    let pool = DatabaseManager::pool().await?;
    ensure_articles_seeded(&pool).await?;

    let article = sqlx::query_as::<_, Article>(&format!(
        "SELECT {ARTICLE_COLUMNS} FROM chiang_rai_articles WHERE slug = $1"
    ))
    .bind(slug)
    .fetch_optional(&pool)
    .await?
    .ok_or_else(|| ServiceError::not_found(format!("Article with slug {} not found", slug)))?;

    Ok(article)
}

pub async fn create_article(input: CreateArticle) -> Result<Article, ServiceError> {
    let slug = match &input.slug {
        Some(slug) if !slug.trim().is_empty() => slug.trim().to_string(),
        _ => slugify(&input.title),
    };
    if slug.is_empty() {
        return Err(ServiceError::bad_request("Cannot derive a slug from the title"));
    }

    let pool = DatabaseManager::pool().await?;

    let article = sqlx::query_as::<_, Article>(&format!(
        "INSERT INTO chiang_rai_articles
             (title, slug, abstract, content, thumbnail_url, tags, author, is_published, published_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, true, now())
         RETURNING {ARTICLE_COLUMNS}"
    ))
    .bind(&input.title)
    .bind(&slug)
    .bind(&input.abstract_text)
    .bind(&input.content)
    .bind(&input.thumbnail_url)
    .bind(&input.tags)
    .bind(&input.author)
    .fetch_one(&pool)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db) if db.is_unique_violation() => {
            ServiceError::Conflict(format!("Article slug \"{}\" already exists", slug))
        }
        other => ServiceError::Database(other),
    })?;

    Ok(article)
}

pub async fn update_article(id: Uuid, input: UpdateArticle) -> Result<Article, ServiceError> {
    let pool = DatabaseManager::pool().await?;

    let article = sqlx::query_as::<_, Article>(&format!(
        "UPDATE chiang_rai_articles SET
             title = COALESCE($2, title),
             abstract = COALESCE($3, abstract),
             content = COALESCE($4, content),
             thumbnail_url = COALESCE($5, thumbnail_url),
             tags = COALESCE($6, tags),
             author = COALESCE($7, author),
             is_published = COALESCE($8, is_published)
         WHERE id = $1
         RETURNING {ARTICLE_COLUMNS}"
    ))
    .bind(id)
    .bind(&input.title)
    .bind(&input.abstract_text)
    .bind(&input.content)
    .bind(&input.thumbnail_url)
    .bind(&input.tags)
    .bind(&input.author)
    .bind(input.is_published)
    .fetch_optional(&pool)
    .await?
    .ok_or_else(|| ServiceError::not_found(format!("Article with ID {} not found", id)))?;

    Ok(article)
}

pub async fn remove_article(id: Uuid) -> Result<(), ServiceError> {
    let pool = DatabaseManager::pool().await?;

    let result = sqlx::query("DELETE FROM chiang_rai_articles WHERE id = $1")
        .bind(id)
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ServiceError::not_found(format!("Article with ID {} not found", id)));
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Activities

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl PageMeta {
    fn new(page: i64, limit: i64, total: i64) -> Self {
        let total_pages = if total == 0 { 0 } else { (total + limit - 1) / limit };
        PageMeta { page, limit, total, total_pages }
    }
}

#[derive(Debug, Serialize)]
pub struct ActivityPage {
    pub data: Vec<Activity>,
    pub meta: PageMeta,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateActivity {
    pub title: String,
    pub slug: Option<String>,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub description: Option<String>,
    pub content: Option<String>,
    pub thumbnail_url: Option<String>,
    pub media_urls: Option<Vec<String>>,
    pub location: Option<String>,
    pub event_date: Option<DateTime<Utc>>,
    pub event_end_date: Option<DateTime<Utc>>,
    pub author: Option<String>,
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub is_featured: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateActivity {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub activity_type: Option<ActivityType>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub thumbnail_url: Option<String>,
    pub media_urls: Option<Vec<String>>,
    pub location: Option<String>,
    pub event_date: Option<DateTime<Utc>>,
    pub event_end_date: Option<DateTime<Utc>>,
    pub author: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_published: Option<bool>,
    pub is_featured: Option<bool>,
}

pub async fn find_activities(
    activity_type: Option<ActivityType>,
    page: i64,
    limit: i64,
) -> Result<ActivityPage, ServiceError> {
    let pool = DatabaseManager::pool().await?;
    ensure_activities_seeded(&pool).await?;

    let page = page.max(1);
    let limit = limit.clamp(1, 100);
    let offset = (page - 1) * limit;

    let (total, data) = match activity_type {
        Some(kind) => {
            let total: i64 = sqlx::query_scalar(
                "SELECT COUNT(*) FROM chiang_rai_activities
                 WHERE is_published = true AND activity_type = $1",
            )
            .bind(kind)
            .fetch_one(&pool)
            .await?;

            let data = sqlx::query_as::<_, Activity>(&format!(
                "SELECT {ACTIVITY_COLUMNS} FROM chiang_rai_activities
                 WHERE is_published = true AND activity_type = $1
                 ORDER BY published_at DESC LIMIT $2 OFFSET $3"
            ))
            .bind(kind)
            .bind(limit)
            .bind(offset)
            .fetch_all(&pool)
            .await?;

            (total, data)
        }
        None => {
            let total: i64 = sqlx::query_scalar(
                "SELECT COUNT(*) FROM chiang_rai_activities WHERE is_published = true",
            )
            .fetch_one(&pool)
            .await?;

            let data = sqlx::query_as::<_, Activity>(&format!(
                "SELECT {ACTIVITY_COLUMNS} FROM chiang_rai_activities
                 WHERE is_published = true
                 ORDER BY published_at DESC LIMIT $1 OFFSET $2"
            ))
            .bind(limit)
            .bind(offset)
            .fetch_all(&pool)
            .await?;

            (total, data)
        }
    };

    Ok(ActivityPage { data, meta: PageMeta::new(page, limit, total) })
}

pub async fn find_activity(id: Uuid) -> Result<Activity, ServiceError> {
    let pool = DatabaseManager::pool().await?;

    let activity = sqlx::query_as::<_, Activity>(&format!(
        "SELECT {ACTIVITY_COLUMNS} FROM chiang_rai_activities WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(&pool)
    .await?
    .ok_or_else(|| ServiceError::not_found(format!("Activity with ID {} not found", id)))?;

    Ok(activity)
}

pub async fn find_activity_by_slug(slug: &str) -> Result<Activity, ServiceError> {
    let pool = DatabaseManager::pool().await?;
    ensure_activities_seeded(&pool).await?;

    let activity = sqlx::query_as::<_, Activity>(&format!(
        "SELECT {ACTIVITY_COLUMNS} FROM chiang_rai_activities WHERE slug = $1"
    ))
    .bind(slug)
    .fetch_optional(&pool)
    .await?
    .ok_or_else(|| ServiceError::not_found(format!("Activity with slug {} not found", slug)))?;

    Ok(activity)
}

pub async fn create_activity(input: CreateActivity) -> Result<Activity, ServiceError> {
    let slug = match &input.slug {
        Some(slug) if !slug.trim().is_empty() => slug.trim().to_string(),
        _ => slugify(&input.title),
    };
    if slug.is_empty() {
        return Err(ServiceError::bad_request("Cannot derive a slug from the title"));
    }

    let pool = DatabaseManager::pool().await?;

    let activity = sqlx::query_as::<_, Activity>(&format!(
        "INSERT INTO chiang_rai_activities
             (title, slug, activity_type, description, content, thumbnail_url, media_urls,
              location, event_date, event_end_date, author, tags, is_published, is_featured,
              published_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, true, $13, now())
         RETURNING {ACTIVITY_COLUMNS}"
    ))
    .bind(&input.title)
    .bind(&slug)
    .bind(input.activity_type)
    .bind(&input.description)
    .bind(&input.content)
    .bind(&input.thumbnail_url)
    .bind(&input.media_urls)
    .bind(&input.location)
    .bind(input.event_date)
    .bind(input.event_end_date)
    .bind(&input.author)
    .bind(&input.tags)
    .bind(input.is_featured)
    .fetch_one(&pool)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db) if db.is_unique_violation() => {
            ServiceError::Conflict(format!("Activity slug \"{}\" already exists", slug))
        }
        other => ServiceError::Database(other),
    })?;

    Ok(activity)
}

pub async fn update_activity(id: Uuid, input: UpdateActivity) -> Result<Activity, ServiceError> {
    let pool = DatabaseManager::pool().await?;

    let activity = sqlx::query_as::<_, Activity>(&format!(
        "UPDATE chiang_rai_activities SET
             title = COALESCE($2, title),
             activity_type = COALESCE($3, activity_type),
             description = COALESCE($4, description),
             content = COALESCE($5, content),
             thumbnail_url = COALESCE($6, thumbnail_url),
             media_urls = COALESCE($7, media_urls),
             location = COALESCE($8, location),
             event_date = COALESCE($9, event_date),
             event_end_date = COALESCE($10, event_end_date),
             author = COALESCE($11, author),
             tags = COALESCE($12, tags),
             is_published = COALESCE($13, is_published),
             is_featured = COALESCE($14, is_featured),
             updated_at = now()
         WHERE id = $1
         RETURNING {ACTIVITY_COLUMNS}"
    ))
    .bind(id)
    .bind(&input.title)
    .bind(input.activity_type)
    .bind(&input.description)
    .bind(&input.content)
    .bind(&input.thumbnail_url)
    .bind(&input.media_urls)
    .bind(&input.location)
    .bind(input.event_date)
    .bind(input.event_end_date)
    .bind(&input.author)
    .bind(&input.tags)
    .bind(input.is_published)
    .bind(input.is_featured)
    .fetch_optional(&pool)
    .await?
    .ok_or_else(|| ServiceError::not_found(format!("Activity with ID {} not found", id)))?;

    Ok(activity)
}

pub async fn remove_activity(id: Uuid) -> Result<(), ServiceError> {
    let pool = DatabaseManager::pool().await?;

    let result = sqlx::query("DELETE FROM chiang_rai_activities WHERE id = $1")
        .bind(id)
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ServiceError::not_found(format!("Activity with ID {} not found", id)));
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Sub-site staff

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSiteStaff {
    pub staff_group: StaffGroup,
    pub title: Option<String>,
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub position: Option<String>,
    pub academic_title: Option<String>,
    pub email: Option<String>,
    pub image_url: Option<String>,
    pub bio: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSiteStaff {
    pub faculty_staff_id: Uuid,
    pub staff_group: StaffGroup,
    pub position: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

pub async fn find_site_staff() -> Result<Vec<SiteStaff>, ServiceError> {
    let pool = DatabaseManager::pool().await?;

    let staff = sqlx::query_as::<_, SiteStaff>(&format!(
        "SELECT {SITE_STAFF_COLUMNS} FROM chiang_rai_staff
         WHERE is_active = true
         ORDER BY sort_order, created_at"
    ))
    .fetch_all(&pool)
    .await?;

    Ok(staff)
}

pub async fn create_site_staff(input: CreateSiteStaff) -> Result<SiteStaff, ServiceError> {
    let pool = DatabaseManager::pool().await?;

    let staff = sqlx::query_as::<_, SiteStaff>(&format!(
        "INSERT INTO chiang_rai_staff
             (staff_group, title, first_name, last_name, position, academic_title, email,
              image_url, bio, sort_order, is_active)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, true)
         RETURNING {SITE_STAFF_COLUMNS}"
    ))
    .bind(input.staff_group)
    .bind(&input.title)
    .bind(&input.first_name)
    .bind(&input.last_name)
    .bind(&input.position)
    .bind(&input.academic_title)
    .bind(&input.email)
    .bind(&input.image_url)
    .bind(&input.bio)
    .bind(input.sort_order)
    .fetch_one(&pool)
    .await?;

    Ok(staff)
}

pub async fn remove_site_staff(id: Uuid) -> Result<(), ServiceError> {
    let pool = DatabaseManager::pool().await?;

    let result = sqlx::query("DELETE FROM chiang_rai_staff WHERE id = $1")
        .bind(id)
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ServiceError::not_found(format!("Staff with ID {} not found", id)));
    }

    Ok(())
}

/// Faculty staff list shown in the admin import picker, joined with the
/// department name.
pub async fn faculty_staff_list() -> Result<Vec<FacultyStaffPick>, ServiceError> {
    let pool = DatabaseManager::pool().await?;

    let staff = sqlx::query_as::<_, FacultyStaffPick>(
        "SELECT sp.id, sp.first_name_th, sp.last_name_th, d.name_th AS department,
                sp.image_url, sp.contact_email AS email
         FROM staff_profiles sp
         LEFT JOIN departments d ON d.id = sp.department_id
         ORDER BY sp.sort_order, sp.first_name_th",
    )
    .fetch_all(&pool)
    .await?;

    Ok(staff)
}

/// Snapshot of the fields copied from a faculty profile into a sub-site
/// record. The copy is one-shot: later edits to the faculty profile do not
/// propagate, and the same profile may be imported more than once.
#[derive(Debug)]
struct ImportedFields {
    title: String,
    first_name: String,
    last_name: String,
    // Empty string, not null, when the profile has no academic position
    academic_title: String,
    email: Option<String>,
    image_url: Option<String>,
    bio: Option<String>,
}

fn imported_fields(profile: &StaffProfile) -> ImportedFields {
    ImportedFields {
        title: profile.prefix_th.clone().unwrap_or_default(),
        first_name: profile.first_name_th.clone(),
        last_name: profile.last_name_th.clone(),
        academic_title: profile
            .academic_position
            .map(|p| p.thai_abbreviation().to_string())
            .unwrap_or_default(),
        email: profile.contact_email.clone(),
        image_url: profile.image_url.clone(),
        bio: profile.bio.clone(),
    }
}

/// Copy a faculty staff profile into the sub-site staff table. Only the
/// EXECUTIVE and COMMITTEE groups can be imported; advisors are entered by
/// hand because they are often offices rather than people.
pub async fn import_site_staff(input: ImportSiteStaff) -> Result<SiteStaff, ServiceError> {
    if !matches!(input.staff_group, StaffGroup::Executive | StaffGroup::Committee) {
        return Err(ServiceError::bad_request(
            "Only EXECUTIVE and COMMITTEE staff can be imported from the faculty directory",
        ));
    }

    let pool = DatabaseManager::pool().await?;

    let profile = sqlx::query_as::<_, StaffProfile>(
        "SELECT id, user_id, department_id, prefix_th, first_name_th, last_name_th, prefix_en,
                first_name_en, last_name_en, staff_type, academic_position, admin_position,
                education, contact_email, expertise, image_url, bio, sort_order, is_executive
         FROM staff_profiles WHERE id = $1",
    )
    .bind(input.faculty_staff_id)
    .fetch_optional(&pool)
    .await?
    .ok_or_else(|| ServiceError::not_found("Faculty Staff not found"))?;

    let fields = imported_fields(&profile);

    let staff = sqlx::query_as::<_, SiteStaff>(&format!(
        "INSERT INTO chiang_rai_staff
             (staff_group, title, first_name, last_name, position, academic_title, email,
              image_url, bio, faculty_staff_id, sort_order, is_active)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, true)
         RETURNING {SITE_STAFF_COLUMNS}"
    ))
    .bind(input.staff_group)
    .bind(&fields.title)
    .bind(&fields.first_name)
    .bind(&fields.last_name)
    .bind(&input.position)
    .bind(&fields.academic_title)
    .bind(&fields.email)
    .bind(&fields.image_url)
    .bind(&fields.bio)
    .bind(profile.id)
    .bind(input.sort_order)
    .fetch_one(&pool)
    .await?;

    info!(
        "Imported faculty staff {} into Chiang Rai site as {:?}",
        profile.id, input.staff_group
    );

    Ok(staff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::staff::{AcademicPosition, StaffType};

    fn profile(prefix: Option<&str>, position: Option<AcademicPosition>) -> StaffProfile {
        StaffProfile {
            id: Uuid::new_v4(),
            user_id: None,
            department_id: 1,
            prefix_th: prefix.map(String::from),
            first_name_th: "สมชาย".to_string(),
            last_name_th: "ใจดี".to_string(),
            prefix_en: None,
            first_name_en: None,
            last_name_en: None,
            staff_type: StaffType::Academic,
            academic_position: position,
            admin_position: None,
            education: None,
            contact_email: Some("somchai@crru.ac.th".to_string()),
            expertise: None,
            image_url: Some("/uploads/staff/somchai.png".to_string()),
            bio: None,
            sort_order: 0,
            is_executive: false,
        }
    }

    #[test]
    fn import_copies_names_and_contact() {
        let p = profile(Some("ดร."), None);
        let fields = imported_fields(&p);

        assert_eq!(fields.title, "ดร.");
        assert_eq!(fields.first_name, "สมชาย");
        assert_eq!(fields.last_name, "ใจดี");
        assert_eq!(fields.email.as_deref(), Some("somchai@crru.ac.th"));
        assert_eq!(fields.image_url.as_deref(), Some("/uploads/staff/somchai.png"));
    }

    #[test]
    fn import_missing_prefix_becomes_empty_title() {
        let fields = imported_fields(&profile(None, None));
        assert_eq!(fields.title, "");
    }

    #[test]
    fn import_translates_academic_position() {
        let cases = [
            (AcademicPosition::Lecturer, "อ."),
            (AcademicPosition::AssistantProf, "ผศ."),
            (AcademicPosition::AssociateProf, "รศ."),
            (AcademicPosition::Professor, "ศ."),
        ];
        for (position, expected) in cases {
            let fields = imported_fields(&profile(None, Some(position)));
            assert_eq!(fields.academic_title, expected);
        }

        let fields = imported_fields(&profile(None, None));
        assert_eq!(fields.academic_title, "");
    }

    #[test]
    fn slugify_keeps_alphanumerics() {
        assert_eq!(slugify("Lanna Music Festival 2025"), "lanna-music-festival-2025");
        assert_eq!(slugify("  a -- b  "), "a-b");
        assert_eq!(slugify("!!!"), "");
    }

    // One INSERT per table: the opening paren count is the column list plus
    // one value group per seed row, and every bind is a placeholder in that
    // single statement.
    #[test]
    fn seed_batches_are_single_statements() {
        let cases: [(QueryBuilder<'static, Postgres>, usize, usize); 4] = [
            (identities_insert(), seed_data::default_identities().len(), 5),
            (artifacts_insert(), seed_data::sample_artifacts().len(), 8),
            (articles_insert(), seed_data::sample_articles().len(), 8),
            (activities_insert(), seed_data::sample_activities().len(), 8),
        ];

        for (builder, rows, binds_per_row) in cases {
            let sql = builder.sql().to_string();
            assert_eq!(sql.matches("INSERT INTO").count(), 1, "{sql}");
            assert_eq!(sql.matches('(').count(), 1 + rows, "{sql}");
            assert!(sql.contains(&format!("${}", rows * binds_per_row)), "{sql}");
        }
    }

    #[test]
    fn page_meta_rounds_up() {
        let meta = PageMeta::new(1, 10, 15);
        assert_eq!(meta.total_pages, 2);

        let meta = PageMeta::new(1, 10, 0);
        assert_eq!(meta.total_pages, 0);

        let meta = PageMeta::new(2, 5, 10);
        assert_eq!(meta.total_pages, 2);
    }
}
