use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::database::models::news::{News, NewsCategory};
use crate::services::ServiceError;

const NEWS_COLUMNS: &str = "id, title, slug, content, category, thumbnail_url, is_published, \
     published_at, author_id, created_at, updated_at";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNews {
    pub title: String,
    pub content: String,
    pub category: NewsCategory,
    pub thumbnail_url: Option<String>,
    pub author_id: Option<Uuid>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNews {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<NewsCategory>,
    pub thumbnail_url: Option<String>,
    pub is_published: Option<bool>,
}

/// URL slug from the Thai/English title plus a short timestamp suffix so
/// repeated titles stay unique.
fn generate_slug(title: &str) -> String {
    let base: String = title
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect();

    let trimmed = base
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    let suffix = Utc::now().timestamp_millis().to_string();
    let suffix = &suffix[suffix.len().saturating_sub(4)..];

    if trimmed.is_empty() {
        format!("news-{}", suffix)
    } else {
        format!("{}-{}", trimmed, suffix)
    }
}

pub async fn create(input: CreateNews) -> Result<News, ServiceError> {
    let slug = generate_slug(&input.title);

    let pool = DatabaseManager::pool().await?;

    let news = sqlx::query_as::<_, News>(&format!(
        "INSERT INTO news (title, slug, content, category, thumbnail_url, is_published, published_at, author_id)
         VALUES ($1, $2, $3, $4, $5, true, now(), $6)
         RETURNING {NEWS_COLUMNS}"
    ))
    .bind(&input.title)
    .bind(&slug)
    .bind(&input.content)
    .bind(input.category)
    .bind(&input.thumbnail_url)
    .bind(input.author_id)
    .fetch_one(&pool)
    .await?;

    Ok(news)
}

pub async fn find_all() -> Result<Vec<News>, ServiceError> {
    let pool = DatabaseManager::pool().await?;

    let news = sqlx::query_as::<_, News>(&format!(
        "SELECT {NEWS_COLUMNS} FROM news ORDER BY published_at DESC"
    ))
    .fetch_all(&pool)
    .await?;

    Ok(news)
}

pub async fn find_one(id: Uuid) -> Result<News, ServiceError> {
    let pool = DatabaseManager::pool().await?;

    let news = sqlx::query_as::<_, News>(&format!("SELECT {NEWS_COLUMNS} FROM news WHERE id = $1"))
        .bind(id)
        .fetch_optional(&pool)
        .await?
        .ok_or_else(|| ServiceError::not_found(format!("News with ID {} not found", id)))?;

    Ok(news)
}

pub async fn find_by_slug(slug: &str) -> Result<News, ServiceError> {
    let pool = DatabaseManager::pool().await?;

    let news =
        sqlx::query_as::<_, News>(&format!("SELECT {NEWS_COLUMNS} FROM news WHERE slug = $1"))
            .bind(slug)
            .fetch_optional(&pool)
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("News with slug {} not found", slug)))?;

    Ok(news)
}

pub async fn update(id: Uuid, input: UpdateNews) -> Result<News, ServiceError> {
    let pool = DatabaseManager::pool().await?;

    let news = sqlx::query_as::<_, News>(&format!(
        "UPDATE news SET
             title = COALESCE($2, title),
             content = COALESCE($3, content),
             category = COALESCE($4, category),
             thumbnail_url = COALESCE($5, thumbnail_url),
             is_published = COALESCE($6, is_published),
             updated_at = now()
         WHERE id = $1
         RETURNING {NEWS_COLUMNS}"
    ))
    .bind(id)
    .bind(&input.title)
    .bind(&input.content)
    .bind(input.category)
    .bind(&input.thumbnail_url)
    .bind(input.is_published)
    .fetch_optional(&pool)
    .await?
    .ok_or_else(|| ServiceError::not_found(format!("News with ID {} not found", id)))?;

    Ok(news)
}

pub async fn remove(id: Uuid) -> Result<(), ServiceError> {
    let pool = DatabaseManager::pool().await?;

    let result = sqlx::query("DELETE FROM news WHERE id = $1")
        .bind(id)
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ServiceError::not_found(format!("News with ID {} not found", id)));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_is_lowercase_hyphenated_with_suffix() {
        let slug = generate_slug("Open House 2026: Social Sciences");
        let (base, suffix) = slug.rsplit_once('-').unwrap();
        assert_eq!(base, "open-house-2026-social-sciences");
        assert_eq!(suffix.len(), 4);
        assert!(suffix.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn slug_collapses_repeated_separators() {
        let slug = generate_slug("a  --  b");
        assert!(slug.starts_with("a-b-"));
    }

    #[test]
    fn slug_survives_symbol_only_titles() {
        let slug = generate_slug("!!!");
        assert!(slug.starts_with("news-"));
    }

    #[test]
    fn slug_keeps_thai_characters() {
        let slug = generate_slug("ข่าวคณะ");
        assert!(slug.starts_with("ข่าวคณะ-") || slug.contains("ข-าวคณะ"));
    }
}
