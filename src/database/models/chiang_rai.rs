use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "cr_identity_category", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IdentityCategory {
    History,
    Archaeology,
    Culture,
    Arts,
    Wisdom,
}

impl IdentityCategory {
    /// Parse a query-string value; "ALL" and unknown values mean "no filter"
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "HISTORY" => Some(Self::History),
            "ARCHAEOLOGY" => Some(Self::Archaeology),
            "CULTURE" => Some(Self::Culture),
            "ARTS" => Some(Self::Arts),
            "WISDOM" => Some(Self::Wisdom),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: i32,
    pub code: IdentityCategory,
    pub name_th: String,
    pub name_en: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub content: Option<String>,
    pub identity_id: Option<i32>,
    /// Denormalized copy of the identity code for cheap filtering
    pub category: Option<IdentityCategory>,
    pub media_type: Option<String>,
    pub media_urls: Option<Vec<String>>,
    pub thumbnail_url: Option<String>,
    pub author: Option<String>,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    /// Column is named "abstract"; selected as abstract_text since the word
    /// is reserved in Rust
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub content: String,
    pub thumbnail_url: Option<String>,
    pub tags: Option<Vec<String>>,
    pub author: Option<String>,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "cr_activity_type", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    News,
    Event,
    Announcement,
}

impl ActivityType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "NEWS" => Some(Self::News),
            "EVENT" => Some(Self::Event),
            "ANNOUNCEMENT" => Some(Self::Announcement),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
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
    pub is_published: bool,
    pub is_featured: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Display grouping for sub-site staff. Exactly one per record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "cr_staff_group", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StaffGroup {
    Advisor,
    Executive,
    Committee,
}

/// Sub-site staff record displayed on the Chiang Rai Studies site.
///
/// `faculty_staff_id` back-references the faculty profile a record was
/// imported from. The two tables are intentionally decoupled after import:
/// deleting the faculty profile leaves the site record in place.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SiteStaff {
    pub id: Uuid,
    pub staff_group: StaffGroup,
    pub title: Option<String>,
    pub first_name: String,
    /// May be empty for ADVISOR entries that represent an office, not a person
    pub last_name: String,
    pub position: Option<String>,
    /// Already-translated display string such as "รศ.", not an enum
    pub academic_title: Option<String>,
    pub email: Option<String>,
    pub image_url: Option<String>,
    pub bio: Option<String>,
    pub faculty_staff_id: Option<Uuid>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Faculty staff projection for the admin import picker
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct FacultyStaffPick {
    pub id: Uuid,
    pub first_name_th: String,
    pub last_name_th: String,
    pub department: Option<String>,
    pub image_url: Option<String>,
    pub email: Option<String>,
}
