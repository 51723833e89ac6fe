use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "degree_level", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DegreeLevel {
    Bachelor,
    Master,
    Phd,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub id: Uuid,
    pub code: String,
    pub name_th: String,
    pub degree_title_th: Option<String>,
    pub degree_title_en: Option<String>,
    pub degree_level: DegreeLevel,
    pub banner_url: Option<String>,
    pub curriculum_url: Option<String>,
    pub description: Option<String>,
    /// Credit structure: { "totalCredits": n, "general": n, "major": n, "freeElective": n }
    pub structure: Option<Value>,
    pub careers: Option<Vec<String>>,
    pub highlights: Option<Value>,
    pub concentrations: Option<Value>,
}
