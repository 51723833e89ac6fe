use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: i32,
    pub name_th: String,
    pub name_en: Option<String>,
    /// Academic unit (สาขาวิชา) vs support unit (หน่วยงานสนับสนุน)
    pub is_academic_unit: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AdminPosition {
    pub id: i32,
    pub name_th: String,
    pub name_en: Option<String>,
    pub level: i32,
}
