use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "staff_type", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StaffType {
    Academic,
    Support,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "academic_position", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AcademicPosition {
    Lecturer,
    AssistantProf,
    AssociateProf,
    Professor,
}

impl AcademicPosition {
    /// Thai display abbreviation used wherever the enum is rendered as text
    pub fn thai_abbreviation(self) -> &'static str {
        match self {
            AcademicPosition::Lecturer => "อ.",
            AcademicPosition::AssistantProf => "ผศ.",
            AcademicPosition::AssociateProf => "รศ.",
            AcademicPosition::Professor => "ศ.",
        }
    }
}

/// Faculty staff profile, owned by the faculty-management subsystem
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct StaffProfile {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub department_id: i32,
    pub prefix_th: Option<String>,
    pub first_name_th: String,
    pub last_name_th: String,
    pub prefix_en: Option<String>,
    pub first_name_en: Option<String>,
    pub last_name_en: Option<String>,
    pub staff_type: StaffType,
    pub academic_position: Option<AcademicPosition>,
    pub admin_position: Option<String>,
    /// List of degrees: [{ "level": "...", "detail": "..." }]
    pub education: Option<Value>,
    pub contact_email: Option<String>,
    pub expertise: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub bio: Option<String>,
    pub sort_order: i32,
    pub is_executive: bool,
}

/// Listing projection joined with the department names
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct StaffListItem {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub department_id: i32,
    pub prefix_th: Option<String>,
    pub first_name_th: String,
    pub last_name_th: String,
    pub prefix_en: Option<String>,
    pub first_name_en: Option<String>,
    pub last_name_en: Option<String>,
    pub staff_type: StaffType,
    pub academic_position: Option<AcademicPosition>,
    pub admin_position: Option<String>,
    pub education: Option<Value>,
    pub contact_email: Option<String>,
    pub expertise: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub bio: Option<String>,
    pub sort_order: i32,
    pub is_executive: bool,
    pub department: Option<String>,
    pub department_en: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thai_abbreviations() {
        assert_eq!(AcademicPosition::Lecturer.thai_abbreviation(), "อ.");
        assert_eq!(AcademicPosition::AssistantProf.thai_abbreviation(), "ผศ.");
        assert_eq!(AcademicPosition::AssociateProf.thai_abbreviation(), "รศ.");
        assert_eq!(AcademicPosition::Professor.thai_abbreviation(), "ศ.");
    }

    #[test]
    fn academic_position_json_uses_wire_names() {
        let json = serde_json::to_string(&AcademicPosition::AssociateProf).unwrap();
        assert_eq!(json, "\"ASSOCIATE_PROF\"");
    }
}
