use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::database::models::program::{DegreeLevel, Program};
use crate::services::ServiceError;

const PROGRAM_COLUMNS: &str = "id, code, name_th, degree_title_th, degree_title_en, degree_level, \
     banner_url, curriculum_url, description, structure, careers, highlights, concentrations";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProgram {
    pub code: String,
    pub name_th: String,
    pub degree_title_th: Option<String>,
    pub degree_title_en: Option<String>,
    pub degree_level: DegreeLevel,
    pub banner_url: Option<String>,
    pub curriculum_url: Option<String>,
    pub description: Option<String>,
    pub structure: Option<Value>,
    pub careers: Option<Vec<String>>,
    pub highlights: Option<Value>,
    pub concentrations: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProgram {
    pub code: Option<String>,
    pub name_th: Option<String>,
    pub degree_title_th: Option<String>,
    pub degree_title_en: Option<String>,
    pub degree_level: Option<DegreeLevel>,
    pub banner_url: Option<String>,
    pub curriculum_url: Option<String>,
    pub description: Option<String>,
    pub structure: Option<Value>,
    pub careers: Option<Vec<String>>,
    pub highlights: Option<Value>,
    pub concentrations: Option<Value>,
}

pub async fn create(input: CreateProgram) -> Result<Program, ServiceError> {
    let pool = DatabaseManager::pool().await?;

    let program = sqlx::query_as::<_, Program>(&format!(
        "INSERT INTO programs (code, name_th, degree_title_th, degree_title_en, degree_level, \
         banner_url, curriculum_url, description, structure, careers, highlights, concentrations)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
         RETURNING {PROGRAM_COLUMNS}"
    ))
    .bind(&input.code)
    .bind(&input.name_th)
    .bind(&input.degree_title_th)
    .bind(&input.degree_title_en)
    .bind(input.degree_level)
    .bind(&input.banner_url)
    .bind(&input.curriculum_url)
    .bind(&input.description)
    .bind(&input.structure)
    .bind(&input.careers)
    .bind(&input.highlights)
    .bind(&input.concentrations)
    .fetch_one(&pool)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db) if db.is_unique_violation() => {
            ServiceError::Conflict(format!("Program code \"{}\" already exists", input.code))
        }
        other => ServiceError::Database(other),
    })?;

    Ok(program)
}

pub async fn find_all() -> Result<Vec<Program>, ServiceError> {
    let pool = DatabaseManager::pool().await?;

    let programs =
        sqlx::query_as::<_, Program>(&format!("SELECT {PROGRAM_COLUMNS} FROM programs ORDER BY code"))
            .fetch_all(&pool)
            .await?;

    Ok(programs)
}

pub async fn find_one(id: Uuid) -> Result<Program, ServiceError> {
    let pool = DatabaseManager::pool().await?;

    let program = sqlx::query_as::<_, Program>(&format!(
        "SELECT {PROGRAM_COLUMNS} FROM programs WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(&pool)
    .await?
    .ok_or_else(|| ServiceError::not_found(format!("Program with ID \"{}\" not found", id)))?;

    Ok(program)
}

pub async fn find_by_code(code: &str) -> Result<Program, ServiceError> {
    let pool = DatabaseManager::pool().await?;

    let program = sqlx::query_as::<_, Program>(&format!(
        "SELECT {PROGRAM_COLUMNS} FROM programs WHERE code = $1"
    ))
    .bind(code)
    .fetch_optional(&pool)
    .await?
    .ok_or_else(|| ServiceError::not_found(format!("Program with code \"{}\" not found", code)))?;

    Ok(program)
}

pub async fn update(id: Uuid, input: UpdateProgram) -> Result<Program, ServiceError> {
    let pool = DatabaseManager::pool().await?;

    let program = sqlx::query_as::<_, Program>(&format!(
        "UPDATE programs SET
             code = COALESCE($2, code),
             name_th = COALESCE($3, name_th),
             degree_title_th = COALESCE($4, degree_title_th),
             degree_title_en = COALESCE($5, degree_title_en),
             degree_level = COALESCE($6, degree_level),
             banner_url = COALESCE($7, banner_url),
             curriculum_url = COALESCE($8, curriculum_url),
             description = COALESCE($9, description),
             structure = COALESCE($10, structure),
             careers = COALESCE($11, careers),
             highlights = COALESCE($12, highlights),
             concentrations = COALESCE($13, concentrations)
         WHERE id = $1
         RETURNING {PROGRAM_COLUMNS}"
    ))
    .bind(id)
    .bind(&input.code)
    .bind(&input.name_th)
    .bind(&input.degree_title_th)
    .bind(&input.degree_title_en)
    .bind(input.degree_level)
    .bind(&input.banner_url)
    .bind(&input.curriculum_url)
    .bind(&input.description)
    .bind(&input.structure)
    .bind(&input.careers)
    .bind(&input.highlights)
    .bind(&input.concentrations)
    .fetch_optional(&pool)
    .await?
    .ok_or_else(|| ServiceError::not_found(format!("Program with ID \"{}\" not found", id)))?;

    Ok(program)
}

pub async fn remove(id: Uuid) -> Result<Program, ServiceError> {
    let pool = DatabaseManager::pool().await?;

    let program = sqlx::query_as::<_, Program>(&format!(
        "DELETE FROM programs WHERE id = $1 RETURNING {PROGRAM_COLUMNS}"
    ))
    .bind(id)
    .fetch_optional(&pool)
    .await?
    .ok_or_else(|| ServiceError::not_found(format!("Program with ID \"{}\" not found", id)))?;

    Ok(program)
}
