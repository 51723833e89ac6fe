use serde::Deserialize;

use crate::database::manager::DatabaseManager;
use crate::database::models::department::{AdminPosition, Department};
use crate::services::ServiceError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDepartment {
    pub name_th: String,
    pub name_en: Option<String>,
    #[serde(default = "default_true")]
    pub is_academic_unit: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDepartment {
    pub name_th: Option<String>,
    pub name_en: Option<String>,
    pub is_academic_unit: Option<bool>,
}

fn default_true() -> bool {
    true
}

pub async fn create(input: CreateDepartment) -> Result<Department, ServiceError> {
    let pool = DatabaseManager::pool().await?;

    let department = sqlx::query_as::<_, Department>(
        "INSERT INTO departments (name_th, name_en, is_academic_unit)
         VALUES ($1, $2, $3)
         RETURNING id, name_th, name_en, is_academic_unit",
    )
    .bind(&input.name_th)
    .bind(&input.name_en)
    .bind(input.is_academic_unit)
    .fetch_one(&pool)
    .await?;

    Ok(department)
}

pub async fn find_all() -> Result<Vec<Department>, ServiceError> {
    let pool = DatabaseManager::pool().await?;

    let departments = sqlx::query_as::<_, Department>(
        "SELECT id, name_th, name_en, is_academic_unit FROM departments ORDER BY id",
    )
    .fetch_all(&pool)
    .await?;

    Ok(departments)
}

pub async fn find_one(id: i32) -> Result<Department, ServiceError> {
    let pool = DatabaseManager::pool().await?;

    let department = sqlx::query_as::<_, Department>(
        "SELECT id, name_th, name_en, is_academic_unit FROM departments WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(&pool)
    .await?
    .ok_or_else(|| ServiceError::not_found(format!("Department with ID {} not found", id)))?;

    Ok(department)
}

pub async fn update(id: i32, input: UpdateDepartment) -> Result<Department, ServiceError> {
    let pool = DatabaseManager::pool().await?;

    let department = sqlx::query_as::<_, Department>(
        "UPDATE departments SET
             name_th = COALESCE($2, name_th),
             name_en = COALESCE($3, name_en),
             is_academic_unit = COALESCE($4, is_academic_unit)
         WHERE id = $1
         RETURNING id, name_th, name_en, is_academic_unit",
    )
    .bind(id)
    .bind(&input.name_th)
    .bind(&input.name_en)
    .bind(input.is_academic_unit)
    .fetch_optional(&pool)
    .await?
    .ok_or_else(|| ServiceError::not_found(format!("Department with ID {} not found", id)))?;

    Ok(department)
}

pub async fn remove(id: i32) -> Result<Department, ServiceError> {
    let pool = DatabaseManager::pool().await?;

    let department = sqlx::query_as::<_, Department>(
        "DELETE FROM departments WHERE id = $1 RETURNING id, name_th, name_en, is_academic_unit",
    )
    .bind(id)
    .fetch_optional(&pool)
    .await?
    .ok_or_else(|| ServiceError::not_found(format!("Department with ID {} not found", id)))?;

    Ok(department)
}

// --- Administrative positions (คณบดี, หัวหน้าสาขา, ...) ---

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdminPosition {
    pub name_th: String,
    pub name_en: Option<String>,
    #[serde(default)]
    pub level: i32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAdminPosition {
    pub name_th: Option<String>,
    pub name_en: Option<String>,
    pub level: Option<i32>,
}

pub async fn find_all_admin_positions() -> Result<Vec<AdminPosition>, ServiceError> {
    let pool = DatabaseManager::pool().await?;

    let positions = sqlx::query_as::<_, AdminPosition>(
        "SELECT id, name_th, name_en, level FROM admin_positions ORDER BY level, name_th",
    )
    .fetch_all(&pool)
    .await?;

    Ok(positions)
}

pub async fn create_admin_position(
    input: CreateAdminPosition,
) -> Result<AdminPosition, ServiceError> {
    let pool = DatabaseManager::pool().await?;

    let position = sqlx::query_as::<_, AdminPosition>(
        "INSERT INTO admin_positions (name_th, name_en, level)
         VALUES ($1, $2, $3)
         RETURNING id, name_th, name_en, level",
    )
    .bind(&input.name_th)
    .bind(&input.name_en)
    .bind(input.level)
    .fetch_one(&pool)
    .await?;

    Ok(position)
}

pub async fn update_admin_position(
    id: i32,
    input: UpdateAdminPosition,
) -> Result<AdminPosition, ServiceError> {
    let pool = DatabaseManager::pool().await?;

    let position = sqlx::query_as::<_, AdminPosition>(
        "UPDATE admin_positions SET
             name_th = COALESCE($2, name_th),
             name_en = COALESCE($3, name_en),
             level = COALESCE($4, level)
         WHERE id = $1
         RETURNING id, name_th, name_en, level",
    )
    .bind(id)
    .bind(&input.name_th)
    .bind(&input.name_en)
    .bind(input.level)
    .fetch_optional(&pool)
    .await?
    .ok_or_else(|| ServiceError::not_found(format!("Admin position with ID {} not found", id)))?;

    Ok(position)
}

pub async fn remove_admin_position(id: i32) -> Result<AdminPosition, ServiceError> {
    let pool = DatabaseManager::pool().await?;

    let position = sqlx::query_as::<_, AdminPosition>(
        "DELETE FROM admin_positions WHERE id = $1 RETURNING id, name_th, name_en, level",
    )
    .bind(id)
    .fetch_optional(&pool)
    .await?
    .ok_or_else(|| ServiceError::not_found(format!("Admin position with ID {} not found", id)))?;

    Ok(position)
}
