use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::database::models::staff::{AcademicPosition, StaffListItem, StaffProfile, StaffType};
use crate::services::{upload_service, ServiceError};

const PROFILE_COLUMNS: &str = "id, user_id, department_id, prefix_th, first_name_th, last_name_th, \
     prefix_en, first_name_en, last_name_en, staff_type, academic_position, admin_position, \
     education, contact_email, expertise, image_url, bio, sort_order, is_executive";

const LIST_SELECT: &str = "SELECT sp.id, sp.user_id, sp.department_id, sp.prefix_th, sp.first_name_th, \
     sp.last_name_th, sp.prefix_en, sp.first_name_en, sp.last_name_en, sp.staff_type, \
     sp.academic_position, sp.admin_position, sp.education, sp.contact_email, sp.expertise, \
     sp.image_url, sp.bio, sp.sort_order, sp.is_executive, \
     d.name_th AS department, d.name_en AS department_en \
     FROM staff_profiles sp LEFT JOIN departments d ON sp.department_id = d.id";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStaff {
    pub user_id: Option<Uuid>,
    pub department_id: i32,
    pub prefix_th: Option<String>,
    pub first_name_th: String,
    pub last_name_th: String,
    pub prefix_en: Option<String>,
    pub first_name_en: Option<String>,
    pub last_name_en: Option<String>,
    #[serde(default = "default_staff_type")]
    pub staff_type: StaffType,
    pub academic_position: Option<AcademicPosition>,
    pub admin_position: Option<String>,
    pub education: Option<Value>,
    pub contact_email: Option<String>,
    pub expertise: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub bio: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub is_executive: bool,
}

fn default_staff_type() -> StaffType {
    StaffType::Academic
}

/// Partial update; absent fields keep their stored values
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStaff {
    pub department_id: Option<i32>,
    pub prefix_th: Option<String>,
    pub first_name_th: Option<String>,
    pub last_name_th: Option<String>,
    pub prefix_en: Option<String>,
    pub first_name_en: Option<String>,
    pub last_name_en: Option<String>,
    pub staff_type: Option<StaffType>,
    pub academic_position: Option<AcademicPosition>,
    pub admin_position: Option<String>,
    pub education: Option<Value>,
    pub contact_email: Option<String>,
    pub expertise: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub bio: Option<String>,
    pub sort_order: Option<i32>,
    pub is_executive: Option<bool>,
}

pub async fn create(input: CreateStaff) -> Result<StaffProfile, ServiceError> {
    let pool = DatabaseManager::pool().await?;

    // One profile per linked user account
    if let Some(user_id) = input.user_id {
        let existing: Option<(Uuid,)> =
            sqlx::query_as("SELECT id FROM staff_profiles WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&pool)
                .await?;

        if existing.is_some() {
            return Err(ServiceError::bad_request(
                "Staff profile already exists for this user",
            ));
        }
    }

    let department: Option<(i32,)> = sqlx::query_as("SELECT id FROM departments WHERE id = $1")
        .bind(input.department_id)
        .fetch_optional(&pool)
        .await?;

    if department.is_none() {
        return Err(ServiceError::bad_request("Department not found"));
    }

    let profile = sqlx::query_as::<_, StaffProfile>(&format!(
        "INSERT INTO staff_profiles (user_id, department_id, prefix_th, first_name_th, last_name_th, \
         prefix_en, first_name_en, last_name_en, staff_type, academic_position, admin_position, \
         education, contact_email, expertise, image_url, bio, sort_order, is_executive)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
         RETURNING {PROFILE_COLUMNS}"
    ))
    .bind(input.user_id)
    .bind(input.department_id)
    .bind(&input.prefix_th)
    .bind(&input.first_name_th)
    .bind(&input.last_name_th)
    .bind(&input.prefix_en)
    .bind(&input.first_name_en)
    .bind(&input.last_name_en)
    .bind(input.staff_type)
    .bind(input.academic_position)
    .bind(&input.admin_position)
    .bind(&input.education)
    .bind(&input.contact_email)
    .bind(&input.expertise)
    .bind(&input.image_url)
    .bind(&input.bio)
    .bind(input.sort_order)
    .bind(input.is_executive)
    .fetch_one(&pool)
    .await?;

    Ok(profile)
}

pub async fn find_all() -> Result<Vec<StaffListItem>, ServiceError> {
    let pool = DatabaseManager::pool().await?;

    let staff = sqlx::query_as::<_, StaffListItem>(&format!("{LIST_SELECT} ORDER BY sp.sort_order"))
        .fetch_all(&pool)
        .await?;

    Ok(staff)
}

pub async fn find_one(id: Uuid) -> Result<StaffListItem, ServiceError> {
    let pool = DatabaseManager::pool().await?;

    let staff = sqlx::query_as::<_, StaffListItem>(&format!("{LIST_SELECT} WHERE sp.id = $1"))
        .bind(id)
        .fetch_optional(&pool)
        .await?
        .ok_or_else(|| {
            ServiceError::not_found(format!("Staff profile with ID {} not found", id))
        })?;

    Ok(staff)
}

pub async fn update(id: Uuid, input: UpdateStaff) -> Result<StaffProfile, ServiceError> {
    let old = find_one(id).await?;

    let pool = DatabaseManager::pool().await?;

    let profile = sqlx::query_as::<_, StaffProfile>(&format!(
        "UPDATE staff_profiles SET
             department_id = COALESCE($2, department_id),
             prefix_th = COALESCE($3, prefix_th),
             first_name_th = COALESCE($4, first_name_th),
             last_name_th = COALESCE($5, last_name_th),
             prefix_en = COALESCE($6, prefix_en),
             first_name_en = COALESCE($7, first_name_en),
             last_name_en = COALESCE($8, last_name_en),
             staff_type = COALESCE($9, staff_type),
             academic_position = COALESCE($10, academic_position),
             admin_position = COALESCE($11, admin_position),
             education = COALESCE($12, education),
             contact_email = COALESCE($13, contact_email),
             expertise = COALESCE($14, expertise),
             image_url = COALESCE($15, image_url),
             bio = COALESCE($16, bio),
             sort_order = COALESCE($17, sort_order),
             is_executive = COALESCE($18, is_executive)
         WHERE id = $1
         RETURNING {PROFILE_COLUMNS}"
    ))
    .bind(id)
    .bind(input.department_id)
    .bind(&input.prefix_th)
    .bind(&input.first_name_th)
    .bind(&input.last_name_th)
    .bind(&input.prefix_en)
    .bind(&input.first_name_en)
    .bind(&input.last_name_en)
    .bind(input.staff_type)
    .bind(input.academic_position)
    .bind(&input.admin_position)
    .bind(&input.education)
    .bind(&input.contact_email)
    .bind(&input.expertise)
    .bind(&input.image_url)
    .bind(&input.bio)
    .bind(input.sort_order)
    .bind(input.is_executive)
    .fetch_optional(&pool)
    .await?
    .ok_or_else(|| ServiceError::not_found(format!("Staff profile with ID {} not found", id)))?;

    // Drop the replaced image file once the row points elsewhere
    if let (Some(new_url), Some(old_url)) = (&input.image_url, &old.image_url) {
        if new_url != old_url {
            upload_service::delete_staff_image(old_url).await;
        }
    }

    Ok(profile)
}

pub async fn remove(id: Uuid) -> Result<StaffProfile, ServiceError> {
    let pool = DatabaseManager::pool().await?;

    let profile = sqlx::query_as::<_, StaffProfile>(&format!(
        "DELETE FROM staff_profiles WHERE id = $1 RETURNING {PROFILE_COLUMNS}"
    ))
    .bind(id)
    .fetch_optional(&pool)
    .await?
    .ok_or_else(|| ServiceError::not_found(format!("Staff profile with ID {} not found", id)))?;

    if let Some(image_url) = &profile.image_url {
        upload_service::delete_staff_image(image_url).await;
    }

    Ok(profile)
}
