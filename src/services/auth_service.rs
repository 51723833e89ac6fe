use serde::Serialize;
use uuid::Uuid;

use crate::auth::google::GoogleUser;
use crate::auth::roles::{self, RoleLevel};
use crate::auth::{generate_jwt, Claims};
use crate::config;
use crate::database::manager::DatabaseManager;
use crate::database::models::user::{User, UserSummary};
use crate::services::ServiceError;

const USER_COLUMNS: &str =
    "id, email, google_id, name, avatar, roles, is_active, last_login_at, created_at, updated_at";

const SUMMARY_COLUMNS: &str =
    "id, email, name, avatar, roles, is_active, last_login_at, created_at";

/// Token bundle handed to the frontend after a successful sign-in
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBundle {
    pub access_token: String,
    pub user: SignedInUser,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedInUser {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub roles: Vec<String>,
}

/// Find or create the account behind a Google profile.
///
/// Only institutional addresses are accepted. Existing accounts get their
/// Google fields and last_login_at refreshed; new accounts start with the
/// STAFF role set.
pub async fn validate_or_create_user(google_user: &GoogleUser) -> Result<User, ServiceError> {
    let domain = &config::config().security.allowed_email_domain;
    if !google_user.email.ends_with(domain.as_str()) {
        return Err(ServiceError::Unauthorized(format!(
            "กรุณาใช้อีเมล {} เท่านั้น",
            domain
        )));
    }

    let pool = DatabaseManager::pool().await?;

    let existing = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
    ))
    .bind(&google_user.email)
    .fetch_optional(&pool)
    .await?;

    let user = match existing {
        Some(_) => {
            sqlx::query_as::<_, User>(&format!(
                "UPDATE users
                 SET google_id = $2, name = $3, avatar = $4, last_login_at = now(), updated_at = now()
                 WHERE email = $1
                 RETURNING {USER_COLUMNS}"
            ))
            .bind(&google_user.email)
            .bind(&google_user.id)
            .bind(&google_user.name)
            .bind(&google_user.picture)
            .fetch_one(&pool)
            .await?
        }
        None => {
            let default_roles: Vec<String> =
                roles::resolve_roles(roles::STAFF).into_iter().collect();

            sqlx::query_as::<_, User>(&format!(
                "INSERT INTO users (email, google_id, name, avatar, roles, is_active, last_login_at)
                 VALUES ($1, $2, $3, $4, $5, true, now())
                 RETURNING {USER_COLUMNS}"
            ))
            .bind(&google_user.email)
            .bind(&google_user.id)
            .bind(&google_user.name)
            .bind(&google_user.picture)
            .bind(&default_roles)
            .fetch_one(&pool)
            .await?
        }
    };

    Ok(user)
}

pub fn generate_token(user: &User) -> Result<TokenBundle, ServiceError> {
    let claims = Claims::new(
        user.id,
        user.email.clone(),
        user.roles.clone(),
        user.name.clone(),
    );

    let access_token =
        generate_jwt(&claims).map_err(|e| ServiceError::Unauthorized(e.to_string()))?;

    Ok(TokenBundle {
        access_token,
        user: SignedInUser {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            avatar: user.avatar.clone(),
            roles: user.roles.clone(),
        },
    })
}

pub async fn get_profile(user_id: Uuid) -> Result<UserSummary, ServiceError> {
    let pool = DatabaseManager::pool().await?;

    let user = sqlx::query_as::<_, UserSummary>(&format!(
        "SELECT {SUMMARY_COLUMNS} FROM users WHERE id = $1"
    ))
    .bind(user_id)
    .fetch_optional(&pool)
    .await?
    .ok_or_else(|| ServiceError::not_found(format!("User {} not found", user_id)))?;

    Ok(user)
}

pub async fn get_all_users() -> Result<Vec<UserSummary>, ServiceError> {
    let pool = DatabaseManager::pool().await?;

    let users = sqlx::query_as::<_, UserSummary>(&format!(
        "SELECT {SUMMARY_COLUMNS} FROM users ORDER BY created_at"
    ))
    .fetch_all(&pool)
    .await?;

    Ok(users)
}

/// Replace an account's whole role set with the set implied by the selected
/// level. Resolution happens here; storage never sees a bare level.
pub async fn update_user_level(user_id: Uuid, level: RoleLevel) -> Result<User, ServiceError> {
    let new_roles: Vec<String> = roles::resolve_roles(level.as_str()).into_iter().collect();

    let pool = DatabaseManager::pool().await?;

    let user = sqlx::query_as::<_, User>(&format!(
        "UPDATE users SET roles = $2, updated_at = now() WHERE id = $1 RETURNING {USER_COLUMNS}"
    ))
    .bind(user_id)
    .bind(&new_roles)
    .fetch_optional(&pool)
    .await?
    .ok_or_else(|| ServiceError::not_found(format!("User {} not found", user_id)))?;

    Ok(user)
}

pub async fn toggle_user_active(user_id: Uuid, is_active: bool) -> Result<User, ServiceError> {
    let pool = DatabaseManager::pool().await?;

    let user = sqlx::query_as::<_, User>(&format!(
        "UPDATE users SET is_active = $2, updated_at = now() WHERE id = $1 RETURNING {USER_COLUMNS}"
    ))
    .bind(user_id)
    .bind(is_active)
    .fetch_optional(&pool)
    .await?
    .ok_or_else(|| ServiceError::not_found(format!("User {} not found", user_id)))?;

    Ok(user)
}

pub async fn delete_user(user_id: Uuid) -> Result<(), ServiceError> {
    let pool = DatabaseManager::pool().await?;

    let result = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user_id)
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ServiceError::not_found(format!("User {} not found", user_id)));
    }

    Ok(())
}

/// Development-only bypass of the Google flow. Creates (or promotes) a
/// well-known admin account and issues a token for it.
pub async fn login_as_dev_admin() -> Result<TokenBundle, ServiceError> {
    let dev_email = "admin@soc.crru.ac.th";
    let admin_roles: Vec<String> = roles::resolve_roles(roles::ADMIN).into_iter().collect();

    let pool = DatabaseManager::pool().await?;

    let existing = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
    ))
    .bind(dev_email)
    .fetch_optional(&pool)
    .await?;

    let user = match existing {
        Some(user) if user.roles.iter().any(|r| r == roles::ADMIN) => user,
        Some(user) => {
            // Promote the existing dev account to the full admin set
            sqlx::query_as::<_, User>(&format!(
                "UPDATE users SET roles = $2, updated_at = now() WHERE id = $1 RETURNING {USER_COLUMNS}"
            ))
            .bind(user.id)
            .bind(&admin_roles)
            .fetch_one(&pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, User>(&format!(
                "INSERT INTO users (email, google_id, name, avatar, roles, is_active)
                 VALUES ($1, 'dev-admin-id', 'Dev Admin', $2, $3, true)
                 RETURNING {USER_COLUMNS}"
            ))
            .bind(dev_email)
            .bind("https://ui-avatars.com/api/?name=Admin&background=random")
            .bind(&admin_roles)
            .fetch_one(&pool)
            .await?
        }
    };

    generate_token(&user)
}
