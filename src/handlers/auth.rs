//! Sign-in flow and account administration.
//!
//! The browser flow: GET /auth/google redirects to the Google consent
//! screen, Google calls back with a code, and the callback redirects to the
//! admin frontend carrying either a token or an error marker. API errors in
//! the callback never surface as JSON; the frontend only understands the
//! redirect shape.

use axum::extract::{Extension, Path, Query};
use axum::response::Redirect;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::warn;
use uuid::Uuid;

use crate::auth::google;
use crate::auth::roles::{self, RoleLevel};
use crate::config;
use crate::database::models::user::{User, UserSummary};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::services::auth_service::{self, TokenBundle};
use crate::services::ServiceError;

pub async fn google_login() -> Result<Redirect, ApiError> {
    let url = google::authorize_url().map_err(|e| ServiceError::OAuth(e.to_string()))?;
    Ok(Redirect::temporary(&url))
}

#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub error: Option<String>,
}

pub async fn google_callback(Query(query): Query<CallbackQuery>) -> Redirect {
    let frontend = &config::config().server.frontend_url;

    if let Some(error) = query.error {
        warn!("Google consent screen returned an error: {}", error);
        return Redirect::temporary(&format!("{}/admin/login?error=access_denied", frontend));
    }

    let Some(code) = query.code else {
        return Redirect::temporary(&format!("{}/admin/login?error=missing_code", frontend));
    };

    match sign_in_with_code(code).await {
        Ok(bundle) => Redirect::temporary(&format!(
            "{}/admin/callback?token={}",
            frontend, bundle.access_token
        )),
        Err(e) => {
            warn!("Google sign-in failed: {}", e);
            Redirect::temporary(&format!("{}/admin/login?error=unauthorized", frontend))
        }
    }
}

async fn sign_in_with_code(code: String) -> Result<TokenBundle, ServiceError> {
    let google_user = google::fetch_user(code)
        .await
        .map_err(|e| ServiceError::OAuth(e.to_string()))?;

    let user = auth_service::validate_or_create_user(&google_user).await?;
    if !user.is_active {
        return Err(ServiceError::Forbidden(
            "บัญชีนี้ถูกระงับการใช้งาน".to_string(),
        ));
    }

    auth_service::generate_token(&user)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevLoginQuery {
    pub callback_path: Option<String>,
}

/// Development shortcut past the Google flow. Hidden outside development.
pub async fn dev_login(Query(query): Query<DevLoginQuery>) -> Result<Redirect, ApiError> {
    if !config::config().is_development() {
        return Err(ApiError::not_found("Not found"));
    }

    let bundle = auth_service::login_as_dev_admin().await?;
    let frontend = &config::config().server.frontend_url;
    let path = query.callback_path.as_deref().unwrap_or("/admin/callback");

    Ok(Redirect::temporary(&format!(
        "{}{}?token={}",
        frontend, path, bundle.access_token
    )))
}

/// Same as [`dev_login`] but returns the bundle as JSON, for API clients
pub async fn dev_token() -> Result<Json<TokenBundle>, ApiError> {
    if !config::config().is_development() {
        return Err(ApiError::not_found("Not found"));
    }

    let bundle = auth_service::login_as_dev_admin().await?;
    Ok(Json(bundle))
}

pub async fn profile(
    Extension(user): Extension<AuthUser>,
) -> Result<Json<UserSummary>, ApiError> {
    let profile = auth_service::get_profile(user.id).await?;
    Ok(Json(profile))
}

/// User row plus the single privilege level the admin UI displays
#[derive(Debug, Serialize)]
pub struct AdminUser {
    #[serde(flatten)]
    pub user: UserSummary,
    pub level: RoleLevel,
}

pub async fn list_users(
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<AdminUser>>, ApiError> {
    user.require_any(&[roles::ADMIN])?;

    let users = auth_service::get_all_users()
        .await?
        .into_iter()
        .map(|user| AdminUser { level: roles::derive_level(&user.roles), user })
        .collect();

    Ok(Json(users))
}

#[derive(Debug, Deserialize)]
pub struct UpdateLevelBody {
    pub level: RoleLevel,
}

pub async fn update_user_level(
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateLevelBody>,
) -> Result<Json<User>, ApiError> {
    user.require_any(&[roles::ADMIN])?;

    let updated = auth_service::update_user_level(id, body.level).await?;
    Ok(Json(updated))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleActiveBody {
    pub is_active: bool,
}

pub async fn toggle_user_active(
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(body): Json<ToggleActiveBody>,
) -> Result<Json<User>, ApiError> {
    user.require_any(&[roles::ADMIN])?;

    let updated = auth_service::toggle_user_active(id, body.is_active).await?;
    Ok(Json(updated))
}

pub async fn delete_user(
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    user.require_any(&[roles::ADMIN])?;

    if user.id == id {
        return Err(ApiError::bad_request("Cannot delete your own account"));
    }

    auth_service::delete_user(id).await?;
    Ok(Json(json!({ "success": true })))
}
