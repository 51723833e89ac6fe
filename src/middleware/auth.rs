use axum::{
    extract::Request,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{Json, Response},
};
use uuid::Uuid;

use crate::auth::{validate_jwt, Claims};
use crate::error::ApiError;

/// Authenticated user context extracted from the bearer token
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub roles: Vec<String>,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            email: claims.email,
            name: claims.name,
            roles: claims.roles,
        }
    }
}

impl AuthUser {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// Role gate: membership of ANY of the required roles is sufficient
    pub fn require_any(&self, required: &[&str]) -> Result<(), ApiError> {
        if required.iter().any(|role| self.has_role(role)) {
            Ok(())
        } else {
            Err(ApiError::forbidden("คุณไม่มีสิทธิ์เข้าถึงส่วนนี้"))
        }
    }
}

/// JWT authentication middleware that validates tokens and extracts user context
pub async fn jwt_auth_middleware(
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, (StatusCode, Json<serde_json::Value>)> {
    let token = extract_jwt_from_headers(&headers).map_err(unauthorized_response)?;

    let claims = validate_jwt(&token)
        .map_err(|e| unauthorized_response(e.to_string()))?;

    let auth_user = AuthUser::from(claims);
    request.extensions_mut().insert(auth_user);

    Ok(next.run(request).await)
}

fn unauthorized_response(msg: String) -> (StatusCode, Json<serde_json::Value>) {
    let api_error = ApiError::unauthorized(msg);
    (
        StatusCode::from_u16(api_error.status_code()).unwrap_or(StatusCode::UNAUTHORIZED),
        Json(api_error.to_json()),
    )
}

/// Extract JWT token from Authorization header
fn extract_jwt_from_headers(headers: &HeaderMap) -> Result<String, String> {
    let auth_header = headers
        .get("authorization")
        .or_else(|| headers.get("Authorization"))
        .ok_or_else(|| "Missing Authorization header".to_string())?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "Invalid Authorization header format".to_string())?;

    if let Some(token) = auth_str.strip_prefix("Bearer ") {
        if token.trim().is_empty() {
            return Err("Empty JWT token".to_string());
        }
        Ok(token.to_string())
    } else {
        Err("Authorization header must use Bearer token format".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_roles(roles: &[&str]) -> AuthUser {
        AuthUser {
            id: Uuid::new_v4(),
            email: "somchai@crru.ac.th".to_string(),
            name: None,
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn role_gate_accepts_any_required_role() {
        let editor = user_with_roles(&["EDITOR", "STAFF"]);
        assert!(editor.require_any(&["ADMIN", "EDITOR"]).is_ok());
        assert!(editor.require_any(&["ADMIN"]).is_err());
    }

    #[test]
    fn role_gate_rejects_empty_role_set() {
        let guest = user_with_roles(&[]);
        assert!(guest.require_any(&["STAFF"]).is_err());
    }

    #[test]
    fn bearer_extraction() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", "Bearer abc.def.ghi".parse().unwrap());
        assert_eq!(extract_jwt_from_headers(&headers).unwrap(), "abc.def.ghi");

        let mut bad = HeaderMap::new();
        bad.insert("authorization", "Basic abc".parse().unwrap());
        assert!(extract_jwt_from_headers(&bad).is_err());
        assert!(extract_jwt_from_headers(&HeaderMap::new()).is_err());
    }
}
