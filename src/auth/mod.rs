use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config;

pub mod google;
pub mod roles;

/// Bearer-token payload issued after a successful sign-in
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub roles: Vec<String>,
    pub name: Option<String>,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(sub: Uuid, email: String, roles: Vec<String>, name: Option<String>) -> Self {
        let now = Utc::now();
        let expiry_hours = config::config().security.jwt_expiry_hours;
        let exp = (now + Duration::hours(expiry_hours as i64)).timestamp();

        Self {
            sub,
            email,
            roles,
            name,
            exp,
            iat: now.timestamp(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    #[error("JWT generation error: {0}")]
    TokenGeneration(String),

    #[error("Invalid JWT token: {0}")]
    InvalidToken(String),

    #[error("JWT secret not configured")]
    InvalidSecret,
}

pub fn generate_jwt(claims: &Claims) -> Result<String, JwtError> {
    let secret = &config::config().security.jwt_secret;

    if secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    encode(&Header::default(), claims, &encoding_key)
        .map_err(|e| JwtError::TokenGeneration(e.to_string()))
}

pub fn validate_jwt(token: &str) -> Result<Claims, JwtError> {
    let secret = &config::config().security.jwt_secret;

    if secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let token_data = decode::<Claims>(token, &decoding_key, &Validation::default())
        .map_err(|e| JwtError::InvalidToken(e.to_string()))?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_claims() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new(
            user_id,
            "somchai@crru.ac.th".to_string(),
            vec!["EDITOR".to_string(), "STAFF".to_string()],
            Some("Somchai".to_string()),
        );

        let token = generate_jwt(&claims).unwrap();
        let decoded = validate_jwt(&token).unwrap();

        assert_eq!(decoded.sub, user_id);
        assert_eq!(decoded.email, "somchai@crru.ac.th");
        assert_eq!(decoded.roles, vec!["EDITOR", "STAFF"]);
    }

    #[test]
    fn rejects_garbage_tokens() {
        assert!(validate_jwt("not-a-token").is_err());
    }

    #[test]
    fn default_expiry_is_seven_days() {
        let claims = Claims::new(Uuid::new_v4(), "a@crru.ac.th".to_string(), vec![], None);
        let lifetime = claims.exp - claims.iat;
        assert_eq!(lifetime, 7 * 24 * 3600);
    }
}
