use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub security: SecurityConfig,
    pub google: GoogleConfig,
    pub upload: UploadConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    /// Base URL of the Next.js frontend, used for post-login redirects
    pub frontend_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub max_connections: u32,
    pub connection_timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub jwt_secret: String,
    pub jwt_expiry_hours: u64,
    /// Accounts may only be created for addresses ending with this suffix
    pub allowed_email_domain: String,
    pub enable_cors: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleConfig {
    pub client_id: String,
    pub client_secret: String,
    pub callback_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    pub staff_image_dir: String,
    pub max_image_width: u32,
    pub max_image_height: u32,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = env::var("PORT") {
            self.server.port = v.parse().unwrap_or(self.server.port);
        }
        if let Ok(v) = env::var("FRONTEND_URL") {
            self.server.frontend_url = v;
        }

        if let Ok(v) = env::var("DATABASE_MAX_CONNECTIONS") {
            self.database.max_connections = v.parse().unwrap_or(self.database.max_connections);
        }
        if let Ok(v) = env::var("DATABASE_CONNECTION_TIMEOUT") {
            self.database.connection_timeout = v.parse().unwrap_or(self.database.connection_timeout);
        }

        if let Ok(v) = env::var("JWT_SECRET") {
            self.security.jwt_secret = v;
        }
        if let Ok(v) = env::var("JWT_EXPIRY_HOURS") {
            self.security.jwt_expiry_hours = v.parse().unwrap_or(self.security.jwt_expiry_hours);
        }
        if let Ok(v) = env::var("ALLOWED_EMAIL_DOMAIN") {
            self.security.allowed_email_domain = v;
        }

        if let Ok(v) = env::var("GOOGLE_CLIENT_ID") {
            self.google.client_id = v;
        }
        if let Ok(v) = env::var("GOOGLE_CLIENT_SECRET") {
            self.google.client_secret = v;
        }
        if let Ok(v) = env::var("GOOGLE_CALLBACK_URL") {
            self.google.callback_url = v;
        }

        if let Ok(v) = env::var("UPLOAD_STAFF_IMAGE_DIR") {
            self.upload.staff_image_dir = v;
        }

        self
    }

    fn base() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig {
                port: 4001,
                frontend_url: "http://localhost:4000".to_string(),
            },
            database: DatabaseConfig {
                max_connections: 10,
                connection_timeout: 30,
            },
            security: SecurityConfig {
                jwt_secret: "soc-crru-secret-key-2026".to_string(),
                jwt_expiry_hours: 24 * 7,
                allowed_email_domain: "@crru.ac.th".to_string(),
                enable_cors: true,
            },
            google: GoogleConfig {
                client_id: String::new(),
                client_secret: String::new(),
                callback_url: "http://localhost:4001/api/auth/google/callback".to_string(),
            },
            upload: UploadConfig {
                staff_image_dir: "./uploads/staff".to_string(),
                max_image_width: 768,
                max_image_height: 1024,
            },
        }
    }

    fn development() -> Self {
        Self::base()
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            database: DatabaseConfig {
                max_connections: 20,
                connection_timeout: 10,
            },
            ..Self::base()
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            database: DatabaseConfig {
                max_connections: 50,
                connection_timeout: 5,
            },
            security: SecurityConfig {
                // Production deployments must provide JWT_SECRET via environment
                jwt_secret: String::new(),
                jwt_expiry_hours: 24 * 7,
                allowed_email_domain: "@crru.ac.th".to_string(),
                enable_cors: true,
            },
            ..Self::base()
        }
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_defaults() {
        let config = AppConfig::development();
        assert_eq!(config.server.port, 4001);
        assert_eq!(config.security.jwt_expiry_hours, 24 * 7);
        assert_eq!(config.security.allowed_email_domain, "@crru.ac.th");
        assert!(!config.security.jwt_secret.is_empty());
    }

    #[test]
    fn production_requires_explicit_secret() {
        let config = AppConfig::production();
        assert!(config.security.jwt_secret.is_empty());
        assert_eq!(config.database.max_connections, 50);
    }
}
