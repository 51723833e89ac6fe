//! HTTP handlers, one module per resource. Handlers stay thin: extract,
//! gate on roles where needed, delegate to a service, wrap the result.

use axum::Json;
use serde_json::{json, Value};

use crate::database::manager::DatabaseManager;

pub mod admin_positions;
pub mod auth;
pub mod chiang_rai;
pub mod departments;
pub mod news;
pub mod programs;
pub mod staff;
pub mod upload;

pub async fn health() -> Json<Value> {
    let database = match DatabaseManager::health_check().await {
        Ok(()) => "up",
        Err(_) => "down",
    };

    Json(json!({
        "status": if database == "up" { "ok" } else { "degraded" },
        "database": database,
    }))
}
