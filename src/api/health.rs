use axum::{extract::State, http::StatusCode, Json};
use sea_orm::ConnectionTrait;
use serde_json::{json, Value};

use crate::infrastructure::AppState;

pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let database = match state.db().execute_unprepared("SELECT 1").await {
        Ok(_) => "ok".to_string(),
        Err(e) => {
            tracing::error!("Health check could not reach the database: {}", e);
            e.to_string()
        }
    };
    let (status, summary) = if database == "ok" {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        status,
        Json(json!({
            "status": summary,
            "service": "online-library",
            "version": env!("CARGO_PKG_VERSION"),
            "database": database,
            "sessions": state.sessions.len()
        })),
    )
}
