pub mod assessment;
pub mod products;

use axum::{extract::State, Json};
use chrono::Utc;

use crate::{
    error::AppError,
    models::{ApiInfo, HealthReport},
    AppState,
};

pub async fn root() -> Json<ApiInfo> {
    Json(ApiInfo::default())
}

pub async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    Json(HealthReport::new(state.started_at, Utc::now()))
}

pub async fn not_found() -> AppError {
    AppError::NotFound("Not Found".to_string())
}
