use chrono::{DateTime, Utc};
use serde::Serialize;

pub const API_NAME: &str = "Environmental Impact Analyzer API";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiInfo {
    pub message: &'static str,
}

impl Default for ApiInfo {
    fn default() -> Self {
        Self { message: API_NAME }
    }
}

/// Liveness payload for `/health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub started_at: DateTime<Utc>,
    pub uptime_secs: i64,
}

impl HealthReport {
    pub fn new(started_at: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self {
            status: "ok",
            service: "impact-analyzer",
            version: env!("CARGO_PKG_VERSION"),
            started_at,
            uptime_secs: (now - started_at).num_seconds().max(0),
        }
    }
}
