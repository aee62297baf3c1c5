use axum::Json;
use tracing::info;

use crate::models::{Assessment, ProductInfo};

// ── POST /api/v1/assess ───────────────────────────────────────────────────────

pub async fn assess_product(product_info: ProductInfo) -> Json<Assessment> {
    info!(fields = product_info.field_count(), "Assessed product");
    Json(Assessment::placeholder(product_info))
}
