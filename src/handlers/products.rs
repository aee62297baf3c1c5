use axum::{extract::Path, Json};
use tracing::info;

use crate::models::ProductData;

// ── GET /api/v1/products/:product_id ──────────────────────────────────────────

pub async fn get_product(Path(product_id): Path<String>) -> Json<ProductData> {
    info!(product_id = %product_id, "Fetched product");
    Json(ProductData::placeholder(product_id))
}
