use serde::Serialize;

/// Returned in place of stored product data; there is no backing store yet.
pub const PLACEHOLDER_PRODUCT_DATA: &str = "dummy_product_data";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductData {
    pub product_id: String,
    pub data: &'static str,
}

impl ProductData {
    pub fn placeholder(product_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            data: PLACEHOLDER_PRODUCT_DATA,
        }
    }
}
