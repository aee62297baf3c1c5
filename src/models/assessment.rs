use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap},
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::AppError;

/// Result returned until a real scoring model exists.
pub const PLACEHOLDER_ASSESSMENT: &str = "dummy_assessment";

/// Free-form product description posted for assessment.
///
/// Any JSON object is accepted as-is, keeping key order and number text.
/// A body without `Content-Type` is still read as JSON; any other
/// non-JSON content type is a 415, and non-object JSON is a 422.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductInfo(pub Map<String, Value>);

impl ProductInfo {
    pub fn field_count(&self) -> usize {
        self.0.len()
    }

    pub fn from_slice(body: &[u8]) -> Result<Self, AppError> {
        serde_json::from_slice(body).map_err(AppError::from_json)
    }
}

#[async_trait]
impl<S> FromRequest<S> for ProductInfo
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !json_or_absent_content_type(req.headers()) {
            return Err(AppError::UnsupportedMediaType);
        }
        let body = Bytes::from_request(req, state).await?;
        Self::from_slice(&body)
    }
}

fn json_or_absent_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(header::CONTENT_TYPE) else {
        return true;
    };
    let Ok(value) = value.to_str() else {
        return false;
    };
    let essence = value.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub assessment: &'static str,
    pub product_info: ProductInfo,
}

impl Assessment {
    pub fn placeholder(product_info: ProductInfo) -> Self {
        Self {
            assessment: PLACEHOLDER_ASSESSMENT,
            product_info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn product_info_accepts_any_object() {
        let info: ProductInfo =
            serde_json::from_value(json!({ "name": "widget", "mass_kg": 1.5, "tags": ["a"] }))
                .unwrap();
        assert_eq!(info.field_count(), 3);
    }

    #[test]
    fn product_info_rejects_non_objects() {
        for value in [json!([1, 2]), json!("widget"), json!(42), json!(null)] {
            assert!(
                serde_json::from_value::<ProductInfo>(value.clone()).is_err(),
                "{value} must not deserialize as ProductInfo"
            );
        }
    }

    #[test]
    fn assessment_echoes_input_unchanged() {
        let input = json!({ "name": "widget", "nested": { "materials": ["steel", "pvc"] } });
        let info: ProductInfo = serde_json::from_value(input.clone()).unwrap();
        let out = serde_json::to_value(Assessment::placeholder(info)).unwrap();
        assert_eq!(
            out,
            json!({ "assessment": "dummy_assessment", "product_info": input })
        );
    }

    #[test]
    fn keeps_key_order_and_big_integers() {
        let raw = r#"{"zeta":1,"alpha":123456789012345678901234567890,"mid":0.10}"#;
        let info = ProductInfo::from_slice(raw.as_bytes()).unwrap();
        assert_eq!(serde_json::to_string(&info).unwrap(), raw);
    }

    #[test]
    fn content_type_rules() {
        let with = |ct: &str| {
            let mut headers = HeaderMap::new();
            headers.insert(header::CONTENT_TYPE, ct.parse().unwrap());
            json_or_absent_content_type(&headers)
        };
        assert!(json_or_absent_content_type(&HeaderMap::new()));
        assert!(with("application/json"));
        assert!(with("Application/JSON; charset=utf-8"));
        assert!(with("application/ld+json"));
        assert!(!with("text/plain"));
        assert!(!with("application/x-www-form-urlencoded"));
    }

    #[test]
    fn empty_object_is_echoed() {
        let out = serde_json::to_value(Assessment::placeholder(ProductInfo::default())).unwrap();
        assert_eq!(out, json!({ "assessment": "dummy_assessment", "product_info": {} }));
    }
}
