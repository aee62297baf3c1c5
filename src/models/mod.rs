pub mod assessment;
pub mod product;
pub mod service;

pub use assessment::{Assessment, ProductInfo};
pub use product::ProductData;
pub use service::{ApiInfo, HealthReport};
