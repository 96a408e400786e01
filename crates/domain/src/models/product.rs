//! Product domain models.
//!
//! Products are unrelated to signups and groups; the entity exists alongside
//! them with its own create endpoint.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// Request payload for creating a product.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductRequest {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_product_request_deserializes() {
        let req: CreateProductRequest = serde_json::from_str(
            r#"{"id":"p1","name":"Pass","description":"Semester pass","price":49.99}"#,
        )
        .unwrap();
        assert_eq!(req.id, "p1");
        assert_eq!(req.price, 49.99);
    }
}
