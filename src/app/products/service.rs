//! 产品业务服务

use super::model::{Product, ProductInput};
use crate::app::generate_id;
use crate::core::error::CoreError;

#[derive(Clone, Default)]
pub struct ProductService;

impl ProductService {
    pub fn new() -> Self {
        Self
    }

    pub fn list_products(&self) -> Result<Vec<Product>, CoreError> {
        Ok(vec![
            Product::new(1, "Laptop", 999.99, "Electronics"),
            Product::new(2, "Phone", 699.99, "Electronics"),
            Product::new(3, "Desk Chair", 199.99, "Furniture"),
        ])
    }

    pub fn get_product(&self, id: Option<i64>) -> Result<Product, CoreError> {
        // 模拟从数据库获取产品
        Ok(Product {
            id,
            ..Product::new(0, "Laptop", 999.99, "Electronics")
        })
    }

    pub fn create_product(&self, input: ProductInput) -> Result<Product, CoreError> {
        Ok(Product {
            id: Some(generate_id()),
            name: input.name,
            price: input.price,
            category: input.category,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_products() {
        let products = ProductService::new().list_products().unwrap();
        assert_eq!(products.len(), 3);
        assert_eq!(products[2], Product::new(3, "Desk Chair", 199.99, "Furniture"));
    }

    #[test]
    fn test_get_product_without_id() {
        let product = ProductService::new().get_product(None).unwrap();
        assert_eq!(product.id, None);
        assert_eq!(product.name, Some(json!("Laptop")));
    }

    #[test]
    fn test_create_product_echoes_input() {
        let input = ProductInput {
            name: Some(json!("Mouse")),
            price: Some(json!("19.99")),
            category: None,
        };
        let product = ProductService::new().create_product(input).unwrap();
        assert!(product.id.is_some());
        assert_eq!(product.price, Some(json!("19.99")));
        assert_eq!(product.category, None);
    }
}
