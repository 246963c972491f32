//! 产品数据模型

use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Value>,
}

impl Product {
    pub fn new(id: i64, name: &str, price: f64, category: &str) -> Self {
        Self {
            id: Some(id),
            name: Some(name.into()),
            price: Some(price.into()),
            category: Some(category.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductInput {
    pub name: Option<Value>,
    pub price: Option<Value>,
    pub category: Option<Value>,
}

impl From<Map<String, Value>> for ProductInput {
    fn from(mut fields: Map<String, Value>) -> Self {
        Self {
            name: fields.remove("name"),
            price: fields.remove("price"),
            category: fields.remove("category"),
        }
    }
}
