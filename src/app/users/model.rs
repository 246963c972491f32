//! 用户数据模型

use serde::Serialize;
use serde_json::{Map, Value};

/// 请求体中的字段不做类型校验，出现即原样回显（包括 `null`），缺省则省略
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Value>,
}

impl User {
    pub fn new(id: i64, name: &str, email: &str) -> Self {
        Self {
            id: Some(id),
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }
}

/// 创建/更新用户的请求体
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserInput {
    pub name: Option<Value>,
    pub email: Option<Value>,
}

impl From<Map<String, Value>> for UserInput {
    fn from(mut fields: Map<String, Value>) -> Self {
        Self {
            name: fields.remove("name"),
            email: fields.remove("email"),
        }
    }
}
