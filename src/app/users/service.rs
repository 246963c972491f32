//! 用户业务服务

use super::model::{User, UserInput};
use crate::app::generate_id;
use crate::core::error::CoreError;
use crate::core::extract::display_id;

#[derive(Clone, Default)]
pub struct UserService;

impl UserService {
    pub fn new() -> Self {
        Self
    }

    /// 固定的示例用户
    pub fn list_users(&self) -> Result<Vec<User>, CoreError> {
        Ok(vec![
            User::new(1, "John Doe", "john@example.com"),
            User::new(2, "Jane Smith", "jane@example.com"),
            User::new(3, "Bob Johnson", "bob@example.com"),
        ])
    }

    /// 不查询任何数据，直接用请求的 id 合成用户
    pub fn get_user(&self, id: Option<i64>) -> Result<User, CoreError> {
        Ok(User {
            id,
            ..User::new(0, "John Doe", "john@example.com")
        })
    }

    pub fn create_user(&self, input: UserInput) -> Result<User, CoreError> {
        // 不持久化
        Ok(User {
            id: Some(generate_id()),
            name: input.name,
            email: input.email,
        })
    }

    pub fn update_user(&self, id: Option<i64>, input: UserInput) -> Result<User, CoreError> {
        Ok(User {
            id,
            name: input.name,
            email: input.email,
        })
    }

    /// 返回删除确认消息
    pub fn delete_user(&self, id: Option<i64>) -> Result<String, CoreError> {
        Ok(format!("User {} deleted", display_id(id)))
    }
}
