//! 应用层：路由表与各资源处理器

pub mod products;
pub mod system;
pub mod users;

use axum::{routing::get, Router};

use crate::core::error::CoreError;
use products::ProductService;
use users::UserService;

#[derive(Clone, Default)]
pub struct AppState {
    pub user_service: UserService,
    pub product_service: ProductService,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            user_service: UserService::new(),
            product_service: ProductService::new(),
        }
    }
}

/// 新建资源的 id：当前毫秒时间戳
pub fn generate_id() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// 未匹配的路由以及不支持的方法都返回 404
pub async fn route_not_found() -> CoreError {
    CoreError::NotFound
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(system::index).fallback(route_not_found))
        .route(
            "/api/health",
            get(system::health_check).fallback(route_not_found),
        )
        .route(
            "/api/users",
            get(users::handler::list_users)
                .post(users::handler::create_user)
                .fallback(route_not_found),
        )
        .route(
            "/api/users/:id",
            get(users::handler::get_user)
                .put(users::handler::update_user)
                .delete(users::handler::delete_user)
                .fallback(route_not_found),
        )
        .route(
            "/api/products",
            get(products::handler::list_products)
                .post(products::handler::create_product)
                .fallback(route_not_found),
        )
        .route(
            "/api/products/:id",
            get(products::handler::get_product).fallback(route_not_found),
        )
        .fallback(route_not_found)
        .with_state(state)
}
