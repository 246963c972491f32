//! 服务信息与健康检查

use axum::response::Json;
use chrono::SecondsFormat;
use serde_json::{json, Value};

/// 服务元数据
pub async fn index() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the Mock Store API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "users": "/api/users",
            "products": "/api/products",
            "health": "/api/health"
        }
    }))
}

/// 健康检查，时间戳为毫秒精度的 UTC ISO-8601
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "OK",
        "timestamp": chrono::Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}
