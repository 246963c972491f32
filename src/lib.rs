//! # Mock Store API
//!
//! 基于 Axum 的模拟用户/产品 JSON API：
//! - 数据为内置的固定示例，不做持久化
//! - 统一响应信封 `{success, message?, data?}`
//! - 未匹配路由返回 404，处理器失败（含 panic）返回 500 并记录日志

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

use axum::{extract::Request, middleware, Router};
use tokio::net::TcpListener;
use tower::{util::MapRequest, Layer, ServiceExt};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::app::AppState;
use crate::core::middleware::{handle_panic, lowercase_path, request_logging_middleware};

/// 可直接服务的应用：路径规范化 + 路由
///
/// 规范化必须在路由匹配之前完成，所以包在 `Router` 外层而不是通过 `Router::layer`。
pub type App = NormalizePath<MapRequest<Router, fn(Request) -> Request>>;

/// 完整的应用
pub fn create_app(state: AppState) -> App {
    apply_middleware(app::routes(state))
}

/// 中间件层 (从内到外)：panic 捕获、请求日志、追踪、CORS；
/// 最外层去掉路径末尾的斜杠并转成小写
pub fn apply_middleware(router: Router) -> App {
    let router = router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    let router = ServiceExt::<Request>::map_request(router, lowercase_path as fn(Request) -> Request);
    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// 在给定监听器上运行服务，直到收到关闭信号
pub async fn serve(listener: TcpListener, app: App) -> std::io::Result<()> {
    axum::serve(listener, axum::ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("无法监听 Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("无法监听 SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("收到关闭信号，等待进行中的请求完成...");
}
