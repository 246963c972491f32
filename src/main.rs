use anyhow::Context;
use mock_store_api::{app::AppState, config, create_app, infrastructure::logger::Logger, serve};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load_config().context("加载配置失败")?;
    Logger::init(&config.logging.level).context("初始化日志失败")?;
    info!(?config, "配置已加载");

    let addr = config.socket_addr()?;
    let app = create_app(AppState::new());

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("无法绑定到 {}", addr))?;

    let port = config.server.port;
    info!("Server is running on http://localhost:{}", port);
    info!("API endpoints available at http://localhost:{}/api", port);

    serve(listener, app).await.context("服务器运行失败")?;

    info!("服务器已关闭");
    Ok(())
}
