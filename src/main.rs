//! WebGateway - JSON Web 网关
//!
//! - Domain: project/
//! - Application: commands, queries, ports
//! - Infrastructure: http, memory

use std::sync::Arc;

use webgateway::application::SessionManagerPort;
use webgateway::config::{load_config, print_config};
use webgateway::infrastructure::http::{AppState, HttpServer, LoginRequired, ServerConfig};
use webgateway::infrastructure::memory::{
    spawn_session_sweeper, InMemoryAccountDirectory, InMemoryProjectRepository,
    InMemorySessionManager,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},webgateway={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("WebGateway - JSON Web 网关");
    print_config(&config);

    // 内存端口
    let sessions: Arc<dyn SessionManagerPort> = Arc::new(InMemorySessionManager::new());
    let accounts = Arc::new(InMemoryAccountDirectory::from_config(&config.auth.users));
    if accounts.is_empty() {
        tracing::warn!("No user accounts configured; every login will be rejected");
    }
    let projects = Arc::new(InMemoryProjectRepository::new(config.api.max_limit));

    // 过期会话清理
    let sweeper = spawn_session_sweeper(
        sessions.clone(),
        config.auth.sweep_interval_secs,
        config.auth.session_idle_timeout_secs,
    );

    // JSON API 的登录检查：未登录返回 403
    let gate = LoginRequired::new(
        sessions.clone(),
        config.auth.login_url.clone(),
        config.auth.session_cookie.clone(),
        config.auth.session_idle_timeout_secs,
    )
    .json();

    let state = AppState::new(sessions, accounts, projects, config.api.clone());

    let server_config = ServerConfig::new(config.server.host.clone(), config.server.port);
    let server = HttpServer::new(server_config, state, gate);

    tracing::info!("Server starting on {}", config.server.addr());

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for shutdown signal");
            }
            tracing::info!("Shutdown signal received");
        })
        .await?;

    sweeper.abort();
    tracing::info!("Server stopped");

    Ok(())
}
