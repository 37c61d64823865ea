//! Quakelog - 定居点与地震日志 HTTP 服务

use std::sync::Arc;
use std::time::Duration;

use quakelog::config::{load_config, print_config};
use quakelog::infrastructure::http::{AppState, HttpServer, ServerConfig};
use quakelog::infrastructure::persistence::sql::{
    create_pool, DatabaseConfig, SqlDatabaseHealth, SqlQuakeLogRepository,
    SqlSettlementRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},quakelog={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Quakelog - telepules / naplo API");
    print_config(&config);

    // 初始化数据库连接池（表结构由外部维护）
    let database_url = config
        .database
        .database_url()
        .ok_or_else(|| anyhow::anyhow!("Database configuration is incomplete"))?;
    let db_config = DatabaseConfig {
        database_url,
        max_connections: config.database.max_connections,
        acquire_timeout: Duration::from_secs(config.database.acquire_timeout_secs),
    };
    let pool = create_pool(&db_config).await?;

    // 创建 Repository 适配器
    let settlement_repo = Arc::new(SqlSettlementRepository::new(pool.clone()));
    let quake_log_repo = Arc::new(SqlQuakeLogRepository::new(pool.clone()));
    let health = Arc::new(SqlDatabaseHealth::new(pool.clone()));

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(
        settlement_repo,
        quake_log_repo,
        health,
        config.auth.api_key.clone(),
    );

    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                return;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    pool.close().await;
    tracing::info!("Server shutdown complete");

    Ok(())
}
