//! SQL Database - 连接池与探活

use async_trait::async_trait;
use sqlx::any::{install_default_drivers, AnyPoolOptions};
use sqlx::AnyPool;
use std::time::Duration;

use crate::application::ports::{DatabaseHealthPort, RepositoryError};

/// 数据库配置
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// 连接 URL（mysql://… 或 sqlite:…）
    pub database_url: String,
    /// 最大连接数，超出的请求排队等待空闲连接
    pub max_connections: u32,
    /// 等待空闲连接的超时时间
    pub acquire_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            database_url: "mysql://root@localhost:3306/foldrenges".to_string(),
            max_connections: 10,
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

impl DatabaseConfig {
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
            ..Self::default()
        }
    }

    fn is_in_memory(&self) -> bool {
        self.database_url.starts_with("sqlite::memory:")
    }
}

/// 数据库连接池
pub type DbPool = AnyPool;

/// 创建数据库连接池
pub async fn create_pool(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    install_default_drivers();

    let mut options = AnyPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout);

    // 内存 SQLite 的数据随连接关闭而消失，连接不能被回收
    if config.is_in_memory() {
        options = options
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>);
    }

    let pool = options.connect(&config.database_url).await?;

    tracing::info!(
        max_connections = config.max_connections,
        "Database pool created"
    );

    Ok(pool)
}

/// 基于连接池的探活
pub struct SqlDatabaseHealth {
    pool: DbPool,
}

impl SqlDatabaseHealth {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DatabaseHealthPort for SqlDatabaseHealth {
    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;
        Ok(())
    }
}

/// 测试用：内存 SQLite + tests/fixtures/schema.sql
#[cfg(test)]
pub(crate) async fn create_test_pool() -> DbPool {
    let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
    let script = include_str!("../../../../tests/fixtures/schema.sql");
    for statement in script.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        sqlx::query(statement).execute(&pool).await.unwrap();
    }
    pool
}
