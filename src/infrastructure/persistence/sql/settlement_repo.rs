//! SQL Settlement Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{RepositoryError, SettlementRecord, SettlementRepositoryPort};
use crate::domain::{CountyName, SettlementId, SettlementName};

/// SQL Settlement Repository（telepules 表）
pub struct SqlSettlementRepository {
    pool: DbPool,
}

impl SqlSettlementRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct SettlementRow {
    id: i64,
    nev: String,
    varmegye: String,
}

impl From<SettlementRow> for SettlementRecord {
    fn from(row: SettlementRow) -> Self {
        SettlementRecord {
            id: SettlementId::new(row.id),
            name: row.nev,
            county: row.varmegye,
        }
    }
}

#[async_trait]
impl SettlementRepositoryPort for SqlSettlementRepository {
    async fn find_all(&self) -> Result<Vec<SettlementRecord>, RepositoryError> {
        let rows: Vec<SettlementRow> =
            sqlx::query_as("SELECT id, nev, varmegye FROM telepules ORDER BY nev")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(SettlementRecord::from).collect())
    }

    async fn insert(
        &self,
        name: &SettlementName,
        county: &CountyName,
    ) -> Result<SettlementId, RepositoryError> {
        // 插入和取 id 必须在同一个连接上
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        let result = sqlx::query("INSERT INTO telepules (nev, varmegye) VALUES (?, ?)")
            .bind(name.as_str())
            .bind(county.as_str())
            .execute(&mut *conn)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        if let Some(id) = result.last_insert_id() {
            return Ok(SettlementId::new(id));
        }

        // SQLite 的 Any 桥接不回填 last_insert_id
        let id: i64 = sqlx::query_scalar("SELECT last_insert_rowid()")
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(SettlementId::new(id))
    }

    async fn update(
        &self,
        id: SettlementId,
        name: &SettlementName,
        county: &CountyName,
    ) -> Result<u64, RepositoryError> {
        let result = sqlx::query("UPDATE telepules SET nev = ?, varmegye = ? WHERE id = ?")
            .bind(name.as_str())
            .bind(county.as_str())
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: SettlementId) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM telepules WHERE id = ?")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected())
    }

    async fn find_names_by_county(
        &self,
        county: &CountyName,
    ) -> Result<Vec<String>, RepositoryError> {
        sqlx::query_scalar("SELECT nev FROM telepules WHERE varmegye = ? ORDER BY nev")
            .bind(county.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))
    }
}
