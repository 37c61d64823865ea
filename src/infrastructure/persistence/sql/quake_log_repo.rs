//! SQL Quake Log Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{
    CountyQuakeCount, MaxMagnitudeRecord, QuakeLogRepositoryPort, RepositoryError,
};

/// SQL Quake Log Repository（naplo 表，只读）
pub struct SqlQuakeLogRepository {
    pool: DbPool,
}

impl SqlQuakeLogRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct CountyCountRow {
    varmegye: String,
    db: i64,
}

#[derive(FromRow)]
struct MaxMagnitudeRow {
    nev: String,
    datum: String,
    ido: String,
    magnitudo: f64,
}

// Any 驱动无法解码 DATE/TIME/DECIMAL：日期时间转成文本，震级加 0E0 转成双精度
const MAX_MAGNITUDE_SQL: &str = r#"
    SELECT t.nev AS nev,
           CAST(n.datum AS CHAR) AS datum,
           CAST(n.ido AS CHAR) AS ido,
           (n.magnitudo + 0E0) AS magnitudo
    FROM naplo n
    JOIN telepules t ON t.id = n.telepid
    WHERE n.magnitudo = (SELECT MAX(magnitudo) FROM naplo)
    ORDER BY n.datum DESC, n.ido DESC
"#;

const COUNT_BY_COUNTY_SQL: &str = r#"
    SELECT t.varmegye AS varmegye, COUNT(n.id) AS db
    FROM naplo n
    JOIN telepules t ON t.id = n.telepid
    GROUP BY t.varmegye
    ORDER BY db DESC, t.varmegye ASC
"#;

#[async_trait]
impl QuakeLogRepositoryPort for SqlQuakeLogRepository {
    async fn count_by_county(&self) -> Result<Vec<CountyQuakeCount>, RepositoryError> {
        let rows: Vec<CountyCountRow> = sqlx::query_as(COUNT_BY_COUNTY_SQL)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| CountyQuakeCount {
                county: row.varmegye,
                count: row.db,
            })
            .collect())
    }

    async fn find_max_magnitude(&self) -> Result<Vec<MaxMagnitudeRecord>, RepositoryError> {
        let rows: Vec<MaxMagnitudeRow> = sqlx::query_as(MAX_MAGNITUDE_SQL)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| MaxMagnitudeRecord {
                settlement_name: row.nev,
                date: row.datum,
                time: row.ido,
                magnitude: row.magnitudo,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sql::database::create_test_pool;

    async fn seed(pool: &DbPool) {
        for (id, nev, varmegye) in [
            (1_i64, "Pécs", "Baranya"),
            (2, "Mohács", "Baranya"),
            (3, "Siklós", "Baranya"),
            (4, "Barcs", "Somogy"),
            (5, "Eger", "Heves"),
        ] {
            sqlx::query("INSERT INTO telepules (id, nev, varmegye) VALUES (?, ?, ?)")
                .bind(id)
                .bind(nev)
                .bind(varmegye)
                .execute(pool)
                .await
                .unwrap();
        }
    }

    async fn log(pool: &DbPool, telepid: i64, datum: &str, ido: &str, magnitudo: f64) {
        sqlx::query("INSERT INTO naplo (telepid, datum, ido, magnitudo) VALUES (?, ?, ?, ?)")
            .bind(telepid)
            .bind(datum)
            .bind(ido)
            .bind(magnitudo)
            .execute(pool)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_count_by_county() {
        let pool = create_test_pool().await;
        seed(&pool).await;
        log(&pool, 1, "2020-01-01", "10:00:00", 1.2).await;
        log(&pool, 2, "2020-02-01", "10:00:00", 1.5).await;
        for day in 1..=5 {
            log(&pool, 4, &format!("2021-03-0{day}"), "06:00:00", 2.1).await;
        }

        let repo = SqlQuakeLogRepository::new(pool);
        let counts = repo.count_by_county().await.unwrap();

        // Heves 没有日志，不出现
        assert_eq!(
            counts,
            vec![
                CountyQuakeCount { county: "Somogy".into(), count: 5 },
                CountyQuakeCount { county: "Baranya".into(), count: 2 },
            ]
        );
    }

    #[tokio::test]
    async fn test_count_tie_break_by_county_name() {
        let pool = create_test_pool().await;
        seed(&pool).await;
        log(&pool, 5, "2020-01-01", "10:00:00", 1.0).await;
        log(&pool, 1, "2020-01-01", "10:00:00", 1.0).await;

        let repo = SqlQuakeLogRepository::new(pool);
        let counties: Vec<String> = repo
            .count_by_county()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.county)
            .collect();
        assert_eq!(counties, vec!["Baranya", "Heves"]);
    }

    #[tokio::test]
    async fn test_max_magnitude_ties_ordered_by_date_then_time() {
        let pool = create_test_pool().await;
        seed(&pool).await;
        log(&pool, 1, "2019-06-01", "12:00:00", 3.1).await;
        log(&pool, 2, "2021-05-02", "08:00:00", 5.6).await;
        log(&pool, 4, "2021-05-02", "09:30:00", 5.6).await;
        log(&pool, 5, "2023-01-01", "00:00:00", 2.0).await;

        let repo = SqlQuakeLogRepository::new(pool);
        let rows = repo.find_max_magnitude().await.unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].settlement_name, "Barcs");
        assert_eq!(rows[0].date, "2021-05-02");
        assert_eq!(rows[0].time, "09:30:00");
        assert_eq!(rows[1].settlement_name, "Mohács");
        assert!(rows.iter().all(|r| (r.magnitude - 5.6).abs() < f64::EPSILON));
    }

    #[tokio::test]
    async fn test_max_magnitude_empty_table() {
        let pool = create_test_pool().await;
        seed(&pool).await;

        let repo = SqlQuakeLogRepository::new(pool);
        assert!(repo.find_max_magnitude().await.unwrap().is_empty());
    }
}
