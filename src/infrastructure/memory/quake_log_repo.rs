//! In-Memory Quake Log Repository

use async_trait::async_trait;
use dashmap::DashMap;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::InMemorySettlementRepository;
use crate::application::ports::{
    CountyQuakeCount, MaxMagnitudeRecord, QuakeLogRepositoryPort, RepositoryError,
};
use crate::domain::SettlementId;

#[derive(Debug, Clone)]
struct LogRow {
    settlement_id: SettlementId,
    date: String,
    time: String,
    magnitude: f64,
}

/// 内存地震日志仓储
///
/// 与定居点仓储按 settlement_id 做内连接，找不到定居点的日志行被忽略
pub struct InMemoryQuakeLogRepository {
    settlements: Arc<InMemorySettlementRepository>,
    entries: DashMap<u64, LogRow>,
    next_id: AtomicU64,
}

impl InMemoryQuakeLogRepository {
    pub fn new(settlements: Arc<InMemorySettlementRepository>) -> Self {
        Self {
            settlements,
            entries: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// 追加一条日志
    pub fn record(&self, settlement_id: SettlementId, date: &str, time: &str, magnitude: f64) {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.entries.insert(
            id,
            LogRow {
                settlement_id,
                date: date.to_string(),
                time: time.to_string(),
                magnitude,
            },
        );
    }
}

#[async_trait]
impl QuakeLogRepositoryPort for InMemoryQuakeLogRepository {
    async fn count_by_county(&self) -> Result<Vec<CountyQuakeCount>, RepositoryError> {
        let mut counts: HashMap<String, i64> = HashMap::new();
        for entry in self.entries.iter() {
            if let Some(settlement) = self.settlements.get(entry.settlement_id) {
                *counts.entry(settlement.county).or_default() += 1;
            }
        }

        let mut rows: Vec<CountyQuakeCount> = counts
            .into_iter()
            .map(|(county, count)| CountyQuakeCount { county, count })
            .collect();
        rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.county.cmp(&b.county)));
        Ok(rows)
    }

    async fn find_max_magnitude(&self) -> Result<Vec<MaxMagnitudeRecord>, RepositoryError> {
        // 与 SQL 子查询一致：最大值取自整张日志表
        let max = self
            .entries
            .iter()
            .map(|e| e.magnitude)
            .fold(None, |acc: Option<f64>, m| Some(acc.map_or(m, |a| a.max(m))));

        let Some(max) = max else {
            return Ok(Vec::new());
        };

        let mut rows: Vec<MaxMagnitudeRecord> = self
            .entries
            .iter()
            .filter(|e| e.magnitude == max)
            .filter_map(|e| {
                self.settlements
                    .get(e.settlement_id)
                    .map(|s| MaxMagnitudeRecord {
                        settlement_name: s.name,
                        date: e.date.clone(),
                        time: e.time.clone(),
                        magnitude: e.magnitude,
                    })
            })
            .collect();
        rows.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.time.cmp(&a.time)));
        Ok(rows)
    }
}
