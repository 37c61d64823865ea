//! In-Memory Settlement Repository

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::application::ports::{RepositoryError, SettlementRecord, SettlementRepositoryPort};
use crate::domain::{CountyName, SettlementId, SettlementName};

/// 内存定居点仓储
///
/// id 单调递增，删除后不复用（与 AUTO_INCREMENT 一致）
pub struct InMemorySettlementRepository {
    settlements: DashMap<SettlementId, SettlementRecord>,
    next_id: AtomicI64,
}

impl InMemorySettlementRepository {
    pub fn new() -> Self {
        Self {
            settlements: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// 直接写入一行（不经过校验），返回分配的 id
    pub fn seed(&self, name: &str, county: &str) -> SettlementId {
        let id = SettlementId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.settlements.insert(
            id,
            SettlementRecord {
                id,
                name: name.to_string(),
                county: county.to_string(),
            },
        );
        id
    }

    pub fn get(&self, id: SettlementId) -> Option<SettlementRecord> {
        self.settlements.get(&id).map(|s| s.clone())
    }

    pub fn len(&self) -> usize {
        self.settlements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settlements.is_empty()
    }
}

impl Default for InMemorySettlementRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SettlementRepositoryPort for InMemorySettlementRepository {
    async fn find_all(&self) -> Result<Vec<SettlementRecord>, RepositoryError> {
        let mut rows: Vec<SettlementRecord> =
            self.settlements.iter().map(|e| e.value().clone()).collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    async fn insert(
        &self,
        name: &SettlementName,
        county: &CountyName,
    ) -> Result<SettlementId, RepositoryError> {
        Ok(self.seed(name.as_str(), county.as_str()))
    }

    async fn update(
        &self,
        id: SettlementId,
        name: &SettlementName,
        county: &CountyName,
    ) -> Result<u64, RepositoryError> {
        match self.settlements.get_mut(&id) {
            Some(mut row) => {
                row.name = name.as_str().to_string();
                row.county = county.as_str().to_string();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: SettlementId) -> Result<u64, RepositoryError> {
        Ok(self.settlements.remove(&id).map_or(0, |_| 1))
    }

    async fn find_names_by_county(
        &self,
        county: &CountyName,
    ) -> Result<Vec<String>, RepositoryError> {
        let mut names: Vec<String> = self
            .settlements
            .iter()
            .filter(|e| e.county == county.as_str())
            .map(|e| e.name.clone())
            .collect();
        names.sort();
        Ok(names)
    }
}
