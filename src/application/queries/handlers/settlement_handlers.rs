//! Settlement Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{SettlementRecord, SettlementRepositoryPort};
use crate::application::queries::{ListSettlementNamesByCounty, ListSettlements};

/// ListSettlements Handler
pub struct ListSettlementsHandler {
    settlement_repo: Arc<dyn SettlementRepositoryPort>,
}

impl ListSettlementsHandler {
    pub fn new(settlement_repo: Arc<dyn SettlementRepositoryPort>) -> Self {
        Self { settlement_repo }
    }

    pub async fn handle(
        &self,
        _query: ListSettlements,
    ) -> Result<Vec<SettlementRecord>, ApplicationError> {
        Ok(self.settlement_repo.find_all().await?)
    }
}

/// ListSettlementNamesByCounty Handler
pub struct ListSettlementNamesByCountyHandler {
    settlement_repo: Arc<dyn SettlementRepositoryPort>,
}

impl ListSettlementNamesByCountyHandler {
    pub fn new(settlement_repo: Arc<dyn SettlementRepositoryPort>) -> Self {
        Self { settlement_repo }
    }

    pub async fn handle(
        &self,
        query: ListSettlementNamesByCounty,
    ) -> Result<Vec<String>, ApplicationError> {
        Ok(self
            .settlement_repo
            .find_names_by_county(&query.county)
            .await?)
    }
}
