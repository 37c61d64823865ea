//! Report Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{
    CountyQuakeCount, DatabaseHealthPort, MaxMagnitudeRecord, QuakeLogRepositoryPort,
};
use crate::application::queries::{CheckDatabaseHealth, CountQuakesByCounty, GetMaxMagnitudeEntries};

/// CountQuakesByCounty Handler
pub struct CountQuakesByCountyHandler {
    quake_log_repo: Arc<dyn QuakeLogRepositoryPort>,
}

impl CountQuakesByCountyHandler {
    pub fn new(quake_log_repo: Arc<dyn QuakeLogRepositoryPort>) -> Self {
        Self { quake_log_repo }
    }

    pub async fn handle(
        &self,
        _query: CountQuakesByCounty,
    ) -> Result<Vec<CountyQuakeCount>, ApplicationError> {
        Ok(self.quake_log_repo.count_by_county().await?)
    }
}

/// GetMaxMagnitudeEntries Handler
///
/// 并列最大值全部返回；日志表为空时返回 NotFound
pub struct GetMaxMagnitudeEntriesHandler {
    quake_log_repo: Arc<dyn QuakeLogRepositoryPort>,
}

impl GetMaxMagnitudeEntriesHandler {
    pub fn new(quake_log_repo: Arc<dyn QuakeLogRepositoryPort>) -> Self {
        Self { quake_log_repo }
    }

    pub async fn handle(
        &self,
        _query: GetMaxMagnitudeEntries,
    ) -> Result<Vec<MaxMagnitudeRecord>, ApplicationError> {
        let entries = self.quake_log_repo.find_max_magnitude().await?;
        if entries.is_empty() {
            return Err(ApplicationError::no_log_data());
        }
        Ok(entries)
    }
}

/// CheckDatabaseHealth Handler
pub struct CheckDatabaseHealthHandler {
    health: Arc<dyn DatabaseHealthPort>,
}

impl CheckDatabaseHealthHandler {
    pub fn new(health: Arc<dyn DatabaseHealthPort>) -> Self {
        Self { health }
    }

    pub async fn handle(&self, _query: CheckDatabaseHealth) -> Result<(), ApplicationError> {
        self.health.ping().await?;
        Ok(())
    }
}
