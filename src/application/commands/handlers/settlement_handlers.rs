//! Settlement Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateSettlement, DeleteSettlement, UpdateSettlement};
use crate::application::error::ApplicationError;
use crate::application::ports::SettlementRepositoryPort;
use crate::domain::{SettlementDraft, SettlementId};

// ============================================================================
// CreateSettlement
// ============================================================================

/// 创建定居点响应
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSettlementResponse {
    pub id: SettlementId,
    pub name: String,
    pub county: String,
}

/// CreateSettlement Handler
pub struct CreateSettlementHandler {
    settlement_repo: Arc<dyn SettlementRepositoryPort>,
}

impl CreateSettlementHandler {
    pub fn new(settlement_repo: Arc<dyn SettlementRepositoryPort>) -> Self {
        Self { settlement_repo }
    }

    pub async fn handle(
        &self,
        command: CreateSettlement,
    ) -> Result<CreateSettlementResponse, ApplicationError> {
        let draft = SettlementDraft::new(command.name, command.county)?;

        let id = self
            .settlement_repo
            .insert(&draft.name, &draft.county)
            .await?;

        tracing::info!(
            settlement_id = %id,
            name = %draft.name,
            county = %draft.county,
            "Settlement created"
        );

        Ok(CreateSettlementResponse {
            id,
            name: draft.name.into_inner(),
            county: draft.county.into_inner(),
        })
    }
}

// ============================================================================
// UpdateSettlement
// ============================================================================

/// 更新定居点响应
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSettlementResponse {
    pub id: SettlementId,
    pub name: String,
    pub county: String,
}

/// UpdateSettlement Handler
pub struct UpdateSettlementHandler {
    settlement_repo: Arc<dyn SettlementRepositoryPort>,
}

impl UpdateSettlementHandler {
    pub fn new(settlement_repo: Arc<dyn SettlementRepositoryPort>) -> Self {
        Self { settlement_repo }
    }

    pub async fn handle(
        &self,
        command: UpdateSettlement,
    ) -> Result<UpdateSettlementResponse, ApplicationError> {
        let draft = SettlementDraft::new(command.name, command.county)?;

        let affected = self
            .settlement_repo
            .update(command.id, &draft.name, &draft.county)
            .await?;

        if affected == 0 {
            tracing::debug!(settlement_id = %command.id, "Update matched no settlement");
            return Err(ApplicationError::settlement_not_found());
        }

        tracing::info!(settlement_id = %command.id, "Settlement updated");

        Ok(UpdateSettlementResponse {
            id: command.id,
            name: draft.name.into_inner(),
            county: draft.county.into_inner(),
        })
    }
}

// ============================================================================
// DeleteSettlement
// ============================================================================

/// DeleteSettlement Handler
pub struct DeleteSettlementHandler {
    settlement_repo: Arc<dyn SettlementRepositoryPort>,
}

impl DeleteSettlementHandler {
    pub fn new(settlement_repo: Arc<dyn SettlementRepositoryPort>) -> Self {
        Self { settlement_repo }
    }

    pub async fn handle(&self, command: DeleteSettlement) -> Result<SettlementId, ApplicationError> {
        let affected = self.settlement_repo.delete(command.id).await?;

        if affected == 0 {
            tracing::debug!(settlement_id = %command.id, "Delete matched no settlement");
            return Err(ApplicationError::settlement_not_found());
        }

        tracing::info!(settlement_id = %command.id, "Settlement deleted");

        Ok(command.id)
    }
}
