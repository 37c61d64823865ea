//! Data Transfer Objects
//!
//! JSON 字段名沿用数据库列名（nev / varmegye / datum …）

use serde::{Deserialize, Serialize};

use crate::application::{
    CountyQuakeCount, CreateSettlementResponse, MaxMagnitudeRecord, SettlementRecord,
    UpdateSettlementResponse,
};

// ============================================================================
// Settlement DTOs
// ============================================================================

/// 创建 / 更新请求体，字段缺失由应用层校验
#[derive(Debug, Default, Deserialize)]
pub struct SettlementRequest {
    #[serde(default)]
    pub nev: Option<String>,
    #[serde(default)]
    pub varmegye: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SettlementResponse {
    pub id: i64,
    pub nev: String,
    pub varmegye: String,
}

impl From<SettlementRecord> for SettlementResponse {
    fn from(record: SettlementRecord) -> Self {
        Self {
            id: record.id.value(),
            nev: record.name,
            varmegye: record.county,
        }
    }
}

impl From<CreateSettlementResponse> for SettlementResponse {
    fn from(created: CreateSettlementResponse) -> Self {
        Self {
            id: created.id.value(),
            nev: created.name,
            varmegye: created.county,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SettlementUpdatedResponse {
    pub ok: bool,
    pub id: i64,
    pub nev: String,
    pub varmegye: String,
}

impl From<UpdateSettlementResponse> for SettlementUpdatedResponse {
    fn from(updated: UpdateSettlementResponse) -> Self {
        Self {
            ok: true,
            id: updated.id.value(),
            nev: updated.name,
            varmegye: updated.county,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SettlementDeletedResponse {
    pub ok: bool,
    pub id: i64,
}

// ============================================================================
// Report DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct CountyCountResponse {
    pub varmegye: String,
    pub db: i64,
}

impl From<CountyQuakeCount> for CountyCountResponse {
    fn from(count: CountyQuakeCount) -> Self {
        Self {
            varmegye: count.county,
            db: count.count,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MaxMagnitudeResponse {
    pub nev: String,
    pub datum: String,
    pub ido: String,
    pub magnitudo: f64,
}

impl From<MaxMagnitudeRecord> for MaxMagnitudeResponse {
    fn from(record: MaxMagnitudeRecord) -> Self {
        Self {
            nev: record.settlement_name,
            datum: record.date,
            ido: record.time,
            magnitudo: record.magnitude,
        }
    }
}

// ============================================================================
// Health / Admin DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub db: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AdminPingResponse {
    pub ok: bool,
    pub message: &'static str,
}
