//! Settlement Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettlementError {
    #[error("nev és varmegye kötelező")]
    MissingField,

    #[error("hibás id")]
    InvalidId(String),
}
