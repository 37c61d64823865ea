//! HTTP Handlers

mod admin;
mod health;
mod report;
mod settlement;

pub use admin::*;
pub use health::*;
pub use report::*;
pub use settlement::*;
