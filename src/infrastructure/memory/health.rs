//! In-Memory Database Health

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::application::ports::{DatabaseHealthPort, RepositoryError};

/// 可手动切换状态的探活实现
pub struct InMemoryDatabaseHealth {
    up: AtomicBool,
}

impl InMemoryDatabaseHealth {
    pub fn new() -> Self {
        Self {
            up: AtomicBool::new(true),
        }
    }

    pub fn set_up(&self, up: bool) {
        self.up.store(up, Ordering::SeqCst);
    }
}

impl Default for InMemoryDatabaseHealth {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DatabaseHealthPort for InMemoryDatabaseHealth {
    async fn ping(&self) -> Result<(), RepositoryError> {
        if self.up.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(RepositoryError::DatabaseError(
                "database unreachable".to_string(),
            ))
        }
    }
}
