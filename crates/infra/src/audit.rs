//! In-memory audit trail.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use catalog_app::AppResult;
use catalog_app::ports::{AuditEntry, AuditLog};

/// Append-only audit log held in memory.
#[derive(Default)]
pub struct InMemoryAuditLog {
    entries: Mutex<Vec<AuditEntry>>,
}

impl InMemoryAuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded entries, in insertion order.
    pub fn entries(&self) -> Vec<AuditEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl AuditLog for InMemoryAuditLog {
    async fn record(&self, entry: AuditEntry) -> AppResult<()> {
        tracing::debug!(
            event_type = %entry.event_type,
            summary = %entry.summary,
            "audit entry recorded"
        );
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry);
        Ok(())
    }
}
