//! Unit-of-work boundary the event pipeline depends on.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::buffer::PendingEventSource;

#[derive(Debug, Error)]
pub enum UnitOfWorkError {
    /// Persisting the unit of work's changes failed.
    #[error("commit failed: {0}")]
    Commit(String),

    /// Internal registry lock poisoned.
    #[error("internal lock poisoned")]
    Poisoned,
}

/// Transactional scope across which tracked entities (and their buffered
/// events) are visible and eventually persisted.
///
/// The pipeline only needs two things from a persistence backend: an
/// enumeration of the tracked entities, and a save operation. Callers must
/// dispatch within the same unit of work that produced the events and must
/// not run two dispatch cycles concurrently against one unit of work (no
/// internal locking serializes cycles).
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Entities currently tracked by this unit of work.
    fn tracked_entities(&self) -> Vec<Arc<dyn PendingEventSource>>;

    /// Persist all changes accumulated in this unit of work.
    async fn save(&self) -> Result<(), UnitOfWorkError>;
}

#[async_trait]
impl<U> UnitOfWork for Arc<U>
where
    U: UnitOfWork + ?Sized,
{
    fn tracked_entities(&self) -> Vec<Arc<dyn PendingEventSource>> {
        (**self).tracked_entities()
    }

    async fn save(&self) -> Result<(), UnitOfWorkError> {
        (**self).save().await
    }
}
