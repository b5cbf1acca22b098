//! In-memory unit of work.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;

use catalog_events::{PendingEventSource, UnitOfWork, UnitOfWorkError};

/// Unit of work tracking aggregate handles in memory.
///
/// Repositories call [`track`](Self::track) for every handle they hand out,
/// making the aggregate's buffered events visible to the dispatch pipeline.
/// `save` has no storage to flush; it counts commits so tests can assert on
/// commit ordering.
#[derive(Default)]
pub struct InMemoryUnitOfWork {
    tracked: Mutex<Vec<Arc<dyn PendingEventSource>>>,
    commits: AtomicU64,
}

impl InMemoryUnitOfWork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity with this unit of work.
    pub fn track(&self, source: Arc<dyn PendingEventSource>) {
        self.tracked
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(source);
    }

    /// Number of completed `save` calls.
    pub fn commits(&self) -> u64 {
        self.commits.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UnitOfWork for InMemoryUnitOfWork {
    fn tracked_entities(&self) -> Vec<Arc<dyn PendingEventSource>> {
        // The tracked set is a Vec of Arcs, valid even if a previous holder
        // panicked, so poisoning is recoverable here.
        self.tracked
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    async fn save(&self) -> Result<(), UnitOfWorkError> {
        let commit = self.commits.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(commit, "unit of work saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::RwLock;

    use catalog_core::CategoryId;
    use catalog_categories::Category;

    use super::*;

    #[tokio::test]
    async fn tracked_entities_surface_pending_events() {
        let uow = InMemoryUnitOfWork::new();
        let category = Arc::new(RwLock::new(
            Category::create(CategoryId::new(), "Ceramics").unwrap(),
        ));
        uow.track(category);

        let tracked = uow.tracked_entities();
        assert_eq!(tracked.len(), 1);
        assert!(tracked[0].has_pending_events().unwrap());

        uow.save().await.unwrap();
        uow.save().await.unwrap();
        assert_eq!(uow.commits(), 2);
    }
}
