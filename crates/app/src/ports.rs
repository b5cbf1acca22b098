//! Ports to the persistence layer.
//!
//! Repositories hand out shared, tracked aggregate handles: adding an
//! aggregate registers it with the active unit of work so that its buffered
//! events are visible to the dispatch pipeline.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use catalog_categories::Category;
use catalog_core::{CategoryId, CreatorId, ProductId};
use catalog_creators::Creator;
use catalog_events::DomainEvent;
use catalog_products::Product;

use crate::error::{AppError, AppResult};

/// A tracked aggregate handle shared between the application layer and the
/// unit of work.
pub type Tracked<T> = Arc<RwLock<T>>;

/// Read a tracked aggregate, mapping lock poisoning to an application error.
pub fn read<T>(entity: &Tracked<T>) -> AppResult<RwLockReadGuard<'_, T>> {
    entity
        .read()
        .map_err(|_| AppError::internal("entity lock poisoned"))
}

/// Write a tracked aggregate, mapping lock poisoning to an application error.
pub fn write<T>(entity: &Tracked<T>) -> AppResult<RwLockWriteGuard<'_, T>> {
    entity
        .write()
        .map_err(|_| AppError::internal("entity lock poisoned"))
}

#[async_trait]
pub trait CreatorRepository: Send + Sync {
    async fn add(&self, creator: Creator) -> AppResult<Tracked<Creator>>;

    /// Fails with [`AppError::NotFound`] when the creator does not exist.
    async fn of_id(&self, id: CreatorId) -> AppResult<Tracked<Creator>>;
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn add(&self, category: Category) -> AppResult<Tracked<Category>>;

    async fn of_id(&self, id: CategoryId) -> AppResult<Tracked<Category>>;
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn add(&self, product: Product) -> AppResult<Tracked<Product>>;

    async fn of_id(&self, id: ProductId) -> AppResult<Tracked<Product>>;

    async fn all(&self) -> AppResult<Vec<Tracked<Product>>>;
}

/// One recorded side effect of a dispatched domain event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    pub event_type: String,
    pub summary: String,
    pub occurred_at: DateTime<Utc>,
}

impl AuditEntry {
    pub fn for_event(event: &dyn DomainEvent, summary: impl Into<String>) -> Self {
        Self {
            event_type: event.event_type().to_string(),
            summary: summary.into(),
            occurred_at: event.occurred_at(),
        }
    }
}

/// Append-only audit trail fed by domain-event handlers.
#[async_trait]
pub trait AuditLog: Send + Sync {
    async fn record(&self, entry: AuditEntry) -> AppResult<()>;
}
