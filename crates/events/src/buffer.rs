//! Entity-side event buffer and the capabilities built on top of it.

use std::sync::{Arc, RwLock};

use crate::error::EventError;
use crate::event::DomainEvent;

/// Ordered buffer of domain events owned by a single entity.
///
/// Append-only during a unit of work; insertion order is occurrence order
/// within the owning entity. The backing `Vec` allocates lazily on first
/// append, so an entity that never emits pays nothing.
#[derive(Debug, Default)]
pub struct DomainEventBuffer {
    events: Vec<Arc<dyn DomainEvent>>,
}

impl DomainEventBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event. Never rejects a well-formed event.
    pub fn push(&mut self, event: Arc<dyn DomainEvent>) {
        self.events.push(event);
    }

    /// Read-only view of the buffered events, in occurrence order.
    pub fn events(&self) -> &[Arc<dyn DomainEvent>] {
        &self.events
    }

    /// Empty the buffer. Idempotent.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Capability of an entity that buffers domain events during its own state
/// transitions.
///
/// Only the entity itself calls `add_domain_event`, from within its own
/// state-mutating methods; the dispatch pipeline uses the read/clear side of
/// the contract and never holds a duplicate mutable copy of the buffer.
pub trait EventSourcingEntity {
    fn add_domain_event(&mut self, event: Arc<dyn DomainEvent>);

    fn domain_events(&self) -> &[Arc<dyn DomainEvent>];

    fn clear_domain_events(&mut self);

    fn has_pending_events(&self) -> bool {
        !self.domain_events().is_empty()
    }
}

/// Object-safe view of a tracked entity's pending events.
///
/// The unit of work hands entities to the accessor as `Arc<dyn
/// PendingEventSource>`; the blanket impl below lets any shared
/// `RwLock`-wrapped aggregate satisfy it without per-type glue.
pub trait PendingEventSource: Send + Sync {
    /// Snapshot of the entity's buffered events, in occurrence order.
    fn pending_events(&self) -> Result<Vec<Arc<dyn DomainEvent>>, EventError>;

    fn clear_pending_events(&self) -> Result<(), EventError>;

    fn has_pending_events(&self) -> Result<bool, EventError> {
        Ok(!self.pending_events()?.is_empty())
    }
}

impl<T> PendingEventSource for RwLock<T>
where
    T: EventSourcingEntity + Send + Sync,
{
    fn pending_events(&self) -> Result<Vec<Arc<dyn DomainEvent>>, EventError> {
        let entity = self.read().map_err(|_| EventError::Poisoned)?;
        Ok(entity.domain_events().to_vec())
    }

    fn clear_pending_events(&self) -> Result<(), EventError> {
        let mut entity = self.write().map_err(|_| EventError::Poisoned)?;
        entity.clear_domain_events();
        Ok(())
    }
}
