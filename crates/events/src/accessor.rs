//! Harvest, dispatch, and clear of uncommitted events.

use std::sync::{Arc, Weak};

use chrono::{DateTime, Utc};

use crate::error::EventError;
use crate::event::DomainEvent;
use crate::publisher::DomainEventPublisher;
use crate::uow::UnitOfWork;

/// One harvested entry of the uncommitted-event set.
///
/// Holds the occurred-at timestamp (captured once at harvest, so ordering is
/// never re-derived mid-dispatch) and a weak handle to the buffered event;
/// the owning buffer keeps the only strong reference. An entry that no longer
/// upgrades means the producer cleared or dropped the buffer mid-cycle,
/// which dispatch treats as a hard [`EventError::EmptyEvent`].
#[derive(Debug, Clone)]
pub struct PendingEvent {
    occurred_at: DateTime<Utc>,
    event: Weak<dyn DomainEvent>,
}

impl PendingEvent {
    pub fn new(event: &Arc<dyn DomainEvent>) -> Self {
        Self {
            occurred_at: event.occurred_at(),
            event: Arc::downgrade(event),
        }
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    pub fn upgrade(&self) -> Option<Arc<dyn DomainEvent>> {
        self.event.upgrade()
    }
}

/// Reads pending events out of the unit of work's tracked-entity set,
/// dispatches them through the publisher, and clears the buffers afterwards.
#[derive(Debug)]
pub struct DomainEventAccessor<U> {
    uow: U,
    publisher: Arc<DomainEventPublisher>,
}

impl<U> DomainEventAccessor<U>
where
    U: UnitOfWork,
{
    pub fn new(uow: U, publisher: Arc<DomainEventPublisher>) -> Self {
        Self { uow, publisher }
    }

    /// Harvest all uncommitted events across tracked entities, merged and
    /// sorted by occurred-at ascending.
    ///
    /// Returns `Ok(None)` when no tracked entity has pending events: a
    /// valid, common terminal state, not an error. The sort is stable, so
    /// events with equal timestamps keep their harvest order.
    pub fn uncommitted_events(&self) -> Result<Option<Vec<PendingEvent>>, EventError> {
        let mut pending = Vec::new();
        for entity in self.uow.tracked_entities() {
            for event in entity.pending_events()? {
                pending.push(PendingEvent::new(&event));
            }
        }

        if pending.is_empty() {
            return Ok(None);
        }

        pending.sort_by_key(PendingEvent::occurred_at);
        Ok(Some(pending))
    }

    /// Publish each harvested event, in order.
    ///
    /// A dead entry aborts the remaining dispatch for this call. The cycle
    /// reports success only once every handler has completed.
    pub async fn dispatch_events(&self, events: &[PendingEvent]) -> Result<(), EventError> {
        for (index, entry) in events.iter().enumerate() {
            let event = entry
                .upgrade()
                .ok_or(EventError::EmptyEvent { index })?;
            self.publisher.publish(event.as_ref()).await?;
        }
        Ok(())
    }

    /// Re-scan tracked entities and clear every non-empty buffer.
    ///
    /// No-op when none are found.
    pub fn clear_all_domain_events(&self) -> Result<(), EventError> {
        for entity in self.uow.tracked_entities() {
            if entity.has_pending_events()? {
                entity.clear_pending_events()?;
            }
        }
        Ok(())
    }
}
