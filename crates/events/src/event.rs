//! Domain event contract.

use core::any::Any;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use catalog_core::EventId;

/// An immutable record of a fact that happened to an aggregate.
///
/// Events are:
/// - **immutable** (identity and timestamp are fixed at construction)
/// - **transient** (dispatched within the producing unit of work, then
///   discarded; the persisted artifact is the aggregate's own state)
/// - resolved to handlers by their **exact runtime type**, which is why the
///   trait exposes [`DomainEvent::as_any`].
pub trait DomainEvent: core::fmt::Debug + Send + Sync + 'static {
    /// Unique identity of this occurrence, generated at construction.
    fn event_id(&self) -> EventId;

    /// When the event occurred (assigned at construction).
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Stable event name (e.g. "catalog.product.created").
    fn event_type(&self) -> &'static str;

    /// Upcast for typed handler resolution.
    fn as_any(&self) -> &dyn Any;
}

/// Identity + timestamp shared by every concrete event.
///
/// Embed as a `meta` field and implement [`DomainEvent`] with
/// [`impl_domain_event!`](crate::impl_domain_event).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMeta {
    event_id: EventId,
    occurred_at: DateTime<Utc>,
}

impl EventMeta {
    /// Stamp a new occurrence: fresh UUIDv7 identity, wall-clock timestamp.
    pub fn new() -> Self {
        Self {
            event_id: EventId::new(),
            occurred_at: Utc::now(),
        }
    }

    /// Stamp an occurrence at an explicit instant.
    ///
    /// Intended for tests that need deterministic cross-entity ordering.
    pub fn at(occurred_at: DateTime<Utc>) -> Self {
        Self {
            event_id: EventId::new(),
            occurred_at,
        }
    }

    pub fn event_id(&self) -> EventId {
        self.event_id
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

impl Default for EventMeta {
    fn default() -> Self {
        Self::new()
    }
}

/// Implement [`DomainEvent`] for a struct with an `EventMeta` field named `meta`.
#[macro_export]
macro_rules! impl_domain_event {
    ($t:ty, $name:literal) => {
        impl $crate::DomainEvent for $t {
            fn event_id(&self) -> $crate::EventId {
                self.meta.event_id()
            }

            fn occurred_at(&self) -> ::chrono::DateTime<::chrono::Utc> {
                self.meta.occurred_at()
            }

            fn event_type(&self) -> &'static str {
                $name
            }

            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }
        }
    };
}
