//! `catalog-events`: domain-event capture and dispatch pipeline.
//!
//! Entities buffer domain events while a use case mutates them; within the
//! same unit of work, the dispatcher harvests those events in chronological
//! order, publishes each one to its registered handler, and clears the
//! buffers once every handler has completed. Failures leave the buffers
//! untouched so a retried unit of work re-harvests the same events.

pub mod accessor;
pub mod buffer;
pub mod decorator;
pub mod dispatcher;
pub mod error;
pub mod event;
pub mod publisher;
pub mod uow;

pub use accessor::{DomainEventAccessor, PendingEvent};
pub use buffer::{DomainEventBuffer, EventSourcingEntity, PendingEventSource};
pub use decorator::{LoggingEventHandler, UnitOfWorkEventHandler};
pub use dispatcher::{DispatchFailedError, DomainEventsDispatcher};
pub use error::EventError;
pub use event::{DomainEvent, EventMeta};
pub use publisher::{DomainEventHandler, DomainEventPublisher};
pub use uow::{UnitOfWork, UnitOfWorkError};

// Re-exported so `impl_domain_event!` expansions resolve without the caller
// naming catalog-core directly.
pub use catalog_core::EventId;
