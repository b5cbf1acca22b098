//! Typed handler registry and publish path.

use std::any::TypeId;
use std::collections::HashMap;
use std::marker::PhantomData;

use async_trait::async_trait;

use crate::error::EventError;
use crate::event::DomainEvent;

/// Handles one concrete domain event type.
///
/// Handler failures are the handler's own concern: the publisher propagates
/// them with the source intact and adds no wrapping beyond naming the event
/// type. Fan-out to multiple side effects, if needed, belongs inside the
/// handler.
#[async_trait]
pub trait DomainEventHandler<E: DomainEvent>: Send + Sync {
    async fn handle(&self, event: &E) -> anyhow::Result<()>;
}

#[async_trait]
trait ErasedHandler: Send + Sync {
    async fn call(&self, event: &dyn DomainEvent) -> Result<(), EventError>;
}

struct TypedHandler<E, H> {
    inner: H,
    _event: PhantomData<fn(&E)>,
}

#[async_trait]
impl<E, H> ErasedHandler for TypedHandler<E, H>
where
    E: DomainEvent,
    H: DomainEventHandler<E>,
{
    async fn call(&self, event: &dyn DomainEvent) -> Result<(), EventError> {
        // The registry keys on TypeId, so a failed downcast means the
        // registry itself is inconsistent.
        let event = event
            .as_any()
            .downcast_ref::<E>()
            .ok_or_else(|| EventError::PublishFailed {
                event_type: event.event_type().to_string(),
            })?;

        self.inner
            .handle(event)
            .await
            .map_err(|source| EventError::Handler {
                event_type: event.event_type().to_string(),
                source,
            })
    }
}

/// Registry mapping an event's exact runtime type to its single handler.
///
/// Populated once at startup by explicit `register` calls (no container, no
/// reflection). Exactly one handler per event type: re-registering replaces
/// the previous handler.
#[derive(Default)]
pub struct DomainEventPublisher {
    handlers: HashMap<TypeId, Box<dyn ErasedHandler>>,
}

impl DomainEventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<E, H>(&mut self, handler: H)
    where
        E: DomainEvent,
        H: DomainEventHandler<E> + 'static,
    {
        self.handlers.insert(
            TypeId::of::<E>(),
            Box::new(TypedHandler {
                inner: handler,
                _event: PhantomData::<fn(&E)>,
            }),
        );
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Resolve the handler for the event's runtime type and invoke it.
    ///
    /// Fails loudly with [`EventError::PublishFailed`] when nothing is
    /// registered for the type; otherwise awaits the handler and propagates
    /// its own failure unmodified.
    pub async fn publish(&self, event: &dyn DomainEvent) -> Result<(), EventError> {
        let type_id = event.as_any().type_id();
        let handler = self
            .handlers
            .get(&type_id)
            .ok_or_else(|| EventError::PublishFailed {
                event_type: event.event_type().to_string(),
            })?;

        tracing::debug!(
            event_type = event.event_type(),
            event_id = %event.event_id(),
            "publishing domain event"
        );

        handler.call(event).await
    }
}

impl core::fmt::Debug for DomainEventPublisher {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomainEventPublisher")
            .field("registered", &self.handlers.len())
            .finish()
    }
}
