//! Cross-cutting decorators for domain-event handlers.
//!
//! Decorators are composed explicitly in wiring code, e.g.
//! `LoggingEventHandler::new("name", UnitOfWorkEventHandler::new(core, uow))`.

use async_trait::async_trait;

use crate::event::DomainEvent;
use crate::publisher::DomainEventHandler;
use crate::uow::UnitOfWork;

/// Logs entry/success/failure around a domain-event handler.
///
/// Failures are logged and **swallowed**: once a cycle is in flight, one
/// handler's failure must not abort dispatch of sibling events.
pub struct LoggingEventHandler<H> {
    name: &'static str,
    inner: H,
}

impl<H> LoggingEventHandler<H> {
    pub fn new(name: &'static str, inner: H) -> Self {
        Self { name, inner }
    }
}

#[async_trait]
impl<E, H> DomainEventHandler<E> for LoggingEventHandler<H>
where
    E: DomainEvent,
    H: DomainEventHandler<E>,
{
    async fn handle(&self, event: &E) -> anyhow::Result<()> {
        tracing::debug!(
            handler = self.name,
            event_type = event.event_type(),
            event_id = %event.event_id(),
            "handling domain event"
        );

        match self.inner.handle(event).await {
            Ok(()) => {
                tracing::debug!(handler = self.name, "domain event handled");
                Ok(())
            }
            Err(error) => {
                tracing::error!(
                    handler = self.name,
                    event_type = event.event_type(),
                    error = %error,
                    "domain event handler failed"
                );
                Ok(())
            }
        }
    }
}

/// Persists the unit of work after the wrapped handler completes.
///
/// Commits storage side effects caused by handling. If the handler fails,
/// the unit of work is not saved and the failure propagates unchanged.
pub struct UnitOfWorkEventHandler<H, U> {
    inner: H,
    uow: U,
}

impl<H, U> UnitOfWorkEventHandler<H, U> {
    pub fn new(inner: H, uow: U) -> Self {
        Self { inner, uow }
    }
}

#[async_trait]
impl<E, H, U> DomainEventHandler<E> for UnitOfWorkEventHandler<H, U>
where
    E: DomainEvent,
    H: DomainEventHandler<E>,
    U: UnitOfWork,
{
    async fn handle(&self, event: &E) -> anyhow::Result<()> {
        self.inner.handle(event).await?;
        self.uow.save().await?;
        Ok(())
    }
}
