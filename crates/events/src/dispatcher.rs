//! Dispatch-cycle orchestration.

use thiserror::Error;

use crate::accessor::DomainEventAccessor;
use crate::error::EventError;
use crate::uow::UnitOfWork;

/// A dispatch cycle failed during fetch, dispatch, or clear.
///
/// Always carries the original cause. The entity buffers are deliberately
/// not cleared on failure, so retrying the same unit of work re-harvests the
/// same events.
#[derive(Debug, Error)]
#[error("domain event dispatch failed: {source}")]
pub struct DispatchFailedError {
    #[from]
    pub source: EventError,
}

/// Orchestrates one dispatch cycle: fetch → (no-op if empty) → dispatch all
/// → clear.
///
/// Clearing runs only after every handler completed; any failure along the
/// way is wrapped once, logged once, and propagated. Idle is both the
/// initial and the normal terminal state of a cycle; the caller decides
/// whether a failed cycle's unit of work is retried.
#[derive(Debug)]
pub struct DomainEventsDispatcher<U> {
    accessor: DomainEventAccessor<U>,
}

impl<U> DomainEventsDispatcher<U>
where
    U: UnitOfWork,
{
    pub fn new(accessor: DomainEventAccessor<U>) -> Self {
        Self { accessor }
    }

    pub fn accessor(&self) -> &DomainEventAccessor<U> {
        &self.accessor
    }

    /// Run one dispatch cycle to completion or failure.
    pub async fn dispatch(&self) -> Result<(), DispatchFailedError> {
        match self.cycle().await {
            Ok(()) => Ok(()),
            Err(source) => {
                let error = DispatchFailedError::from(source);
                tracing::error!(error = %error, "domain event dispatch failed");
                Err(error)
            }
        }
    }

    async fn cycle(&self) -> Result<(), EventError> {
        let Some(pending) = self.accessor.uncommitted_events()? else {
            // Deliberate short-circuit, not an error.
            tracing::debug!("no uncommitted domain events, nothing to dispatch");
            return Ok(());
        };

        tracing::debug!(count = pending.len(), "dispatching domain events");
        self.accessor.dispatch_events(&pending).await?;
        self.accessor.clear_all_domain_events()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex, RwLock};

    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::buffer::{DomainEventBuffer, EventSourcingEntity, PendingEventSource};
    use crate::event::{DomainEvent, EventMeta};
    use crate::impl_domain_event;
    use crate::publisher::{DomainEventHandler, DomainEventPublisher};
    use crate::uow::UnitOfWorkError;

    #[derive(Debug)]
    struct Created {
        meta: EventMeta,
    }

    impl_domain_event!(Created, "test.created");

    #[derive(Debug)]
    struct Renamed {
        meta: EventMeta,
    }

    impl_domain_event!(Renamed, "test.renamed");

    #[derive(Debug, Default)]
    struct Tracked {
        events: DomainEventBuffer,
    }

    impl EventSourcingEntity for Tracked {
        fn add_domain_event(&mut self, event: Arc<dyn DomainEvent>) {
            self.events.push(event);
        }

        fn domain_events(&self) -> &[Arc<dyn DomainEvent>] {
            self.events.events()
        }

        fn clear_domain_events(&mut self) {
            self.events.clear();
        }
    }

    /// Unit of work double that counts how often the tracked set is read.
    #[derive(Default)]
    struct CountingUow {
        entities: Vec<Arc<dyn PendingEventSource>>,
        scans: AtomicUsize,
    }

    #[async_trait]
    impl UnitOfWork for CountingUow {
        fn tracked_entities(&self) -> Vec<Arc<dyn PendingEventSource>> {
            self.scans.fetch_add(1, Ordering::SeqCst);
            self.entities.clone()
        }

        async fn save(&self) -> Result<(), UnitOfWorkError> {
            Ok(())
        }
    }

    struct RecordingHandler {
        log: Arc<Mutex<Vec<&'static str>>>,
        label: &'static str,
    }

    #[async_trait]
    impl DomainEventHandler<Created> for RecordingHandler {
        async fn handle(&self, _event: &Created) -> anyhow::Result<()> {
            self.log.lock().unwrap().push(self.label);
            Ok(())
        }
    }

    struct RecordingRenamedHandler {
        log: Arc<Mutex<Vec<&'static str>>>,
    }

    #[async_trait]
    impl DomainEventHandler<Renamed> for RecordingRenamedHandler {
        async fn handle(&self, _event: &Renamed) -> anyhow::Result<()> {
            self.log.lock().unwrap().push("renamed");
            Ok(())
        }
    }

    fn entity_with(events: Vec<Arc<dyn DomainEvent>>) -> Arc<RwLock<Tracked>> {
        let mut tracked = Tracked::default();
        for event in events {
            tracked.add_domain_event(event);
        }
        Arc::new(RwLock::new(tracked))
    }

    fn at(secs: i64) -> EventMeta {
        EventMeta::at(Utc.timestamp_opt(secs, 0).unwrap())
    }

    #[tokio::test]
    async fn cross_entity_events_dispatch_in_timestamp_order_and_buffers_clear() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut publisher = DomainEventPublisher::new();
        publisher.register::<Created, _>(RecordingHandler {
            log: log.clone(),
            label: "created",
        });
        publisher.register::<Renamed, _>(RecordingRenamedHandler { log: log.clone() });

        let x = entity_with(vec![Arc::new(Created { meta: at(1) })]);
        let y = entity_with(vec![Arc::new(Renamed { meta: at(2) })]);
        let uow = Arc::new(CountingUow {
            entities: vec![x.clone() as _, y.clone() as _],
            scans: AtomicUsize::new(0),
        });

        let dispatcher =
            DomainEventsDispatcher::new(DomainEventAccessor::new(uow, Arc::new(publisher)));
        dispatcher.dispatch().await.unwrap();

        assert_eq!(*log.lock().unwrap(), vec!["created", "renamed"]);
        assert!(x.read().unwrap().domain_events().is_empty());
        assert!(y.read().unwrap().domain_events().is_empty());
    }

    #[tokio::test]
    async fn empty_unit_of_work_short_circuits_after_one_fetch() {
        let uow = Arc::new(CountingUow {
            entities: vec![entity_with(vec![]) as _],
            scans: AtomicUsize::new(0),
        });

        let dispatcher = DomainEventsDispatcher::new(DomainEventAccessor::new(
            uow.clone(),
            Arc::new(DomainEventPublisher::new()),
        ));
        dispatcher.dispatch().await.unwrap();

        // One scan for the fetch; dispatch and clear never re-scan.
        assert_eq!(uow.scans.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failed_dispatch_leaves_buffers_intact() {
        // No handler registered for Created: publish fails, clear must not run.
        let x = entity_with(vec![Arc::new(Created { meta: at(1) })]);
        let uow = Arc::new(CountingUow {
            entities: vec![x.clone() as _],
            scans: AtomicUsize::new(0),
        });

        let dispatcher = DomainEventsDispatcher::new(DomainEventAccessor::new(
            uow,
            Arc::new(DomainEventPublisher::new()),
        ));
        let err = dispatcher.dispatch().await.unwrap_err();
        assert!(matches!(err.source, EventError::PublishFailed { .. }));
        assert_eq!(x.read().unwrap().domain_events().len(), 1);
    }

    #[tokio::test]
    async fn dead_harvest_entry_surfaces_as_dispatch_failure_with_cause() {
        let accessor = DomainEventAccessor::new(
            Arc::new(CountingUow::default()),
            Arc::new(DomainEventPublisher::new()),
        );

        let gone: Arc<dyn DomainEvent> = Arc::new(Created { meta: at(1) });
        let entry = crate::accessor::PendingEvent::new(&gone);
        drop(gone);

        let err = accessor.dispatch_events(&[entry]).await.unwrap_err();
        let err = DispatchFailedError::from(err);
        assert!(matches!(err.source, EventError::EmptyEvent { index: 0 }));
    }
}
