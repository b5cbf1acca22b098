//! Unit-of-work decorator for command handlers.

use async_trait::async_trait;

use catalog_events::{DomainEventsDispatcher, UnitOfWork};

use crate::error::AppResult;
use crate::handler::CommandHandler;

/// Completes a command's unit of work after the wrapped handler runs:
/// dispatches the domain events the handler's aggregates buffered, then
/// persists the unit of work.
///
/// If the handler fails, neither dispatch nor save happens and the failure
/// propagates unchanged. If dispatch fails, the buffers stay intact and the
/// unit of work is not saved, so retrying the command re-runs a clean cycle.
pub struct UnitOfWorkCommandHandler<H, U> {
    inner: H,
    dispatcher: DomainEventsDispatcher<U>,
    uow: U,
}

impl<H, U> UnitOfWorkCommandHandler<H, U> {
    pub fn new(inner: H, dispatcher: DomainEventsDispatcher<U>, uow: U) -> Self {
        Self {
            inner,
            dispatcher,
            uow,
        }
    }
}

#[async_trait]
impl<H, U> CommandHandler for UnitOfWorkCommandHandler<H, U>
where
    H: CommandHandler,
    U: UnitOfWork,
{
    type Command = H::Command;
    type Output = H::Output;

    async fn handle(&self, command: Self::Command) -> AppResult<Self::Output> {
        let output = self.inner.handle(command).await?;
        self.dispatcher.dispatch().await?;
        self.uow.save().await?;
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use catalog_events::{
        DomainEventAccessor, DomainEventPublisher, PendingEventSource, UnitOfWorkError,
    };

    use super::*;
    use crate::error::AppError;

    #[derive(Default)]
    struct SaveCountingUow {
        saves: AtomicUsize,
    }

    #[async_trait]
    impl UnitOfWork for SaveCountingUow {
        fn tracked_entities(&self) -> Vec<Arc<dyn PendingEventSource>> {
            Vec::new()
        }

        async fn save(&self) -> Result<(), UnitOfWorkError> {
            self.saves.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct Ok0;

    #[async_trait]
    impl CommandHandler for Ok0 {
        type Command = ();
        type Output = ();

        async fn handle(&self, _command: ()) -> AppResult<()> {
            Ok(())
        }
    }

    struct Failing;

    #[async_trait]
    impl CommandHandler for Failing {
        type Command = ();
        type Output = ();

        async fn handle(&self, _command: ()) -> AppResult<()> {
            Err(AppError::NotFound)
        }
    }

    fn decorated<H: CommandHandler>(
        inner: H,
        uow: Arc<SaveCountingUow>,
    ) -> UnitOfWorkCommandHandler<H, Arc<SaveCountingUow>> {
        let dispatcher = DomainEventsDispatcher::new(DomainEventAccessor::new(
            uow.clone(),
            Arc::new(DomainEventPublisher::new()),
        ));
        UnitOfWorkCommandHandler::new(inner, dispatcher, uow)
    }

    #[tokio::test]
    async fn saves_after_a_successful_handler() {
        let uow = Arc::new(SaveCountingUow::default());
        let handler = decorated(Ok0, uow.clone());

        handler.handle(()).await.unwrap();
        assert_eq!(uow.saves.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn never_saves_when_the_handler_fails() {
        let uow = Arc::new(SaveCountingUow::default());
        let handler = decorated(Failing, uow.clone());

        let err = handler.handle(()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound));
        assert_eq!(uow.saves.load(Ordering::SeqCst), 0);
    }
}
