//! Logging decorators for command and query handlers.

use async_trait::async_trait;

use crate::error::AppResult;
use crate::handler::{CommandHandler, QueryHandler};

/// Logs entry/success/failure around a command handler.
///
/// Failures are logged and returned to the caller as the typed
/// [`AppError`](crate::AppError). Unlike the domain-event logging
/// decorator, nothing is swallowed here: the caller owns the outcome of its
/// own command.
pub struct LoggingCommandHandler<H> {
    name: &'static str,
    inner: H,
}

impl<H> LoggingCommandHandler<H> {
    pub fn new(name: &'static str, inner: H) -> Self {
        Self { name, inner }
    }
}

#[async_trait]
impl<H> CommandHandler for LoggingCommandHandler<H>
where
    H: CommandHandler,
{
    type Command = H::Command;
    type Output = H::Output;

    async fn handle(&self, command: Self::Command) -> AppResult<Self::Output> {
        tracing::info!(handler = self.name, "executing command");
        match self.inner.handle(command).await {
            Ok(output) => {
                tracing::info!(handler = self.name, "command executed");
                Ok(output)
            }
            Err(error) => {
                tracing::error!(handler = self.name, error = %error, "command failed");
                Err(error)
            }
        }
    }
}

/// Logs entry/success/failure around a query handler.
pub struct LoggingQueryHandler<H> {
    name: &'static str,
    inner: H,
}

impl<H> LoggingQueryHandler<H> {
    pub fn new(name: &'static str, inner: H) -> Self {
        Self { name, inner }
    }
}

#[async_trait]
impl<H> QueryHandler for LoggingQueryHandler<H>
where
    H: QueryHandler,
{
    type Query = H::Query;
    type Output = H::Output;

    async fn handle(&self, query: Self::Query) -> AppResult<Self::Output> {
        tracing::debug!(handler = self.name, "executing query");
        match self.inner.handle(query).await {
            Ok(output) => {
                tracing::debug!(handler = self.name, "query executed");
                Ok(output)
            }
            Err(error) => {
                tracing::error!(handler = self.name, error = %error, "query failed");
                Err(error)
            }
        }
    }
}
