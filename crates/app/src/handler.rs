//! Command/query handler abstractions.

use async_trait::async_trait;

use crate::error::AppResult;

/// Handles one command type (write side).
///
/// A command represents **intent**; the handler validates it against the
/// current aggregate state, mutates the aggregate (which buffers domain
/// events), and returns a typed result. Persistence and event dispatch are
/// layered on via [`decorator`](crate::decorator), not performed here.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    type Command: Send + 'static;
    type Output: Send;

    async fn handle(&self, command: Self::Command) -> AppResult<Self::Output>;
}

/// Handles one query type (read side).
///
/// Queries never mutate aggregates or buffer events; they project current
/// state into DTOs.
#[async_trait]
pub trait QueryHandler: Send + Sync {
    type Query: Send + 'static;
    type Output: Send;

    async fn handle(&self, query: Self::Query) -> AppResult<Self::Output>;
}
