//! Event pipeline error taxonomy.

use thiserror::Error;

/// Failure raised by the buffer/accessor/publisher layers.
///
/// The dispatcher is the single place that wraps these at cycle granularity
/// (see [`DispatchFailedError`](crate::dispatcher::DispatchFailedError)).
#[derive(Debug, Error)]
pub enum EventError {
    /// A harvested entry no longer resolves to a live event. The buffer that
    /// owned it was cleared or dropped mid-cycle, which indicates a producer
    /// bug; not retryable without investigation.
    #[error("uncommitted event list contains a dead entry at index {index}")]
    EmptyEvent { index: usize },

    /// No handler is registered for the event's exact runtime type.
    #[error("no handler registered for domain event '{event_type}'")]
    PublishFailed { event_type: String },

    /// The handler's own failure, propagated with its source intact.
    #[error("handler for domain event '{event_type}' failed")]
    Handler {
        event_type: String,
        #[source]
        source: anyhow::Error,
    },

    /// An entity buffer or registry lock was poisoned.
    #[error("internal lock poisoned")]
    Poisoned,
}
