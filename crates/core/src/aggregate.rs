//! Aggregate root marker for state-stored domain models.

use crate::entity::Entity;

/// Aggregate root marker.
///
/// Aggregates in this catalog are **state-stored**: a state-changing method
/// validates its invariants, mutates the aggregate's own fields, and buffers
/// a domain event describing the accepted change. The persisted artifact is
/// the aggregate's state; the events are transient and exist only to drive
/// post-commit side effects.
///
/// This is intentionally a marker so catalog modules can decide how they
/// model state transitions without bringing in infrastructure concerns.
pub trait AggregateRoot: Entity {}
