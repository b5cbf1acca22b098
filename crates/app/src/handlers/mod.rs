//! Domain-event side-effect handlers.
//!
//! Each handler reacts to exactly one concrete event type; the wiring module
//! registers them (wrapped in decorators) with the publisher.

pub mod audit_trail;
pub mod product_created;

pub use audit_trail::{AuditTrailHandler, Auditable};
pub use product_created::ProductCreatedHandler;
