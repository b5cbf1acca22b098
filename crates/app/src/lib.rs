//! `catalog-app`: CQRS application layer.
//!
//! Command handlers load aggregates through repository ports, invoke their
//! state-changing methods (which buffer domain events), and rely on the
//! unit-of-work decorator to dispatch those events and persist the unit of
//! work. Query handlers read through the same ports and project into DTOs.
//! Decorator chains are composed explicitly in code; `wiring` populates the
//! publisher registry at startup.

pub mod commands;
pub mod decorator;
pub mod error;
pub mod handler;
pub mod handlers;
pub mod ports;
pub mod queries;
pub mod wiring;

pub use error::{AppError, AppResult};
pub use handler::{CommandHandler, QueryHandler};
