//! Cross-cutting decorators for command/query handlers.
//!
//! Chains are built by explicit composition, e.g.
//! `LoggingCommandHandler::new("create-product",
//! UnitOfWorkCommandHandler::new(core, dispatcher, uow))`.

pub mod logging;
pub mod unit_of_work;

pub use logging::{LoggingCommandHandler, LoggingQueryHandler};
pub use unit_of_work::UnitOfWorkCommandHandler;
