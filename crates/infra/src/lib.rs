//! Infrastructure layer: in-memory persistence adapters.
//!
//! Backs the application ports with in-memory stores intended for tests and
//! development. A relational backend would implement the same ports; nothing
//! in the pipeline depends on this crate's concrete types.

pub mod audit;
pub mod repository;
pub mod unit_of_work;

pub use audit::InMemoryAuditLog;
pub use repository::{
    InMemoryCategoryRepository, InMemoryCreatorRepository, InMemoryProductRepository,
};
pub use unit_of_work::InMemoryUnitOfWork;
