//! Creator module of the product catalog.

pub mod creator;

pub use creator::{Creator, CreatorRegistered, CreatorRenamed, Email};
