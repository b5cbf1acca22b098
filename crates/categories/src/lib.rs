//! Category module of the product catalog.

pub mod category;

pub use category::{Category, CategoryCreated, CategoryRenamed};
