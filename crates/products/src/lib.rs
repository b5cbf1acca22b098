//! Product module of the product catalog.

pub mod product;

pub use product::{
    Money, Product, ProductArchived, ProductCreated, ProductPriceChanged, ProductStatus,
};
