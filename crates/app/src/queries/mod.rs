//! Read-side use cases.

pub mod dto;
pub mod get_product;
pub mod list_products;

pub use dto::ProductDto;
pub use get_product::{GetProduct, GetProductHandler};
pub use list_products::{ListProducts, ListProductsHandler};
