//! Read-side projections.

use serde::Serialize;

use catalog_core::{CategoryId, CreatorId, Entity, ProductId};
use catalog_products::{Product, ProductStatus};

/// Flat view of a product for the read side.
#[derive(Debug, Clone, Serialize)]
pub struct ProductDto {
    pub id: ProductId,
    pub creator_id: CreatorId,
    pub category_id: CategoryId,
    pub name: String,
    pub price_cents: u64,
    pub currency: String,
    pub status: ProductStatus,
    pub can_be_sold: bool,
}

impl From<&Product> for ProductDto {
    fn from(product: &Product) -> Self {
        Self {
            id: *product.id(),
            creator_id: product.creator_id(),
            category_id: product.category_id(),
            name: product.name().to_string(),
            price_cents: product.price().amount_cents(),
            currency: product.price().currency().to_string(),
            status: product.status(),
            can_be_sold: product.can_be_sold(),
        }
    }
}
