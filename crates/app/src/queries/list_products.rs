use std::sync::Arc;

use async_trait::async_trait;

use catalog_core::CategoryId;

use crate::error::AppResult;
use crate::handler::QueryHandler;
use crate::ports::{self, ProductRepository};
use crate::queries::dto::ProductDto;

/// Query: ListProducts, optionally narrowed to one category.
#[derive(Debug, Clone, Default)]
pub struct ListProducts {
    pub category_id: Option<CategoryId>,
}

pub struct ListProductsHandler {
    products: Arc<dyn ProductRepository>,
}

impl ListProductsHandler {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl QueryHandler for ListProductsHandler {
    type Query = ListProducts;
    type Output = Vec<ProductDto>;

    async fn handle(&self, query: ListProducts) -> AppResult<Vec<ProductDto>> {
        let mut dtos = Vec::new();
        for product in self.products.all().await? {
            let guard = ports::read(&product)?;
            if query
                .category_id
                .is_none_or(|category| guard.category_id() == category)
            {
                dtos.push(ProductDto::from(&*guard));
            }
        }
        // Stable listing order regardless of store iteration order.
        dtos.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(dtos)
    }
}
