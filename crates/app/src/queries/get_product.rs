use std::sync::Arc;

use async_trait::async_trait;

use catalog_core::ProductId;

use crate::error::AppResult;
use crate::handler::QueryHandler;
use crate::ports::{self, ProductRepository};
use crate::queries::dto::ProductDto;

/// Query: GetProduct.
#[derive(Debug, Clone)]
pub struct GetProduct {
    pub product_id: ProductId,
}

pub struct GetProductHandler {
    products: Arc<dyn ProductRepository>,
}

impl GetProductHandler {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl QueryHandler for GetProductHandler {
    type Query = GetProduct;
    type Output = ProductDto;

    async fn handle(&self, query: GetProduct) -> AppResult<ProductDto> {
        let product = self.products.of_id(query.product_id).await?;
        let guard = ports::read(&product)?;
        Ok(ProductDto::from(&*guard))
    }
}
