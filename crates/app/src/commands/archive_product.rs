use std::sync::Arc;

use async_trait::async_trait;

use catalog_core::ProductId;

use crate::error::AppResult;
use crate::handler::CommandHandler;
use crate::ports::{self, ProductRepository};

/// Command: ArchiveProduct.
#[derive(Debug, Clone)]
pub struct ArchiveProduct {
    pub product_id: ProductId,
}

pub struct ArchiveProductHandler {
    products: Arc<dyn ProductRepository>,
}

impl ArchiveProductHandler {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl CommandHandler for ArchiveProductHandler {
    type Command = ArchiveProduct;
    type Output = ();

    async fn handle(&self, command: ArchiveProduct) -> AppResult<()> {
        let product = self.products.of_id(command.product_id).await?;
        ports::write(&product)?.archive()?;
        Ok(())
    }
}
