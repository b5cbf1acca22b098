use std::sync::Arc;

use async_trait::async_trait;

use catalog_core::ProductId;
use catalog_products::Money;

use crate::error::AppResult;
use crate::handler::CommandHandler;
use crate::ports::{self, ProductRepository};

/// Command: ChangeProductPrice.
#[derive(Debug, Clone)]
pub struct ChangeProductPrice {
    pub product_id: ProductId,
    pub new_price_cents: u64,
    pub currency: String,
}

pub struct ChangeProductPriceHandler {
    products: Arc<dyn ProductRepository>,
}

impl ChangeProductPriceHandler {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl CommandHandler for ChangeProductPriceHandler {
    type Command = ChangeProductPrice;
    type Output = ();

    async fn handle(&self, command: ChangeProductPrice) -> AppResult<()> {
        let new_price = Money::new(command.new_price_cents, command.currency)?;
        let product = self.products.of_id(command.product_id).await?;
        ports::write(&product)?.change_price(new_price)?;
        Ok(())
    }
}
