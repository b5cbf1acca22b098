use std::sync::Arc;

use async_trait::async_trait;

use catalog_events::DomainEventHandler;
use catalog_products::ProductCreated;

use crate::ports::{self, CreatorRepository};

/// Keeps the creator's registered-product counter in sync.
///
/// The counter bump buffers no further event, so handling never feeds new
/// work back into the dispatch cycle.
pub struct ProductCreatedHandler {
    creators: Arc<dyn CreatorRepository>,
}

impl ProductCreatedHandler {
    pub fn new(creators: Arc<dyn CreatorRepository>) -> Self {
        Self { creators }
    }
}

#[async_trait]
impl DomainEventHandler<ProductCreated> for ProductCreatedHandler {
    async fn handle(&self, event: &ProductCreated) -> anyhow::Result<()> {
        let creator = self.creators.of_id(event.creator_id).await?;
        ports::write(&creator)?.record_product(event.product_id);
        Ok(())
    }
}
