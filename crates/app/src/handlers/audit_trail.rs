use std::sync::Arc;

use async_trait::async_trait;

use catalog_categories::{CategoryCreated, CategoryRenamed};
use catalog_creators::CreatorRegistered;
use catalog_events::{DomainEvent, DomainEventHandler};
use catalog_products::{ProductArchived, ProductPriceChanged};

use crate::ports::{AuditEntry, AuditLog};

/// Events that leave a human-readable line in the audit trail.
pub trait Auditable: DomainEvent {
    fn summary(&self) -> String;
}

impl Auditable for CreatorRegistered {
    fn summary(&self) -> String {
        format!("creator {} registered as '{}'", self.creator_id, self.name)
    }
}

impl Auditable for CategoryCreated {
    fn summary(&self) -> String {
        format!("category {} created as '{}'", self.category_id, self.name)
    }
}

impl Auditable for CategoryRenamed {
    fn summary(&self) -> String {
        format!(
            "category {} renamed '{}' -> '{}'",
            self.category_id, self.old_name, self.new_name
        )
    }
}

impl Auditable for ProductPriceChanged {
    fn summary(&self) -> String {
        format!(
            "product {} price changed {} -> {}",
            self.product_id, self.old_price, self.new_price
        )
    }
}

impl Auditable for ProductArchived {
    fn summary(&self) -> String {
        format!("product {} archived", self.product_id)
    }
}

/// Records one audit entry per handled event.
pub struct AuditTrailHandler {
    audit: Arc<dyn AuditLog>,
}

impl AuditTrailHandler {
    pub fn new(audit: Arc<dyn AuditLog>) -> Self {
        Self { audit }
    }
}

#[async_trait]
impl<E: Auditable> DomainEventHandler<E> for AuditTrailHandler {
    async fn handle(&self, event: &E) -> anyhow::Result<()> {
        self.audit
            .record(AuditEntry::for_event(event, event.summary()))
            .await?;
        Ok(())
    }
}
