//! Startup wiring for the domain-event pipeline.
//!
//! Exactly one handler per event type, each wrapped in an explicit decorator
//! chain. Chains that mutate tracked aggregates (or append audit entries that
//! must land with the originating change) also carry the unit-of-work
//! decorator; pure notification chains do not.

use std::sync::Arc;

use catalog_categories::{CategoryCreated, CategoryRenamed};
use catalog_creators::CreatorRegistered;
use catalog_events::{
    DomainEventPublisher, LoggingEventHandler, UnitOfWork, UnitOfWorkEventHandler,
};
use catalog_products::{ProductArchived, ProductCreated, ProductPriceChanged};

use crate::handlers::{AuditTrailHandler, ProductCreatedHandler};
use crate::ports::{AuditLog, CreatorRepository};

/// Build the publisher registry covering every event the catalog emits.
pub fn event_publisher(
    creators: Arc<dyn CreatorRepository>,
    audit: Arc<dyn AuditLog>,
    uow: Arc<dyn UnitOfWork>,
) -> DomainEventPublisher {
    let mut publisher = DomainEventPublisher::new();

    publisher.register::<ProductCreated, _>(LoggingEventHandler::new(
        "product-created",
        UnitOfWorkEventHandler::new(ProductCreatedHandler::new(creators), uow.clone()),
    ));
    publisher.register::<CategoryRenamed, _>(LoggingEventHandler::new(
        "category-renamed-audit",
        UnitOfWorkEventHandler::new(AuditTrailHandler::new(audit.clone()), uow),
    ));

    publisher.register::<CreatorRegistered, _>(LoggingEventHandler::new(
        "creator-registered-audit",
        AuditTrailHandler::new(audit.clone()),
    ));
    publisher.register::<CategoryCreated, _>(LoggingEventHandler::new(
        "category-created-audit",
        AuditTrailHandler::new(audit.clone()),
    ));
    publisher.register::<ProductPriceChanged, _>(LoggingEventHandler::new(
        "product-price-changed-audit",
        AuditTrailHandler::new(audit.clone()),
    ));
    publisher.register::<ProductArchived, _>(LoggingEventHandler::new(
        "product-archived-audit",
        AuditTrailHandler::new(audit),
    ));

    publisher
}
