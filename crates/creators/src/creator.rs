use std::sync::Arc;

use serde::{Deserialize, Serialize};

use catalog_core::{
    AggregateRoot, CreatorId, DomainError, DomainResult, Entity, ProductId, ValueObject,
};
use catalog_events::{DomainEvent, DomainEventBuffer, EventMeta, EventSourcingEntity, impl_domain_event};

/// Contact email, validated at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        let valid = trimmed
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
        if !valid {
            return Err(DomainError::validation(format!(
                "'{trimmed}' is not a valid email address"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Email {}

impl core::fmt::Display for Email {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Event: CreatorRegistered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatorRegistered {
    pub meta: EventMeta,
    pub creator_id: CreatorId,
    pub name: String,
    pub email: Email,
}

impl_domain_event!(CreatorRegistered, "catalog.creator.registered");

/// Event: CreatorRenamed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatorRenamed {
    pub meta: EventMeta,
    pub creator_id: CreatorId,
    pub old_name: String,
    pub new_name: String,
}

impl_domain_event!(CreatorRenamed, "catalog.creator.renamed");

/// Aggregate root: Creator (person or studio listing products).
#[derive(Debug)]
pub struct Creator {
    id: CreatorId,
    name: String,
    email: Email,
    products_registered: u64,
    events: DomainEventBuffer,
}

impl Creator {
    pub fn register(id: CreatorId, name: impl Into<String>, email: Email) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("creator name cannot be empty"));
        }

        let mut creator = Self {
            id,
            name: name.clone(),
            email: email.clone(),
            products_registered: 0,
            events: DomainEventBuffer::new(),
        };
        creator.add_domain_event(Arc::new(CreatorRegistered {
            meta: EventMeta::new(),
            creator_id: id,
            name,
            email,
        }));
        Ok(creator)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn products_registered(&self) -> u64 {
        self.products_registered
    }

    pub fn rename(&mut self, new_name: impl Into<String>) -> DomainResult<()> {
        let new_name = new_name.into();
        if new_name.trim().is_empty() {
            return Err(DomainError::validation("creator name cannot be empty"));
        }
        if new_name == self.name {
            return Err(DomainError::conflict("creator already has this name"));
        }

        let old_name = std::mem::replace(&mut self.name, new_name.clone());
        self.add_domain_event(Arc::new(CreatorRenamed {
            meta: EventMeta::new(),
            creator_id: self.id,
            old_name,
            new_name,
        }));
        Ok(())
    }

    /// Bump the registered-product counter.
    ///
    /// Invoked by the product-created side-effect handler; a derived counter
    /// update, so it deliberately emits no further event (no event cascades).
    pub fn record_product(&mut self, _product_id: ProductId) {
        self.products_registered += 1;
    }
}

impl Entity for Creator {
    type Id = CreatorId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl AggregateRoot for Creator {}

impl EventSourcingEntity for Creator {
    fn add_domain_event(&mut self, event: Arc<dyn DomainEvent>) {
        self.events.push(event);
    }

    fn domain_events(&self) -> &[Arc<dyn DomainEvent>] {
        self.events.events()
    }

    fn clear_domain_events(&mut self) {
        self.events.clear();
    }
}
