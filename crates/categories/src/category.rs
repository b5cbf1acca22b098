use std::sync::Arc;

use serde::{Deserialize, Serialize};

use catalog_core::{AggregateRoot, CategoryId, DomainError, DomainResult, Entity};
use catalog_events::{DomainEvent, DomainEventBuffer, EventMeta, EventSourcingEntity, impl_domain_event};

/// Event: CategoryCreated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCreated {
    pub meta: EventMeta,
    pub category_id: CategoryId,
    pub name: String,
}

impl_domain_event!(CategoryCreated, "catalog.category.created");

/// Event: CategoryRenamed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRenamed {
    pub meta: EventMeta,
    pub category_id: CategoryId,
    pub old_name: String,
    pub new_name: String,
}

impl_domain_event!(CategoryRenamed, "catalog.category.renamed");

/// Aggregate root: Category.
///
/// State-stored: methods validate, mutate fields, and buffer a domain event
/// describing the accepted change.
#[derive(Debug)]
pub struct Category {
    id: CategoryId,
    name: String,
    events: DomainEventBuffer,
}

impl Category {
    pub fn create(id: CategoryId, name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("category name cannot be empty"));
        }

        let mut category = Self {
            id,
            name: name.clone(),
            events: DomainEventBuffer::new(),
        };
        category.add_domain_event(Arc::new(CategoryCreated {
            meta: EventMeta::new(),
            category_id: id,
            name,
        }));
        Ok(category)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, new_name: impl Into<String>) -> DomainResult<()> {
        let new_name = new_name.into();
        if new_name.trim().is_empty() {
            return Err(DomainError::validation("category name cannot be empty"));
        }
        if new_name == self.name {
            return Err(DomainError::conflict("category already has this name"));
        }

        let old_name = std::mem::replace(&mut self.name, new_name.clone());
        self.add_domain_event(Arc::new(CategoryRenamed {
            meta: EventMeta::new(),
            category_id: self.id,
            old_name,
            new_name,
        }));
        Ok(())
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl AggregateRoot for Category {}

impl EventSourcingEntity for Category {
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
