use std::sync::Arc;

use serde::{Deserialize, Serialize};

use catalog_core::{
    AggregateRoot, CategoryId, CreatorId, DomainError, DomainResult, Entity, ProductId,
    ValueObject,
};
use catalog_events::{DomainEvent, DomainEventBuffer, EventMeta, EventSourcingEntity, impl_domain_event};

/// Price in the smallest currency unit plus an ISO currency code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    amount_cents: u64,
    currency: String,
}

impl Money {
    pub fn new(amount_cents: u64, currency: impl Into<String>) -> DomainResult<Self> {
        let currency = currency.into().to_ascii_uppercase();
        if currency.len() != 3 || !currency.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(DomainError::validation(format!(
                "'{currency}' is not a 3-letter ISO currency code"
            )));
        }
        Ok(Self {
            amount_cents,
            currency,
        })
    }

    pub fn amount_cents(&self) -> u64 {
        self.amount_cents
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }
}

impl ValueObject for Money {}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02} {}", self.amount_cents / 100, self.amount_cents % 100, self.currency)
    }
}

/// Product status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Active,
    Archived,
}

/// Event: ProductCreated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreated {
    pub meta: EventMeta,
    pub product_id: ProductId,
    pub creator_id: CreatorId,
    pub category_id: CategoryId,
    pub name: String,
    pub price: Money,
}

impl_domain_event!(ProductCreated, "catalog.product.created");

/// Event: ProductPriceChanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductPriceChanged {
    pub meta: EventMeta,
    pub product_id: ProductId,
    pub old_price: Money,
    pub new_price: Money,
}

impl_domain_event!(ProductPriceChanged, "catalog.product.price_changed");

/// Event: ProductArchived.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductArchived {
    pub meta: EventMeta,
    pub product_id: ProductId,
}

impl_domain_event!(ProductArchived, "catalog.product.archived");

/// Aggregate root: Product.
#[derive(Debug)]
pub struct Product {
    id: ProductId,
    creator_id: CreatorId,
    category_id: CategoryId,
    name: String,
    price: Money,
    status: ProductStatus,
    events: DomainEventBuffer,
}

impl Product {
    pub fn create(
        id: ProductId,
        creator_id: CreatorId,
        category_id: CategoryId,
        name: impl Into<String>,
        price: Money,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }

        let mut product = Self {
            id,
            creator_id,
            category_id,
            name: name.clone(),
            price: price.clone(),
            status: ProductStatus::Active,
            events: DomainEventBuffer::new(),
        };
        product.add_domain_event(Arc::new(ProductCreated {
            meta: EventMeta::new(),
            product_id: id,
            creator_id,
            category_id,
            name,
            price,
        }));
        Ok(product)
    }

    pub fn creator_id(&self) -> CreatorId {
        self.creator_id
    }

    pub fn category_id(&self) -> CategoryId {
        self.category_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> &Money {
        &self.price
    }

    pub fn status(&self) -> ProductStatus {
        self.status
    }

    /// Whether this product can currently be sold.
    pub fn can_be_sold(&self) -> bool {
        self.status == ProductStatus::Active
    }

    pub fn change_price(&mut self, new_price: Money) -> DomainResult<()> {
        if self.status == ProductStatus::Archived {
            return Err(DomainError::invariant(
                "archived products cannot change price",
            ));
        }
        if new_price == self.price {
            return Err(DomainError::conflict("product already has this price"));
        }

        let old_price = std::mem::replace(&mut self.price, new_price.clone());
        self.add_domain_event(Arc::new(ProductPriceChanged {
            meta: EventMeta::new(),
            product_id: self.id,
            old_price,
            new_price,
        }));
        Ok(())
    }

    pub fn archive(&mut self) -> DomainResult<()> {
        if self.status == ProductStatus::Archived {
            return Err(DomainError::conflict("product is already archived"));
        }

        self.status = ProductStatus::Archived;
        self.add_domain_event(Arc::new(ProductArchived {
            meta: EventMeta::new(),
            product_id: self.id,
        }));
        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl AggregateRoot for Product {}

impl EventSourcingEntity for Product {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn usd(cents: u64) -> Money {
        Money::new(cents, "USD").unwrap()
    }

    fn product() -> Product {
        Product::create(
            ProductId::new(),
            CreatorId::new(),
            CategoryId::new(),
            "Stoneware Mug",
            usd(2_500),
        )
        .unwrap()
    }

    #[test]
    fn create_buffers_product_created() {
        let product = product();
        assert_eq!(product.status(), ProductStatus::Active);
        assert!(product.can_be_sold());

        let events = product.domain_events();
        assert_eq!(events.len(), 1);
        let created = events[0].as_any().downcast_ref::<ProductCreated>().unwrap();
        assert_eq!(created.name, "Stoneware Mug");
        assert_eq!(created.price, usd(2_500));
    }

    #[test]
    fn create_rejects_blank_name() {
        let err = Product::create(
            ProductId::new(),
            CreatorId::new(),
            CategoryId::new(),
            "  ",
            usd(100),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn money_rejects_bad_currency_codes() {
        assert!(Money::new(100, "US").is_err());
        assert!(Money::new(100, "DOLLARS").is_err());
        assert!(Money::new(100, "us1").is_err());
        assert_eq!(Money::new(100, "usd").unwrap().currency(), "USD");
    }

    #[test]
    fn change_price_buffers_old_and_new() {
        let mut product = product();
        product.change_price(usd(3_000)).unwrap();

        assert_eq!(product.price(), &usd(3_000));
        let changed = product.domain_events()[1]
            .as_any()
            .downcast_ref::<ProductPriceChanged>()
            .unwrap();
        assert_eq!(changed.old_price, usd(2_500));
        assert_eq!(changed.new_price, usd(3_000));
    }

    #[test]
    fn change_price_to_same_value_is_a_conflict() {
        let mut product = product();
        let err = product.change_price(usd(2_500)).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[test]
    fn archived_product_rejects_price_changes() {
        let mut product = product();
        product.archive().unwrap();

        let err = product.change_price(usd(9_900)).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
    }

    #[test]
    fn double_archive_is_a_conflict() {
        let mut product = product();
        product.archive().unwrap();
        assert!(!product.can_be_sold());

        let err = product.archive().unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }
}
