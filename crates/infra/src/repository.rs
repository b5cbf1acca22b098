//! In-memory repositories backing the application ports.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use catalog_app::ports::{
    CategoryRepository, CreatorRepository, ProductRepository, Tracked,
};
use catalog_app::{AppError, AppResult};
use catalog_categories::Category;
use catalog_core::{CategoryId, CreatorId, Entity, ProductId};
use catalog_creators::Creator;
use catalog_events::EventSourcingEntity;
use catalog_products::Product;

use crate::unit_of_work::InMemoryUnitOfWork;

/// Shared store body: id-keyed map of tracked handles plus the unit of work
/// that every added aggregate is registered with.
struct Store<I, T> {
    entries: RwLock<HashMap<I, Tracked<T>>>,
    uow: Arc<InMemoryUnitOfWork>,
}

impl<I, T> Store<I, T>
where
    I: Eq + Hash + Copy,
    T: EventSourcingEntity + Entity<Id = I> + Send + Sync + 'static,
{
    fn new(uow: Arc<InMemoryUnitOfWork>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            uow,
        }
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, HashMap<I, Tracked<T>>>> {
        self.entries
            .read()
            .map_err(|_| AppError::internal("repository lock poisoned"))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, HashMap<I, Tracked<T>>>> {
        self.entries
            .write()
            .map_err(|_| AppError::internal("repository lock poisoned"))
    }

    fn add(&self, entity: T) -> AppResult<Tracked<T>> {
        let id = *entity.id();
        let tracked = Arc::new(RwLock::new(entity));
        self.write()?.insert(id, tracked.clone());
        self.uow.track(tracked.clone());
        Ok(tracked)
    }

    fn of_id(&self, id: I) -> AppResult<Tracked<T>> {
        self.read()?.get(&id).cloned().ok_or(AppError::NotFound)
    }
}

pub struct InMemoryCreatorRepository {
    store: Store<CreatorId, Creator>,
}

impl InMemoryCreatorRepository {
    pub fn new(uow: Arc<InMemoryUnitOfWork>) -> Self {
        Self {
            store: Store::new(uow),
        }
    }
}

#[async_trait]
impl CreatorRepository for InMemoryCreatorRepository {
    async fn add(&self, creator: Creator) -> AppResult<Tracked<Creator>> {
        self.store.add(creator)
    }

    async fn of_id(&self, id: CreatorId) -> AppResult<Tracked<Creator>> {
        self.store.of_id(id)
    }
}

pub struct InMemoryCategoryRepository {
    store: Store<CategoryId, Category>,
}

impl InMemoryCategoryRepository {
    pub fn new(uow: Arc<InMemoryUnitOfWork>) -> Self {
        Self {
            store: Store::new(uow),
        }
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn add(&self, category: Category) -> AppResult<Tracked<Category>> {
        self.store.add(category)
    }

    async fn of_id(&self, id: CategoryId) -> AppResult<Tracked<Category>> {
        self.store.of_id(id)
    }
}

pub struct InMemoryProductRepository {
    store: Store<ProductId, Product>,
}

impl InMemoryProductRepository {
    pub fn new(uow: Arc<InMemoryUnitOfWork>) -> Self {
        Self {
            store: Store::new(uow),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn add(&self, product: Product) -> AppResult<Tracked<Product>> {
        self.store.add(product)
    }

    async fn of_id(&self, id: ProductId) -> AppResult<Tracked<Product>> {
        self.store.of_id(id)
    }

    async fn all(&self) -> AppResult<Vec<Tracked<Product>>> {
        Ok(self.store.read()?.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_events::UnitOfWork;

    #[tokio::test]
    async fn add_registers_the_handle_with_the_unit_of_work() {
        let uow = Arc::new(InMemoryUnitOfWork::new());
        let repo = InMemoryCategoryRepository::new(uow.clone());

        let category = Category::create(CategoryId::new(), "Ceramics").unwrap();
        let id = *category.id();
        let tracked = repo.add(category).await.unwrap();

        assert!(Arc::ptr_eq(&tracked, &repo.of_id(id).await.unwrap()));
        assert_eq!(uow.tracked_entities().len(), 1);
        assert!(uow.tracked_entities()[0].has_pending_events().unwrap());
    }

    #[tokio::test]
    async fn of_id_misses_map_to_not_found() {
        let uow = Arc::new(InMemoryUnitOfWork::new());
        let repo = InMemoryProductRepository::new(uow);

        let err = repo.of_id(ProductId::new()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound));
    }
}
