use std::sync::Arc;

use async_trait::async_trait;

use catalog_core::{CategoryId, CreatorId, ProductId};
use catalog_products::{Money, Product};

use crate::error::AppResult;
use crate::handler::CommandHandler;
use crate::ports::{CategoryRepository, CreatorRepository, ProductRepository};

/// Command: CreateProduct.
#[derive(Debug, Clone)]
pub struct CreateProduct {
    pub product_id: ProductId,
    pub creator_id: CreatorId,
    pub category_id: CategoryId,
    pub name: String,
    pub price_cents: u64,
    pub currency: String,
}

pub struct CreateProductHandler {
    products: Arc<dyn ProductRepository>,
    creators: Arc<dyn CreatorRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl CreateProductHandler {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        creators: Arc<dyn CreatorRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            products,
            creators,
            categories,
        }
    }
}

#[async_trait]
impl CommandHandler for CreateProductHandler {
    type Command = CreateProduct;
    type Output = ();

    async fn handle(&self, command: CreateProduct) -> AppResult<()> {
        // Referenced aggregates must exist before listing a product.
        self.creators.of_id(command.creator_id).await?;
        self.categories.of_id(command.category_id).await?;

        let price = Money::new(command.price_cents, command.currency)?;
        let product = Product::create(
            command.product_id,
            command.creator_id,
            command.category_id,
            command.name,
            price,
        )?;
        self.products.add(product).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::{Mutex, RwLock};

    use catalog_categories::Category;
    use catalog_creators::{Creator, Email};

    use super::*;
    use crate::error::AppError;
    use crate::ports::Tracked;

    #[derive(Default)]
    struct StubCreators(Mutex<HashMap<CreatorId, Tracked<Creator>>>);

    #[async_trait]
    impl CreatorRepository for StubCreators {
        async fn add(&self, creator: Creator) -> AppResult<Tracked<Creator>> {
            let id = *catalog_core::Entity::id(&creator);
            let tracked = Arc::new(RwLock::new(creator));
            self.0.lock().unwrap().insert(id, tracked.clone());
            Ok(tracked)
        }

        async fn of_id(&self, id: CreatorId) -> AppResult<Tracked<Creator>> {
            self.0
                .lock()
                .unwrap()
                .get(&id)
                .cloned()
                .ok_or(AppError::NotFound)
        }
    }

    #[derive(Default)]
    struct StubCategories(Mutex<HashMap<CategoryId, Tracked<Category>>>);

    #[async_trait]
    impl CategoryRepository for StubCategories {
        async fn add(&self, category: Category) -> AppResult<Tracked<Category>> {
            let id = *catalog_core::Entity::id(&category);
            let tracked = Arc::new(RwLock::new(category));
            self.0.lock().unwrap().insert(id, tracked.clone());
            Ok(tracked)
        }

        async fn of_id(&self, id: CategoryId) -> AppResult<Tracked<Category>> {
            self.0
                .lock()
                .unwrap()
                .get(&id)
                .cloned()
                .ok_or(AppError::NotFound)
        }
    }

    #[derive(Default)]
    struct StubProducts(Mutex<HashMap<ProductId, Tracked<Product>>>);

    #[async_trait]
    impl ProductRepository for StubProducts {
        async fn add(&self, product: Product) -> AppResult<Tracked<Product>> {
            let id = *catalog_core::Entity::id(&product);
            let tracked = Arc::new(RwLock::new(product));
            self.0.lock().unwrap().insert(id, tracked.clone());
            Ok(tracked)
        }

        async fn of_id(&self, id: ProductId) -> AppResult<Tracked<Product>> {
            self.0
                .lock()
                .unwrap()
                .get(&id)
                .cloned()
                .ok_or(AppError::NotFound)
        }

        async fn all(&self) -> AppResult<Vec<Tracked<Product>>> {
            Ok(self.0.lock().unwrap().values().cloned().collect())
        }
    }

    fn command(creator_id: CreatorId, category_id: CategoryId) -> CreateProduct {
        CreateProduct {
            product_id: ProductId::new(),
            creator_id,
            category_id,
            name: "Stoneware Mug".into(),
            price_cents: 2_500,
            currency: "USD".into(),
        }
    }

    #[tokio::test]
    async fn creates_when_creator_and_category_exist() {
        let creators = Arc::new(StubCreators::default());
        let categories = Arc::new(StubCategories::default());
        let products = Arc::new(StubProducts::default());

        let creator =
            Creator::register(CreatorId::new(), "Ada", Email::new("ada@example.com").unwrap())
                .unwrap();
        let creator_id = *catalog_core::Entity::id(&creator);
        creators.add(creator).await.unwrap();

        let category = Category::create(CategoryId::new(), "Ceramics").unwrap();
        let category_id = *catalog_core::Entity::id(&category);
        categories.add(category).await.unwrap();

        let handler =
            CreateProductHandler::new(products.clone(), creators.clone(), categories.clone());
        handler.handle(command(creator_id, category_id)).await.unwrap();

        assert_eq!(products.all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn rejects_an_unknown_creator() {
        let handler = CreateProductHandler::new(
            Arc::new(StubProducts::default()),
            Arc::new(StubCreators::default()),
            Arc::new(StubCategories::default()),
        );

        let err = handler
            .handle(command(CreatorId::new(), CategoryId::new()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound));
    }
}
