use std::sync::Arc;

use async_trait::async_trait;

use catalog_categories::Category;
use catalog_core::CategoryId;

use crate::error::AppResult;
use crate::handler::CommandHandler;
use crate::ports::CategoryRepository;

/// Command: CreateCategory.
#[derive(Debug, Clone)]
pub struct CreateCategory {
    pub category_id: CategoryId,
    pub name: String,
}

pub struct CreateCategoryHandler {
    categories: Arc<dyn CategoryRepository>,
}

impl CreateCategoryHandler {
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }
}

#[async_trait]
impl CommandHandler for CreateCategoryHandler {
    type Command = CreateCategory;
    type Output = ();

    async fn handle(&self, command: CreateCategory) -> AppResult<()> {
        let category = Category::create(command.category_id, command.name)?;
        self.categories.add(category).await?;
        Ok(())
    }
}
