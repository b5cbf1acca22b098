use std::sync::Arc;

use async_trait::async_trait;

use catalog_core::CategoryId;

use crate::error::AppResult;
use crate::handler::CommandHandler;
use crate::ports::{self, CategoryRepository};

/// Command: RenameCategory.
#[derive(Debug, Clone)]
pub struct RenameCategory {
    pub category_id: CategoryId,
    pub new_name: String,
}

pub struct RenameCategoryHandler {
    categories: Arc<dyn CategoryRepository>,
}

impl RenameCategoryHandler {
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }
}

#[async_trait]
impl CommandHandler for RenameCategoryHandler {
    type Command = RenameCategory;
    type Output = ();

    async fn handle(&self, command: RenameCategory) -> AppResult<()> {
        let category = self.categories.of_id(command.category_id).await?;
        ports::write(&category)?.rename(command.new_name)?;
        Ok(())
    }
}
