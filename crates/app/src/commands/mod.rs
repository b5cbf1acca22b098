//! Write-side use cases.

pub mod archive_product;
pub mod change_product_price;
pub mod create_category;
pub mod create_product;
pub mod register_creator;
pub mod rename_category;

pub use archive_product::{ArchiveProduct, ArchiveProductHandler};
pub use change_product_price::{ChangeProductPrice, ChangeProductPriceHandler};
pub use create_category::{CreateCategory, CreateCategoryHandler};
pub use create_product::{CreateProduct, CreateProductHandler};
pub use register_creator::{RegisterCreator, RegisterCreatorHandler};
pub use rename_category::{RenameCategory, RenameCategoryHandler};
