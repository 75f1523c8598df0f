mod product_category_repo;

pub use product_category_repo::ProductCategoryRepo;
