pub mod category_page;
pub mod health;
