pub mod category_page;
