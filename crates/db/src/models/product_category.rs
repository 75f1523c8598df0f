//! Product category entity model.

use serde::Serialize;
use slimshop_core::types::DbId;
use sqlx::FromRow;

/// A row from the `product_category` table.
///
/// Serialized with the table's column names, which is what the page
/// template iterates over.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct ProductCategory {
    #[sqlx(rename = "idproduct_category")]
    #[serde(rename = "idproduct_category")]
    pub id: DbId,
    #[sqlx(rename = "product_category_name")]
    #[serde(rename = "product_category_name")]
    pub name: String,
}
