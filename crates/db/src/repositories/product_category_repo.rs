//! Repository for the `product_category` table.

use slimshop_core::types::DbId;
use sqlx::PgConnection;

use crate::models::product_category::ProductCategory;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "idproduct_category, product_category_name";

/// Reads and inserts product categories on a caller-held connection.
///
/// Each method is a single statement. Errors are returned as-is for the
/// request boundary to handle.
pub struct ProductCategoryRepo;

impl ProductCategoryRepo {
    /// List every category in the order the store returns them.
    pub async fn list(conn: &mut PgConnection) -> Result<Vec<ProductCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM product_category");
        sqlx::query_as::<_, ProductCategory>(&query)
            .fetch_all(conn)
            .await
    }

    /// Insert a category, returning its generated id.
    pub async fn create(conn: &mut PgConnection, name: &str) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO product_category (product_category_name)
             VALUES ($1)
             RETURNING idproduct_category",
        )
        .bind(name)
        .fetch_one(conn)
        .await
    }
}
