//! Repository for the `wardrobe_items` table.

use chrono::Utc;
use fitmatch_core::types::{DbId, Timestamp};

use crate::models::wardrobe_item::{CreateWardrobeItem, WardrobeItem};
use crate::DbPool;

/// Column list for `wardrobe_items` queries.
const ITEM_COLUMNS: &str = "\
    id, name, category, color, style, image_url, price, season, \
    wear_count, last_worn, created_at";

/// Provides create/list/delete and wear tracking for wardrobe items.
pub struct WardrobeItemRepo;

impl WardrobeItemRepo {
    /// Insert a new wardrobe item and return the stored row.
    pub async fn create(
        pool: &DbPool,
        input: &CreateWardrobeItem,
    ) -> Result<WardrobeItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO wardrobe_items \
                 (name, category, color, style, image_url, price, season, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING {ITEM_COLUMNS}"
        );
        sqlx::query_as::<_, WardrobeItem>(&query)
            .bind(&input.name)
            .bind(&input.category)
            .bind(&input.color)
            .bind(&input.style)
            .bind(&input.image_url)
            .bind(input.price)
            .bind(input.season.as_deref())
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// List all items, newest first.
    pub async fn list_all(pool: &DbPool) -> Result<Vec<WardrobeItem>, sqlx::Error> {
        let query = format!(
            "SELECT {ITEM_COLUMNS} FROM wardrobe_items \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, WardrobeItem>(&query)
            .fetch_all(pool)
            .await
    }

    /// Delete an item by id, returning the number of rows removed (0 or 1).
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM wardrobe_items WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Count all items.
    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM wardrobe_items")
            .fetch_one(pool)
            .await
    }

    /// Bump wear tracking for the given items. Returns rows updated.
    pub async fn mark_worn(
        pool: &DbPool,
        ids: &[DbId],
        worn_at: Timestamp,
    ) -> Result<u64, sqlx::Error> {
        let mut updated = 0;
        for &id in ids {
            let result = sqlx::query(
                "UPDATE wardrobe_items \
                 SET wear_count = wear_count + 1, last_worn = ? \
                 WHERE id = ?",
            )
            .bind(worn_at)
            .bind(id)
            .execute(pool)
            .await?;
            updated += result.rows_affected();
        }
        Ok(updated)
    }
}
