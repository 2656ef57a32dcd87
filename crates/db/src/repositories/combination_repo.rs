//! Repository for the `combinations` table.

use chrono::Utc;

use crate::models::combination::{Combination, CombinationRow};
use crate::DbPool;

/// Column list for `combinations` queries.
const COMBINATION_COLUMNS: &str = "id, name, items, description, created_at";

/// Provides create/list for saved combinations.
pub struct CombinationRepo;

impl CombinationRepo {
    /// Insert a combination, serializing the item list to JSON.
    pub async fn create(
        pool: &DbPool,
        name: &str,
        items: &serde_json::Value,
        description: &str,
    ) -> Result<Combination, sqlx::Error> {
        let query = format!(
            "INSERT INTO combinations (name, items, description, created_at) \
             VALUES (?, ?, ?, ?) \
             RETURNING {COMBINATION_COLUMNS}"
        );
        let row = sqlx::query_as::<_, CombinationRow>(&query)
            .bind(name)
            .bind(items.to_string())
            .bind(description)
            .bind(Utc::now())
            .fetch_one(pool)
            .await?;

        parse_row(row)
    }

    /// List all combinations, newest first, with items deserialized.
    pub async fn list_all(pool: &DbPool) -> Result<Vec<Combination>, sqlx::Error> {
        let query = format!(
            "SELECT {COMBINATION_COLUMNS} FROM combinations \
             ORDER BY created_at DESC, id DESC"
        );
        let rows = sqlx::query_as::<_, CombinationRow>(&query)
            .fetch_all(pool)
            .await?;

        rows.into_iter().map(parse_row).collect()
    }
}

/// Deserialize the stored item list; a corrupt column is a decode error.
fn parse_row(row: CombinationRow) -> Result<Combination, sqlx::Error> {
    Combination::try_from(row).map_err(|e| sqlx::Error::Decode(Box::new(e)))
}
