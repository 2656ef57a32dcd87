//! Repository for the `wear_history` table.

use chrono::Utc;
use fitmatch_core::types::DbId;

use crate::models::wear_history::WearEntry;
use crate::DbPool;

/// Column list for `wear_history` queries.
const WEAR_COLUMNS: &str = "id, combination_name, item_ids, occasion, weather, worn_at";

/// Provides append and item-set lookup for wear history.
pub struct WearHistoryRepo;

impl WearHistoryRepo {
    /// Record that a combination was worn.
    pub async fn create(
        pool: &DbPool,
        combination_name: &str,
        item_ids: &[DbId],
        occasion: Option<&str>,
        weather: Option<&str>,
    ) -> Result<WearEntry, sqlx::Error> {
        let ids_json = serde_json::to_string(item_ids)
            .map_err(|e| sqlx::Error::Encode(Box::new(e)))?;

        let query = format!(
            "INSERT INTO wear_history \
                 (combination_name, item_ids, occasion, weather, worn_at) \
             VALUES (?, ?, ?, ?, ?) \
             RETURNING {WEAR_COLUMNS}"
        );
        sqlx::query_as::<_, WearEntry>(&query)
            .bind(combination_name)
            .bind(ids_json)
            .bind(occasion)
            .bind(weather)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// All recorded item-id sets, each sorted for set comparison.
    pub async fn worn_item_sets(pool: &DbPool) -> Result<Vec<Vec<DbId>>, sqlx::Error> {
        let raw: Vec<String> = sqlx::query_scalar("SELECT item_ids FROM wear_history")
            .fetch_all(pool)
            .await?;

        raw.into_iter()
            .map(|json| {
                let mut ids: Vec<DbId> = serde_json::from_str(&json)
                    .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
                ids.sort_unstable();
                Ok(ids)
            })
            .collect()
    }
}
