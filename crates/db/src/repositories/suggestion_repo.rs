//! Repository for the `suggestions` table.

use chrono::Utc;

use crate::models::suggestion::{CreateSuggestion, Suggestion};
use crate::DbPool;

/// Column list for `suggestions` queries.
const SUGGESTION_COLUMNS: &str =
    "id, combination_id, missing_item, purchase_link, description, created_at";

/// Provides create for user-submitted missing-item suggestions.
pub struct SuggestionRepo;

impl SuggestionRepo {
    /// Insert a suggestion and return the stored row.
    pub async fn create(
        pool: &DbPool,
        input: &CreateSuggestion,
    ) -> Result<Suggestion, sqlx::Error> {
        let query = format!(
            "INSERT INTO suggestions \
                 (combination_id, missing_item, purchase_link, description, created_at) \
             VALUES (?, ?, ?, ?, ?) \
             RETURNING {SUGGESTION_COLUMNS}"
        );
        sqlx::query_as::<_, Suggestion>(&query)
            .bind(input.combination_id)
            .bind(input.missing_item.as_deref())
            .bind(input.purchase_link.as_deref())
            .bind(input.description.as_deref())
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }
}
