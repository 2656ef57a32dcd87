//! Repository for the `user_preferences` table.

use chrono::Utc;

use crate::models::preference::UserPreference;
use crate::DbPool;

/// Column list for `user_preferences` queries.
const PREFERENCE_COLUMNS: &str =
    "id, style_preference, color_preference, occasion_preference, created_at";

/// Provides append and latest-row access for user preferences.
pub struct PreferenceRepo;

impl PreferenceRepo {
    /// Append a preference row and return it.
    pub async fn create(
        pool: &DbPool,
        style: &str,
        color: &str,
        occasion: &str,
    ) -> Result<UserPreference, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_preferences \
                 (style_preference, color_preference, occasion_preference, created_at) \
             VALUES (?, ?, ?, ?) \
             RETURNING {PREFERENCE_COLUMNS}"
        );
        sqlx::query_as::<_, UserPreference>(&query)
            .bind(style)
            .bind(color)
            .bind(occasion)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// The most recently submitted preference row, if any.
    pub async fn latest(pool: &DbPool) -> Result<Option<UserPreference>, sqlx::Error> {
        let query = format!(
            "SELECT {PREFERENCE_COLUMNS} FROM user_preferences \
             ORDER BY created_at DESC, id DESC \
             LIMIT 1"
        );
        sqlx::query_as::<_, UserPreference>(&query)
            .fetch_optional(pool)
            .await
    }
}
