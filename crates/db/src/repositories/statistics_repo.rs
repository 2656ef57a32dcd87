//! Aggregation queries backing the dashboard statistics endpoint.

use fitmatch_core::types::Timestamp;

use crate::models::statistics::{ColorCount, StyleCount, WardrobeStatistics};
use crate::models::wardrobe_item::WardrobeItem;
use crate::DbPool;

/// Histogram size for top colors and styles.
const TOP_N: i64 = 5;

/// How many unused items the dashboard lists.
const UNUSED_LIST_LIMIT: i64 = 10;

/// Computes wardrobe analytics.
pub struct StatisticsRepo;

impl StatisticsRepo {
    /// Gather all dashboard statistics in one pass.
    ///
    /// `unused_cutoff` is the wear date before which an item counts as
    /// unused; `season` is the current season label for the seasonal share.
    pub async fn gather(
        pool: &DbPool,
        season: &str,
        unused_cutoff: Timestamp,
    ) -> Result<WardrobeStatistics, sqlx::Error> {
        let total_items: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM wardrobe_items")
            .fetch_one(pool)
            .await?;

        let total_value: f64 =
            sqlx::query_scalar("SELECT COALESCE(SUM(price), 0.0) FROM wardrobe_items")
                .fetch_one(pool)
                .await?;

        let unused_count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM wardrobe_items \
             WHERE last_worn IS NULL OR last_worn < ?",
        )
        .bind(unused_cutoff)
        .fetch_one(pool)
        .await?;

        let seasonal_count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM wardrobe_items \
             WHERE lower(season) = ? OR lower(season) = 'all'",
        )
        .bind(season)
        .fetch_one(pool)
        .await?;

        let seasonal_percentage = if total_items > 0 {
            (seasonal_count * 100 + total_items / 2) / total_items
        } else {
            0
        };

        let top_colors = sqlx::query_as::<_, ColorCount>(
            "SELECT color, COUNT(*) AS count FROM wardrobe_items \
             GROUP BY color ORDER BY count DESC, color LIMIT ?",
        )
        .bind(TOP_N)
        .fetch_all(pool)
        .await?;

        let top_styles = sqlx::query_as::<_, StyleCount>(
            "SELECT style, COUNT(*) AS count FROM wardrobe_items \
             GROUP BY style ORDER BY count DESC, style LIMIT ?",
        )
        .bind(TOP_N)
        .fetch_all(pool)
        .await?;

        let unused_items = sqlx::query_as::<_, WardrobeItem>(
            "SELECT id, name, category, color, style, image_url, price, season, \
                    wear_count, last_worn, created_at \
             FROM wardrobe_items \
             WHERE last_worn IS NULL OR last_worn < ? \
             ORDER BY last_worn ASC, id ASC \
             LIMIT ?",
        )
        .bind(unused_cutoff)
        .bind(UNUSED_LIST_LIMIT)
        .fetch_all(pool)
        .await?;

        Ok(WardrobeStatistics {
            total_items,
            total_value,
            unused_count,
            seasonal_percentage,
            top_colors,
            top_styles,
            unused_items,
        })
    }
}
