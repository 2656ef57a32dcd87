//! Dashboard statistics response types.

use serde::Serialize;
use sqlx::FromRow;

use crate::models::wardrobe_item::WardrobeItem;

/// One bar of the color histogram.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ColorCount {
    pub color: String,
    pub count: i64,
}

/// One bar of the style histogram.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StyleCount {
    pub style: String,
    pub count: i64,
}

/// Aggregated wardrobe analytics for `GET /api/statistics`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WardrobeStatistics {
    pub total_items: i64,
    /// Sum of item prices; items without a price count as zero.
    pub total_value: f64,
    /// Items never worn or not worn within the unused window.
    pub unused_count: i64,
    /// Share of items tagged for the current season (or all seasons).
    pub seasonal_percentage: i64,
    pub top_colors: Vec<ColorCount>,
    pub top_styles: Vec<StyleCount>,
    pub unused_items: Vec<WardrobeItem>,
}
