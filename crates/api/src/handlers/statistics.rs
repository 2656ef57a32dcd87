//! Handler for dashboard statistics.

use axum::extract::State;
use axum::Json;
use chrono::{Datelike, Duration, Utc};
use fitmatch_core::weather::Season;
use fitmatch_db::models::statistics::WardrobeStatistics;
use fitmatch_db::repositories::StatisticsRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// Items not worn within this window count as unused.
const UNUSED_WINDOW_DAYS: i64 = 30;

/// GET /api/statistics
pub async fn overview(State(state): State<AppState>) -> AppResult<Json<WardrobeStatistics>> {
    let now = Utc::now();
    let season = Season::from_month(now.month());
    let unused_cutoff = now - Duration::days(UNUSED_WINDOW_DAYS);

    let stats = StatisticsRepo::gather(&state.pool, season.as_str(), unused_cutoff).await?;

    Ok(Json(stats))
}
