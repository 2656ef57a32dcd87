//! Handlers for saved combinations and wear tracking.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use fitmatch_db::models::combination::{Combination, CreateCombination};
use fitmatch_db::models::wear_history::CreateWearEntry;
use fitmatch_db::repositories::{CombinationRepo, WardrobeItemRepo, WearHistoryRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Response for `POST /api/combinations/mark-worn`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkWornResult {
    pub message: &'static str,
    pub items_updated: u64,
}

/// POST /api/combinations
///
/// Save a combination. The item list is stored as JSON and echoed back
/// deserialized.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCombination>,
) -> AppResult<Json<Combination>> {
    let name = input.name.as_deref().unwrap_or("New Combination");
    let description = input.description.as_deref().unwrap_or("");

    let combination = CombinationRepo::create(&state.pool, name, &input.items, description).await?;

    tracing::info!(combination_id = combination.id, "Combination saved");

    Ok(Json(combination))
}

/// GET /api/combinations
///
/// List saved combinations, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Combination>>> {
    let combinations = CombinationRepo::list_all(&state.pool).await?;
    Ok(Json(combinations))
}

/// POST /api/combinations/mark-worn
///
/// Record a wear event and bump wear tracking on each referenced item.
pub async fn mark_worn(
    State(state): State<AppState>,
    Json(input): Json<CreateWearEntry>,
) -> AppResult<Json<MarkWornResult>> {
    let name = input.combination_name.as_deref().unwrap_or("Combination");

    WearHistoryRepo::create(
        &state.pool,
        name,
        &input.items,
        input.occasion.as_deref(),
        input.weather.as_deref(),
    )
    .await?;

    let items_updated = WardrobeItemRepo::mark_worn(&state.pool, &input.items, Utc::now()).await?;

    tracing::info!(
        combination = %name,
        items_updated,
        "Combination marked as worn",
    );

    Ok(Json(MarkWornResult {
        message: "Combination marked as worn",
        items_updated,
    }))
}
