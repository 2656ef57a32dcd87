//! Handlers for user preferences.
//!
//! Preferences are append-only; reads return the most recent row, or an
//! empty object when nothing has been submitted yet.

use axum::extract::State;
use axum::Json;
use fitmatch_db::models::preference::{CreatePreference, UserPreference};
use fitmatch_db::repositories::PreferenceRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/preferences
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePreference>,
) -> AppResult<Json<UserPreference>> {
    let style = input.style_preference.as_deref().unwrap_or("casual");
    let color = input.color_preference.as_deref().unwrap_or("all");
    let occasion = input.occasion_preference.as_deref().unwrap_or("daily");

    let preference = PreferenceRepo::create(&state.pool, style, color, occasion).await?;

    tracing::info!(preference_id = preference.id, "Preference saved");

    Ok(Json(preference))
}

/// GET /api/preferences
///
/// The most recent preference row, or `{}` when none exist.
pub async fn latest(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    let preference = PreferenceRepo::latest(&state.pool).await?;

    let body = match preference {
        Some(row) => serde_json::to_value(row)
            .map_err(|e| AppError::InternalError(format!("Failed to serialize preference: {e}")))?,
        None => serde_json::json!({}),
    };

    Ok(Json(body))
}
