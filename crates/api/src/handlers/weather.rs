//! Handler for the simulated weather report.

use axum::Json;
use chrono::{Datelike, Utc};
use fitmatch_core::weather::{simulate_weather, WeatherReport};

use crate::error::AppResult;

/// GET /api/weather
///
/// Synthesized from the current month; there is no external weather API.
pub async fn current() -> AppResult<Json<WeatherReport>> {
    let mut rng = rand::rng();
    let report = simulate_weather(Utc::now().month(), &mut rng);
    Ok(Json(report))
}
