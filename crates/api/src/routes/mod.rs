//! Route table for the REST surface.

pub mod health;

use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{combinations, preferences, statistics, suggestions, wardrobe, weather};
use crate::state::AppState;

/// Routes mounted under `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Wardrobe items. Uploads carry full-size photos, so the default
        // body limit does not apply to them.
        .route(
            "/wardrobe/upload",
            post(wardrobe::upload).layer(DefaultBodyLimit::disable()),
        )
        .route("/wardrobe", get(wardrobe::list))
        .route("/wardrobe/{id}", delete(wardrobe::remove))
        // Saved combinations and wear tracking
        .route(
            "/combinations",
            post(combinations::create).get(combinations::list),
        )
        .route("/combinations/mark-worn", post(combinations::mark_worn))
        // Suggestions
        .route("/suggestions/generate", post(suggestions::generate))
        .route("/suggestions/missing", post(suggestions::missing))
        .route("/suggestions/smart", post(suggestions::smart))
        // Preferences
        .route(
            "/preferences",
            post(preferences::create).get(preferences::latest),
        )
        // Weather and analytics
        .route("/weather", get(weather::current))
        .route("/statistics", get(statistics::overview))
}
