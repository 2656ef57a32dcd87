//! User preference model and DTOs.
//!
//! Preferences are append-only; only the most recent row is ever read.

use fitmatch_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `user_preferences` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserPreference {
    pub id: DbId,
    pub style_preference: String,
    pub color_preference: String,
    pub occasion_preference: String,
    pub created_at: Timestamp,
}

/// Request body for `POST /api/preferences`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePreference {
    pub style_preference: Option<String>,
    pub color_preference: Option<String>,
    pub occasion_preference: Option<String>,
}
