//! Wear history model and DTOs (usage analytics).

use fitmatch_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `wear_history` table (`item_ids` still serialized).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WearEntry {
    pub id: DbId,
    pub combination_name: String,
    pub item_ids: String,
    pub occasion: Option<String>,
    pub weather: Option<String>,
    pub worn_at: Timestamp,
}

/// Request body for `POST /api/combinations/mark-worn`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWearEntry {
    pub combination_name: Option<String>,
    pub items: Vec<DbId>,
    pub occasion: Option<String>,
    pub weather: Option<String>,
}
