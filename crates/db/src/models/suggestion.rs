//! Purchase suggestion model and DTOs.

use fitmatch_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `suggestions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Suggestion {
    pub id: DbId,
    pub combination_id: Option<DbId>,
    pub missing_item: Option<String>,
    pub purchase_link: Option<String>,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

/// Request body for `POST /api/suggestions/missing`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSuggestion {
    pub combination_id: Option<DbId>,
    pub missing_item: Option<String>,
    pub purchase_link: Option<String>,
    pub description: Option<String>,
}
