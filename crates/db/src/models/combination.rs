//! Saved combination model and DTOs.
//!
//! The `items` column stores a JSON-serialized list of item references.
//! Saved combinations are write-and-list only; the generation endpoint
//! never reads them back.

use fitmatch_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Raw row from the `combinations` table (`items` still serialized).
#[derive(Debug, Clone, FromRow)]
pub struct CombinationRow {
    pub id: DbId,
    pub name: String,
    pub items: String,
    pub description: String,
    pub created_at: Timestamp,
}

/// A combination with its item list deserialized for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct Combination {
    pub id: DbId,
    pub name: String,
    pub items: serde_json::Value,
    pub description: String,
    pub created_at: Timestamp,
}

impl TryFrom<CombinationRow> for Combination {
    type Error = serde_json::Error;

    fn try_from(row: CombinationRow) -> Result<Self, Self::Error> {
        let items = serde_json::from_str(&row.items)?;
        Ok(Combination {
            id: row.id,
            name: row.name,
            items,
            description: row.description,
            created_at: row.created_at,
        })
    }
}

/// Request body for `POST /api/combinations`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCombination {
    pub name: Option<String>,
    /// An omitted item list stores as `[]`, not JSON `null`.
    #[serde(default = "empty_items")]
    pub items: serde_json::Value,
    pub description: Option<String>,
}

fn empty_items() -> serde_json::Value {
    serde_json::Value::Array(Vec::new())
}
