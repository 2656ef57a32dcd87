//! Wardrobe item model and DTOs.

use fitmatch_core::category::WardrobePiece;
use fitmatch_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `wardrobe_items` table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct WardrobeItem {
    pub id: DbId,
    pub name: String,
    /// Free text, loosely keyword-matched into category groups.
    pub category: String,
    pub color: String,
    pub style: String,
    pub image_url: String,
    pub price: Option<f64>,
    pub season: Option<String>,
    pub wear_count: i64,
    pub last_worn: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl WardrobePiece for WardrobeItem {
    fn item_name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn item_category(&self) -> &str {
        &self.category
    }

    fn item_color(&self) -> &str {
        &self.color
    }

    fn item_style(&self) -> &str {
        &self.style
    }
}

/// Fields for inserting a wardrobe item. Built by the upload handler from
/// the multipart form, with defaults already applied.
#[derive(Debug, Clone)]
pub struct CreateWardrobeItem {
    pub name: String,
    pub category: String,
    pub color: String,
    pub style: String,
    pub image_url: String,
    pub price: Option<f64>,
    pub season: Option<String>,
}
