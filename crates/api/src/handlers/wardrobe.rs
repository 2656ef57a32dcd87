//! Handlers for the `/wardrobe` resource.
//!
//! Items arrive as multipart uploads (image file plus text metadata) and
//! support list and delete. Deleting reports a change count instead of
//! 404-ing on unknown ids.

use axum::extract::{Multipart, Path, State};
use axum::Json;
use fitmatch_core::types::DbId;
use fitmatch_db::models::wardrobe_item::{CreateWardrobeItem, WardrobeItem};
use fitmatch_db::repositories::WardrobeItemRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::upload;

/// Response for `DELETE /api/wardrobe/{id}`.
#[derive(Debug, Serialize)]
pub struct DeleteResult {
    pub message: &'static str,
    pub changes: u64,
}

/// POST /api/wardrobe/upload
///
/// Multipart form: an `image` file part plus optional `name`, `category`,
/// `color`, `style`, `price`, and `season` text parts. Missing file is 400;
/// missing text fields get defaults.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<WardrobeItem>> {
    let mut image: Option<(String, Vec<u8>)> = None;
    let mut name = None;
    let mut category = None;
    let mut color = None;
    let mut style = None;
    let mut price_raw = None;
    let mut season = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let field_name = field.name().unwrap_or_default().to_string();

        if field_name == "image" {
            let filename = field.file_name().unwrap_or("upload").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            image = Some((filename, data.to_vec()));
            continue;
        }

        let value = field
            .text()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        match field_name.as_str() {
            "name" => name = Some(value),
            "category" => category = Some(value),
            "color" => color = Some(value),
            "style" => style = Some(value),
            "price" => price_raw = Some(value),
            "season" => season = Some(value),
            _ => {}
        }
    }

    let (filename, data) =
        image.ok_or_else(|| AppError::BadRequest("No file uploaded".to_string()))?;

    let price = match price_raw.as_deref() {
        Some(raw) if !raw.trim().is_empty() => Some(
            raw.trim()
                .parse::<f64>()
                .map_err(|_| AppError::BadRequest(format!("Invalid price '{raw}'")))?,
        ),
        _ => None,
    };

    let stored = upload::save_upload(&state.config.upload_dir, &filename, &data)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to store upload: {e}")))?;

    let input = CreateWardrobeItem {
        name: name.unwrap_or_else(|| "Untitled Item".to_string()),
        category: category.unwrap_or_else(|| "other".to_string()),
        color: color.unwrap_or_else(|| "unknown".to_string()),
        style: style.unwrap_or_else(|| "casual".to_string()),
        image_url: format!("/uploads/{stored}"),
        price,
        season,
    };

    let item = WardrobeItemRepo::create(&state.pool, &input).await?;

    tracing::info!(
        item_id = item.id,
        category = %item.category,
        "Wardrobe item uploaded",
    );

    Ok(Json(item))
}

/// GET /api/wardrobe
///
/// List all items, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<WardrobeItem>>> {
    let items = WardrobeItemRepo::list_all(&state.pool).await?;
    Ok(Json(items))
}

/// DELETE /api/wardrobe/{id}
///
/// Reports the number of rows removed; deleting an unknown id is not an
/// error, just `changes: 0`.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeleteResult>> {
    let changes = WardrobeItemRepo::delete(&state.pool, id).await?;

    tracing::info!(item_id = id, changes, "Wardrobe item delete requested");

    Ok(Json(DeleteResult {
        message: "Item deleted",
        changes,
    }))
}
