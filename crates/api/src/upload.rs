//! Uploaded image storage.
//!
//! Files land in the configured upload directory under a
//! `{millis}-{random}` name that keeps the original extension; the same
//! directory is served statically under `/uploads`. No cleanup or size
//! limits, matching the upload model this service inherits.

use std::path::Path;

use rand::Rng;

/// Write uploaded bytes to the upload directory.
///
/// Returns the generated filename (without directory). The directory is
/// created if missing.
pub async fn save_upload(
    upload_dir: &Path,
    original_name: &str,
    data: &[u8],
) -> std::io::Result<String> {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix: u32 = rand::rng().random_range(0..1_000_000_000);

    let extension = Path::new(original_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default();

    let filename = format!("{millis}-{suffix}{extension}");

    tokio::fs::create_dir_all(upload_dir).await?;
    tokio::fs::write(upload_dir.join(&filename), data).await?;

    Ok(filename)
}
