//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use std::path::Path;
use tracing::warn;

/// Ensure the data and image directories exist; warn when the public asset
/// directory had to be created (static image links 404 until files arrive).
pub async fn ensure_env(data_dir: &Path, images_dir: &Path) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(data_dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", data_dir.display()))?;
    if tokio::fs::metadata(images_dir).await.is_err() {
        warn!(images_dir = %images_dir.display(), "images directory not found; creating it");
    }
    tokio::fs::create_dir_all(images_dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", images_dir.display()))?;
    Ok(())
}
