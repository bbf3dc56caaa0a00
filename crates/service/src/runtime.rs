//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` to keep binary crates importing
//! `service::runtime::ensure_env` without depending directly on `common`.

use std::path::Path;

/// Ensure the data and image directories exist before serving.
pub async fn ensure_env(data_dir: &Path, images_dir: &Path) -> anyhow::Result<()> {
    common::env::ensure_env(data_dir, images_dir).await
}
