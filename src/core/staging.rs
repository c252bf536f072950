//! Output files are written next to their destination as `<name>.part` and
//! renamed into place only once complete. A failed write removes the staging
//! file and leaves whatever was at the destination untouched.

use std::path::{Path, PathBuf};

use crate::core::errors::{AppError, AppResult};

pub const STAGING_SUFFIX: &str = ".part";

pub fn staging_path(dest: &Path) -> PathBuf {
    let mut name = dest.as_os_str().to_owned();
    name.push(STAGING_SUFFIX);
    PathBuf::from(name)
}

/// Writes `bytes` to `dest` through a staging file.
pub async fn write_staged(dest: &Path, bytes: &[u8]) -> AppResult<()> {
    let staging = staging_path(dest);
    let result = match tokio::fs::write(&staging, bytes).await {
        Ok(()) => promote(&staging, dest).await,
        Err(err) => Err(err.into()),
    };
    if result.is_err() {
        discard(&staging).await;
    }
    result
}

/// Moves a finished staging file over `dest`.
pub async fn promote(staging: &Path, dest: &Path) -> AppResult<()> {
    tokio::fs::rename(staging, dest)
        .await
        .map_err(|err| AppError::Io(format!("cannot move {} into place: {err}", dest.display())))
}

pub async fn discard(staging: &Path) {
    let _ = tokio::fs::remove_file(staging).await;
}
