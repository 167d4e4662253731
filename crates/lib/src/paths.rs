use std::path::{Path, PathBuf};

use crate::consts::{BUILD_DIR_ENV, DEFAULT_BUILD_DIR, MANIFEST_FILENAME};

/// Returns the build output directory.
///
/// Uses `ASSETLINK_BUILD_DIR` when set and non-empty, otherwise `build`
/// relative to the working directory.
pub fn build_dir() -> PathBuf {
  std::env::var(BUILD_DIR_ENV)
    .ok()
    .filter(|dir| !dir.is_empty())
    .map(PathBuf::from)
    .unwrap_or_else(|| PathBuf::from(DEFAULT_BUILD_DIR))
}

/// Returns the default asset manifest path inside `build_dir`.
pub fn manifest_path(build_dir: &Path) -> PathBuf {
  build_dir.join(MANIFEST_FILENAME)
}

/// Canonicalize for display, falling back to the path as given.
pub fn display_path(path: &Path) -> PathBuf {
  dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
