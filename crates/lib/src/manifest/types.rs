//! Asset manifest types and loading.
//!
//! # Format
//!
//! ```json
//! {
//!   "files": {
//!     "options.js": "/static/js/options.3f9a1c.bundle.js",
//!     "runtime-options.js": "/static/js/runtime-options.8b2e07.bundle.js"
//!   },
//!   "entrypoints": ["static/js/runtime-options.8b2e07.bundle.js"]
//! }
//! ```
//!
//! Only `files` is required. Any other top-level keys are ignored.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::paths::manifest_path;

/// Errors that can occur while loading an asset manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
  #[error("asset manifest not found: {}", path.display())]
  NotFound { path: PathBuf },

  #[error("failed to read asset manifest {}: {source}", path.display())]
  Read { path: PathBuf, source: io::Error },

  #[error("failed to parse asset manifest {}: {source}", path.display())]
  Parse { path: PathBuf, source: serde_json::Error },

  #[error("asset manifest {} has no \"files\" property", path.display())]
  MissingFiles { path: PathBuf },
}

/// On-disk shape; `files` is optional here so its absence can be reported
/// separately from malformed JSON.
#[derive(Deserialize)]
struct RawManifest {
  files: Option<BTreeMap<String, String>>,
  #[serde(default)]
  entrypoints: Vec<String>,
}

/// Parsed asset manifest.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct AssetManifest {
  /// Logical asset name to emitted path.
  pub files: BTreeMap<String, String>,
  /// Entry chunks in load order, when the bundler emits them.
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub entrypoints: Vec<String>,
}

impl AssetManifest {
  /// Load `asset-manifest.json` from a build directory.
  pub fn load(build_dir: &Path) -> Result<Self, ManifestError> {
    Self::load_file(&manifest_path(build_dir))
  }

  /// Load a manifest from an explicit file path.
  pub fn load_file(path: &Path) -> Result<Self, ManifestError> {
    let content = fs::read_to_string(path).map_err(|e| {
      if e.kind() == io::ErrorKind::NotFound {
        ManifestError::NotFound {
          path: path.to_path_buf(),
        }
      } else {
        ManifestError::Read {
          path: path.to_path_buf(),
          source: e,
        }
      }
    })?;

    let manifest = Self::parse(&content, path)?;
    debug!(path = %path.display(), files = manifest.files.len(), "loaded asset manifest");
    Ok(manifest)
  }

  /// Parse manifest JSON. `path` is only used for error reporting.
  pub fn parse(content: &str, path: &Path) -> Result<Self, ManifestError> {
    let raw: RawManifest = serde_json::from_str(content).map_err(|e| ManifestError::Parse {
      path: path.to_path_buf(),
      source: e,
    })?;

    let files = raw.files.ok_or_else(|| ManifestError::MissingFiles {
      path: path.to_path_buf(),
    })?;

    Ok(Self {
      files,
      entrypoints: raw.entrypoints,
    })
  }

  /// Emitted path for a logical asset name.
  pub fn get(&self, name: &str) -> Option<&str> {
    self.files.get(name).map(String::as_str)
  }
}
