//! In-place rewrite of the HTML template.
//!
//! This module provides the core logic for `assetlink apply` and
//! `assetlink plan`:
//! - Loads the asset manifest from the build directory
//! - Resolves every substitution rule against it
//! - Reads the template, substitutes placeholders, and writes it back
//!
//! Every precondition is checked before the next step runs. A manifest
//! without `files` halts before the template is read, and a missing asset
//! halts before anything is written.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::consts::{MANIFEST_FILENAME, TEMPLATE_FILENAME};
use crate::manifest::{AssetManifest, ManifestError};
use crate::substitute::{ResolvedSubstitution, SubstituteError, Substitution, apply, default_substitutions, resolve};

/// Errors that can occur during a rewrite.
#[derive(Debug, Error)]
pub enum RewriteError {
  #[error(transparent)]
  Manifest(#[from] ManifestError),

  #[error(transparent)]
  Substitute(#[from] SubstituteError),

  #[error("template not found: {}", path.display())]
  TemplateNotFound { path: PathBuf },

  #[error("failed to read template {}: {source}", path.display())]
  ReadTemplate { path: PathBuf, source: io::Error },

  #[error("failed to write template {}: {source}", path.display())]
  WriteTemplate { path: PathBuf, source: io::Error },
}

/// Options for a rewrite.
#[derive(Debug, Clone)]
pub struct RewriteOptions {
  /// Directory holding the manifest and template
  pub build_dir: PathBuf,
  /// Manifest file name inside `build_dir`
  pub manifest_name: String,
  /// Template file name inside `build_dir`
  pub template_name: String,
  /// Rules applied in order
  pub substitutions: Vec<Substitution>,
  /// Resolve and substitute without writing
  pub dry_run: bool,
}

impl RewriteOptions {
  /// Default file names and rules for `build_dir`.
  pub fn new(build_dir: impl Into<PathBuf>) -> Self {
    Self {
      build_dir: build_dir.into(),
      manifest_name: MANIFEST_FILENAME.to_string(),
      template_name: TEMPLATE_FILENAME.to_string(),
      substitutions: default_substitutions(),
      dry_run: false,
    }
  }

  pub fn manifest_path(&self) -> PathBuf {
    self.build_dir.join(&self.manifest_name)
  }

  pub fn template_path(&self) -> PathBuf {
    self.build_dir.join(&self.template_name)
  }
}

/// Per-rule outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplacedPlaceholder {
  #[serde(flatten)]
  pub substitution: ResolvedSubstitution,
  /// Occurrences found in the template
  pub occurrences: usize,
}

/// Result of a rewrite.
#[derive(Debug, Clone, Serialize)]
pub struct RewriteReport {
  pub template: PathBuf,
  pub replacements: Vec<ReplacedPlaceholder>,
  /// Output differs from the template as read
  pub changed: bool,
  /// Template was rewritten on disk
  pub written: bool,
  pub dry_run: bool,
}

impl RewriteReport {
  pub fn total_occurrences(&self) -> usize {
    self.replacements.iter().map(|r| r.occurrences).sum()
  }
}

/// Substitute asset paths into the template, rewriting it in place.
///
/// If the substituted output equals the template (no placeholders left), the
/// file is not touched.
///
/// # Errors
///
/// Returns an error if:
/// - the manifest is missing, malformed, or has no `files` property
/// - any rule's asset is absent from the manifest
/// - the template cannot be read or written
pub fn rewrite(options: &RewriteOptions) -> Result<RewriteReport, RewriteError> {
  let manifest_path = options.manifest_path();
  let template_path = options.template_path();

  let manifest = AssetManifest::load_file(&manifest_path)?;
  let resolved = resolve(&manifest, &options.substitutions)?;

  for sub in &resolved {
    info!(asset = %sub.asset, emitted = %sub.emitted, "inserting {} path: {}", sub.asset, sub.emitted);
  }

  let template = read_template(&template_path)?;
  let applied = apply(&template, &resolved);

  for (sub, count) in resolved.iter().zip(&applied.counts) {
    if *count == 0 {
      warn!(placeholder = %sub.placeholder, template = %template_path.display(), "placeholder not found in template");
    }
  }

  let changed = applied.output != template;
  let written = changed && !options.dry_run;

  if written {
    write_in_place(&template_path, &applied.output)?;
    info!(template = %template_path.display(), replaced = applied.total(), "template rewritten");
  } else if !changed {
    debug!(template = %template_path.display(), "template already up to date");
  } else {
    info!("dry run - template not written");
  }

  let replacements = resolved
    .into_iter()
    .zip(applied.counts)
    .map(|(substitution, occurrences)| ReplacedPlaceholder {
      substitution,
      occurrences,
    })
    .collect();

  Ok(RewriteReport {
    template: template_path,
    replacements,
    changed,
    written,
    dry_run: options.dry_run,
  })
}

fn read_template(path: &Path) -> Result<String, RewriteError> {
  fs::read_to_string(path).map_err(|e| {
    if e.kind() == io::ErrorKind::NotFound {
      RewriteError::TemplateNotFound {
        path: path.to_path_buf(),
      }
    } else {
      RewriteError::ReadTemplate {
        path: path.to_path_buf(),
        source: e,
      }
    }
  })
}

/// Replace the contents of `path`, following symlinks and keeping the
/// file's permissions.
///
/// The new content goes to a temp file next to the resolved target, which is
/// then persisted over it. The temp file is removed if anything fails.
fn write_in_place(path: &Path, content: &str) -> Result<(), RewriteError> {
  let to_err = |source: io::Error| RewriteError::WriteTemplate {
    path: path.to_path_buf(),
    source,
  };

  let target = dunce::canonicalize(path).map_err(to_err)?;
  let permissions = fs::metadata(&target).map_err(to_err)?.permissions();
  let dir = target.parent().unwrap_or_else(|| Path::new("."));

  let mut temp = NamedTempFile::new_in(dir).map_err(to_err)?;
  temp.write_all(content.as_bytes()).map_err(to_err)?;
  temp.as_file().set_permissions(permissions).map_err(to_err)?;
  temp.persist(&target).map_err(|e| to_err(e.error))?;
  Ok(())
}
