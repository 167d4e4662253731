//! Placeholder substitution for asset paths.
//!
//! A [`Substitution`] pairs a literal placeholder token in the HTML template
//! with a logical asset name from the manifest. Rules are resolved against
//! the manifest first, so a missing asset is reported before any template is
//! touched, then applied to the template text in order.
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use assetlink_lib::manifest::AssetManifest;
//! use assetlink_lib::substitute::{Substitution, apply, resolve};
//!
//! let manifest = AssetManifest::parse(
//!   r#"{"files": {"options.js": "/static/js/options.abc.js"}}"#,
//!   Path::new("asset-manifest.json"),
//! ).unwrap();
//! let rules = [Substitution::new("<options_js_path>", "options.js")];
//! let resolved = resolve(&manifest, &rules).unwrap();
//!
//! let applied = apply(r#"<script src="<options_js_path>"></script>"#, &resolved);
//! assert_eq!(applied.output, r#"<script src="./static/js/options.abc.js"></script>"#);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::consts::{
  OPTIONS_ASSET, OPTIONS_PLACEHOLDER, RELATIVE_PREFIX, RUNTIME_OPTIONS_ASSET, RUNTIME_OPTIONS_PLACEHOLDER,
};
use crate::manifest::AssetManifest;

/// Errors that can occur while building or resolving substitution rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubstituteError {
  #[error("invalid substitution '{0}': expected PLACEHOLDER=ASSET")]
  InvalidRule(String),

  #[error("substitution for '{asset}' has an empty placeholder")]
  EmptyPlaceholder { asset: String },

  #[error("asset manifest has no entry for '{asset}' (needed by {placeholder})")]
  MissingAsset { placeholder: String, asset: String },
}

/// Replace `placeholder` with the path of manifest entry `asset`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Substitution {
  pub placeholder: String,
  pub asset: String,
}

impl Substitution {
  pub fn new(placeholder: impl Into<String>, asset: impl Into<String>) -> Self {
    Self {
      placeholder: placeholder.into(),
      asset: asset.into(),
    }
  }

  /// Parse a `PLACEHOLDER=ASSET` rule.
  ///
  /// Splits on the last `=`, so placeholders may themselves contain `=`.
  pub fn parse(rule: &str) -> Result<Self, SubstituteError> {
    let (placeholder, asset) = rule
      .rsplit_once('=')
      .ok_or_else(|| SubstituteError::InvalidRule(rule.to_string()))?;

    if placeholder.is_empty() || asset.is_empty() {
      return Err(SubstituteError::InvalidRule(rule.to_string()));
    }

    Ok(Self::new(placeholder, asset))
  }
}

impl FromStr for Substitution {
  type Err = SubstituteError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse(s)
  }
}

impl fmt::Display for Substitution {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}={}", self.placeholder, self.asset)
  }
}

/// The rules for the extension options page: runtime chunk first, then the
/// page bundle.
pub fn default_substitutions() -> Vec<Substitution> {
  vec![
    Substitution::new(RUNTIME_OPTIONS_PLACEHOLDER, RUNTIME_OPTIONS_ASSET),
    Substitution::new(OPTIONS_PLACEHOLDER, OPTIONS_ASSET),
  ]
}

/// A rule whose asset has been looked up in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedSubstitution {
  pub placeholder: String,
  pub asset: String,
  /// Path as listed in the manifest.
  pub emitted: String,
  /// Relative path written into the template.
  pub path: String,
}

/// Prefix a root-relative manifest path with the relative-path marker.
pub fn relative_path(path: &str) -> String {
  format!("{RELATIVE_PREFIX}{path}")
}

/// Look up every rule's asset in the manifest.
///
/// # Errors
///
/// Returns [`SubstituteError::EmptyPlaceholder`] for a rule with an empty
/// placeholder, and [`SubstituteError::MissingAsset`] for the first rule whose
/// asset has no manifest entry.
pub fn resolve(manifest: &AssetManifest, rules: &[Substitution]) -> Result<Vec<ResolvedSubstitution>, SubstituteError> {
  rules
    .iter()
    .map(|rule| {
      if rule.placeholder.is_empty() {
        return Err(SubstituteError::EmptyPlaceholder {
          asset: rule.asset.clone(),
        });
      }
      let emitted = manifest
        .get(&rule.asset)
        .ok_or_else(|| SubstituteError::MissingAsset {
          placeholder: rule.placeholder.clone(),
          asset: rule.asset.clone(),
        })?;
      Ok(ResolvedSubstitution {
        placeholder: rule.placeholder.clone(),
        asset: rule.asset.clone(),
        emitted: emitted.to_string(),
        path: relative_path(emitted),
      })
    })
    .collect()
}

/// Result of applying substitutions to a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
  pub output: String,
  /// Occurrences replaced, one entry per rule in rule order.
  pub counts: Vec<usize>,
}

impl Applied {
  pub fn total(&self) -> usize {
    self.counts.iter().sum()
  }
}

/// Replace every occurrence of each placeholder, in rule order.
///
/// Text outside the placeholders is left untouched, so applying to an
/// already-substituted template returns it unchanged.
pub fn apply(template: &str, resolved: &[ResolvedSubstitution]) -> Applied {
  let mut output = template.to_string();
  let mut counts = Vec::with_capacity(resolved.len());

  for sub in resolved {
    let count = output.matches(sub.placeholder.as_str()).count();
    if count > 0 {
      output = output.replace(&sub.placeholder, &sub.path);
    }
    counts.push(count);
  }

  Applied { output, counts }
}
