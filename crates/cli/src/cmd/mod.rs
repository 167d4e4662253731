mod apply;
mod manifest;
mod plan;

use std::path::PathBuf;

use clap::Args;

use assetlink_lib::consts::{MANIFEST_FILENAME, TEMPLATE_FILENAME};
use assetlink_lib::paths;
use assetlink_lib::rewrite::RewriteOptions;
use assetlink_lib::substitute::{Substitution, default_substitutions};

pub use apply::cmd_apply;
pub use manifest::cmd_manifest;
pub use plan::cmd_plan;

/// Where to find the asset manifest.
#[derive(Args, Debug)]
pub struct SourceArgs {
  /// Build output directory [default: $ASSETLINK_BUILD_DIR, then ./build]
  #[arg(short, long)]
  pub build_dir: Option<PathBuf>,

  /// Asset manifest file name inside the build directory
  #[arg(short, long, default_value = MANIFEST_FILENAME)]
  pub manifest: String,
}

impl SourceArgs {
  pub fn build_dir(&self) -> PathBuf {
    self.build_dir.clone().unwrap_or_else(paths::build_dir)
  }

  pub fn manifest_path(&self) -> PathBuf {
    self.build_dir().join(&self.manifest)
  }
}

/// Template and substitution rules for apply/plan.
#[derive(Args, Debug)]
pub struct RewriteArgs {
  #[command(flatten)]
  pub source: SourceArgs,

  /// HTML template file name inside the build directory
  #[arg(short, long, default_value = TEMPLATE_FILENAME)]
  pub template: String,

  /// Substitution rule PLACEHOLDER=ASSET (repeatable; replaces the default
  /// options-page rules)
  #[arg(short, long = "substitute", value_name = "PLACEHOLDER=ASSET")]
  pub substitutions: Vec<Substitution>,
}

impl RewriteArgs {
  pub fn into_options(self, dry_run: bool) -> RewriteOptions {
    let substitutions = if self.substitutions.is_empty() {
      default_substitutions()
    } else {
      self.substitutions
    };

    RewriteOptions {
      build_dir: self.source.build_dir(),
      manifest_name: self.source.manifest,
      template_name: self.template,
      substitutions,
      dry_run,
    }
  }
}
