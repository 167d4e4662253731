//! Implementation of the `assetlink apply` command.
//!
//! Substitutes hashed asset paths from the manifest into the HTML template
//! and rewrites the template in place.

use anyhow::{Context, Result};
use tracing::debug;

use assetlink_lib::paths::display_path;
use assetlink_lib::rewrite::rewrite;

use super::RewriteArgs;
use crate::output::{OutputFormat, format_count, print_info, print_json, print_success};

/// Execute the apply command.
///
/// The library logs each inserted asset path; this prints the summary.
/// Re-running on an already rewritten template leaves it untouched.
pub fn cmd_apply(args: RewriteArgs, output: OutputFormat) -> Result<()> {
  let options = args.into_options(false);
  let build_dir = options.build_dir.clone();
  debug!(build_dir = %build_dir.display(), rules = options.substitutions.len(), "apply options resolved");

  let report = rewrite(&options).with_context(|| format!("Failed to link assets in {}", build_dir.display()))?;

  if output.is_json() {
    return print_json(&report);
  }

  let template = display_path(&report.template);
  if report.written {
    print_success(&format!(
      "Rewrote {} ({} replaced)",
      template.display(),
      format_count(report.total_occurrences(), "placeholder")
    ));
  } else {
    print_info(&format!("{} is already up to date", template.display()));
  }

  Ok(())
}
