//! Implementation of the `assetlink plan` command.

use anyhow::{Context, Result};
use owo_colors::{OwoColorize, Stream};
use tracing::debug;

use assetlink_lib::paths::display_path;
use assetlink_lib::rewrite::rewrite;

use super::RewriteArgs;
use crate::output::{OutputFormat, format_count, print_info, print_json, symbols};

/// Resolve every rule and report what apply would do, without writing.
pub fn cmd_plan(args: RewriteArgs, output: OutputFormat) -> Result<()> {
  let options = args.into_options(true);
  let build_dir = options.build_dir.clone();
  debug!(build_dir = %build_dir.display(), rules = options.substitutions.len(), "plan options resolved");

  let report = rewrite(&options).with_context(|| format!("Failed to plan asset links in {}", build_dir.display()))?;

  if output.is_json() {
    return print_json(&report);
  }

  println!("Template: {}", display_path(&report.template).display());
  for replaced in &report.replacements {
    let sub = &replaced.substitution;
    println!(
      "  {} {} {} {}",
      sub.placeholder,
      symbols::ARROW.if_supports_color(Stream::Stdout, |s| s.cyan()),
      sub.path,
      format!("({})", format_count(replaced.occurrences, "occurrence")).if_supports_color(Stream::Stdout, |s| s.dimmed())
    );
  }
  println!();

  if report.changed {
    print_info(&format!(
      "Would replace {}",
      format_count(report.total_occurrences(), "placeholder")
    ));
  } else {
    print_info("No changes would be made");
  }

  Ok(())
}
