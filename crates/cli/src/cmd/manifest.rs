use anyhow::{Context, Result};

use assetlink_lib::manifest::AssetManifest;
use assetlink_lib::paths::display_path;

use super::SourceArgs;
use crate::output::{OutputFormat, format_count, print_info, print_json, print_stat, print_success};

pub fn cmd_manifest(source: SourceArgs, output: OutputFormat) -> Result<()> {
  let path = source.manifest_path();
  let manifest = AssetManifest::load_file(&path).with_context(|| format!("Failed to load {}", path.display()))?;

  if output.is_json() {
    return print_json(&manifest);
  }

  print_success(&format!(
    "{} ({})",
    display_path(&path).display(),
    format_count(manifest.files.len(), "file")
  ));
  for (name, emitted) in &manifest.files {
    print_stat(name, emitted);
  }

  if !manifest.entrypoints.is_empty() {
    println!();
    print_info("Entrypoints:");
    for entry in &manifest.entrypoints {
      println!("  {}", entry);
    }
  }

  Ok(())
}
