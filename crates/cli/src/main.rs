mod cmd;
mod output;

use std::io::IsTerminal;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cmd::{RewriteArgs, SourceArgs, cmd_apply, cmd_manifest, cmd_plan};
use output::OutputFormat;

/// assetlink - Link content-hashed bundles into static extension pages
#[derive(Parser)]
#[command(name = "assetlink")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable debug logging (RUST_LOG takes precedence)
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Substitute asset paths into the template, rewriting it in place
  Apply {
    #[command(flatten)]
    args: RewriteArgs,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "text")]
    output: OutputFormat,
  },

  /// Show what apply would substitute without writing anything
  Plan {
    #[command(flatten)]
    args: RewriteArgs,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "text")]
    output: OutputFormat,
  },

  /// List the entries of the asset manifest
  Manifest {
    #[command(flatten)]
    source: SourceArgs,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "text")]
    output: OutputFormat,
  },
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "info" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
    .with_writer(std::io::stderr)
    .with_ansi(std::io::stderr().is_terminal())
    .with_target(false)
    .without_time()
    .init();

  match cli.command {
    Commands::Apply { args, output } => cmd_apply(args, output),
    Commands::Plan { args, output } => cmd_plan(args, output),
    Commands::Manifest { source, output } => cmd_manifest(source, output),
  }
}
