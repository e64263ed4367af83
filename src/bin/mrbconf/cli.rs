//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use mrbconf::EmitFormat;

/// mrbconf - build configuration for an embedded mruby runtime
#[derive(Parser)]
#[command(name = "mrbconf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the build directive for this host
    Show(ShowArgs),

    /// Render the build directive for the build orchestrator
    Emit(EmitArgs),

    /// List the core gems compiled into the runtime
    Gems,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Inputs shared by commands that compute a directive.
#[derive(Args)]
pub struct DirectiveArgs {
    /// Platform identifier to configure for (defaults to the host)
    #[arg(long, env = "MRBCONF_PLATFORM")]
    pub platform: Option<String>,

    /// Build type to use instead of reading it from the environment
    #[arg(long)]
    pub build_type: Option<String>,
}

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub directive: DirectiveArgs,
}

#[derive(Args)]
pub struct EmitArgs {
    #[command(flatten)]
    pub directive: DirectiveArgs,

    /// Output format (ruby, json)
    #[arg(short, long)]
    pub format: Option<EmitFormat>,

    /// mruby checkout, relative to the rendered script
    #[arg(long)]
    pub mruby_dir: Option<String>,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
