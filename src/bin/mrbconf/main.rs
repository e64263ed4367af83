//! mrbconf CLI - build configuration for an embedded mruby runtime

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("mrbconf=debug")
    } else {
        EnvFilter::new("mrbconf=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::Show(args) => commands::show::execute(args),
        Commands::Emit(args) => commands::emit::execute(args),
        Commands::Gems => commands::gems::execute(),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
