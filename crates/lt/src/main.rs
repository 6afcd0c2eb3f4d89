//! linkify-text CLI.
//!
//! Provides commands for:
//! - `linkify`: Autolink URLs and emails in plain text
//! - `render`: Render a field value through the configured render hook
//! - `fields`: Inspect and edit which fields get autolinked

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{FieldsCommand, LinkifyArgs, RenderArgs};
use output::Output;

/// linkify-text - turn plain-text URLs and emails into links.
#[derive(Parser)]
#[command(name = "lt", version, about)]
struct Cli {
    /// Enable verbose output (info-level logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Autolink a text file or stdin.
    Linkify(LinkifyArgs),
    /// Render a field value as the display pipeline would.
    Render(RenderArgs),
    /// Manage the fields selected for autolinking.
    #[command(subcommand)]
    Fields(FieldsCommand),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise RUST_LOG decides (ERROR when unset)
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Linkify(args) => args.execute(),
        Commands::Render(args) => args.execute(),
        Commands::Fields(cmd) => cmd.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
