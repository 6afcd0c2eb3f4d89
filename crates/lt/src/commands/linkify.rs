//! `lt linkify` command implementation.

use std::path::PathBuf;

use clap::Args;
use lt_config::{CliSettings, Config};
use lt_linkify::Linkifier;

use super::{read_input, write_output};
use crate::error::CliError;

/// Arguments for the linkify command.
#[derive(Args)]
pub(crate) struct LinkifyArgs {
    /// Input file (default: stdin).
    input: Option<PathBuf>,

    /// Input is already HTML; pass it through unchanged.
    #[arg(long)]
    html: bool,

    /// Scheme for URLs written without one (overrides config).
    #[arg(long, env = "LINKIFY_DEFAULT_SCHEME")]
    default_scheme: Option<String>,

    /// Path to configuration file (default: auto-discover linkify.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl LinkifyArgs {
    /// Execute the linkify command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or input cannot be read.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            default_scheme: self.default_scheme,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let linkifier = Linkifier::new(config.linkify_options().clone());

        let text = read_input(self.input.as_deref())?;
        let linked = linkifier.linkify(&text, self.html);
        tracing::info!(
            bytes_in = text.len(),
            bytes_out = linked.len(),
            html = self.html,
            "Linkified input"
        );

        write_output(&linked)?;
        Ok(())
    }
}
