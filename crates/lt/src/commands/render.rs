//! `lt render` command implementation.

use std::path::PathBuf;

use clap::Args;
use lt_config::Config;
use lt_fields::{FieldRef, FieldRenderer};
use lt_linkify::Linkifier;

use super::{read_input, write_output};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Field whose value is rendered, as `Set/Element`.
    field: FieldRef,

    /// Input file holding the field value (default: stdin).
    input: Option<PathBuf>,

    /// The stored value is HTML.
    #[arg(long)]
    html: bool,

    /// Path to configuration file (default: auto-discover linkify.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or input cannot be read.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref(), None)?;

        let renderer = FieldRenderer::new(
            config.selection(),
            Linkifier::new(config.linkify_options().clone()),
        );
        if !renderer.selection().contains(&self.field) {
            output.warning(&format!(
                "Field {} is not selected for autolinking; output is unchanged",
                self.field
            ));
        }

        let text = read_input(self.input.as_deref())?;
        let rendered = renderer.render(&self.field, &text, self.html);
        write_output(&rendered)?;
        Ok(())
    }
}
