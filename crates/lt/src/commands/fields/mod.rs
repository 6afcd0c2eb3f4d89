//! `lt fields` commands.

mod catalog;
mod edit;

use std::path::{Path, PathBuf};

use clap::Subcommand;
use lt_config::{CONFIG_FILENAME, Config};

use crate::error::CliError;

use catalog::{FormArgs, SelectArgs};
use edit::{Edit, EditArgs, ListArgs};

/// Field selection commands.
#[derive(Subcommand)]
pub(crate) enum FieldsCommand {
    /// List the fields selected for autolinking.
    List(ListArgs),
    /// Select fields for autolinking.
    Add(EditArgs),
    /// Stop autolinking fields.
    Remove(EditArgs),
    /// Replace the selection with catalog elements, by id.
    Select(SelectArgs),
    /// Show the selection form for a catalog.
    Form(FormArgs),
}

impl FieldsCommand {
    /// Execute the fields subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if the subcommand fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        match self {
            Self::List(args) => args.execute(),
            Self::Add(args) => args.execute(Edit::Add),
            Self::Remove(args) => args.execute(Edit::Remove),
            Self::Select(args) => args.execute(),
            Self::Form(args) => args.execute(),
        }
    }
}

/// Load the config, or start from defaults when none exists yet.
///
/// An explicit path that does not exist yet is allowed here: editing
/// commands create it on save.
fn load_config(path: Option<&Path>) -> Result<Config, CliError> {
    match path {
        Some(path) if !path.exists() => {
            tracing::info!(path = %path.display(), "Config file does not exist yet, starting empty");
            Ok(Config::default())
        }
        _ => Ok(Config::load(path, None)?),
    }
}

/// Where an edited config is written: the loaded file, or `linkify.toml`
/// in the current directory when nothing was loaded.
fn save_path(config: &Config, explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| config.config_path.clone())
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME))
}
