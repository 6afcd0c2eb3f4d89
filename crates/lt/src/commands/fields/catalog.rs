//! `lt fields select|form` command implementations.
//!
//! Both commands work against an element catalog exported as JSON.

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::Args;
use lt_fields::{ElementId, FieldSelection, InMemoryCatalog, SelectionForm};

use super::{load_config, save_path};
use crate::commands::write_output;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the select command.
#[derive(Args)]
pub(crate) struct SelectArgs {
    /// Element catalog JSON (`{"elements": [{"id", "set", "name"}]}`).
    #[arg(long)]
    catalog: PathBuf,

    /// Element ids to autolink; none clears the selection.
    ids: Vec<ElementId>,

    /// Path to configuration file (default: auto-discover linkify.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl SelectArgs {
    /// Replace the selection and save the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded, an id is unknown,
    /// or the configuration cannot be saved. The saved file is untouched
    /// on error.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let catalog = InMemoryCatalog::load(&self.catalog)?;
        let mut config = load_config(self.config.as_deref())?;

        let selection = FieldSelection::from_element_ids(&catalog, &self.ids)?;
        config.set_selection(&selection);
        let path = save_path(&config, self.config.as_deref());
        config.save(&path)?;

        Output::new().success(&format!(
            "Selected {} field(s) in {}",
            selection.len(),
            path.display()
        ));
        Ok(())
    }
}

/// Arguments for the form command.
#[derive(Args)]
pub(crate) struct FormArgs {
    /// Element catalog JSON (`{"elements": [{"id", "set", "name"}]}`).
    #[arg(long)]
    catalog: PathBuf,

    /// Print the form as JSON.
    #[arg(long)]
    json: bool,

    /// Path to configuration file (default: auto-discover linkify.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl FormArgs {
    /// Print the selection form.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog or configuration cannot be loaded.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let catalog = InMemoryCatalog::load(&self.catalog)?;
        let config = load_config(self.config.as_deref())?;
        let form = SelectionForm::build(&catalog, &config.selection());

        if self.json {
            let mut json = serde_json::to_string_pretty(&form)?;
            json.push('\n');
            write_output(&json)?;
        } else {
            write_output(&format_form(&form))?;
        }
        Ok(())
    }
}

/// Plain-text rendering: a heading per element set, one checkbox per element.
fn format_form(form: &SelectionForm) -> String {
    let mut out = String::new();
    for group in &form.groups {
        let _ = writeln!(out, "{}", group.set);
        for option in &group.options {
            let mark = if option.checked { 'x' } else { ' ' };
            let _ = writeln!(out, "  [{mark}] {} {}", option.id, option.name);
        }
    }
    out
}
