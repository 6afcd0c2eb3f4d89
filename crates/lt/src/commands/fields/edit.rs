//! `lt fields list|add|remove` command implementations.

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::Args;
use lt_fields::{FieldRef, FieldSelection};

use super::{load_config, save_path};
use crate::commands::write_output;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the list command.
#[derive(Args)]
pub(crate) struct ListArgs {
    /// Path to configuration file (default: auto-discover linkify.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl ListArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = load_config(self.config.as_deref())?;
        let selection = config.selection();
        if selection.is_empty() {
            Output::new().info("No fields selected for autolinking.");
            return Ok(());
        }
        write_output(&format_selection(&selection))?;
        Ok(())
    }
}

/// Direction of a selection edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Edit {
    Add,
    Remove,
}

/// Arguments for the add and remove commands.
#[derive(Args)]
pub(crate) struct EditArgs {
    /// Fields as `Set/Element`, e.g. "Dublin Core/Description".
    #[arg(required = true)]
    fields: Vec<FieldRef>,

    /// Path to configuration file (default: auto-discover linkify.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl EditArgs {
    /// Apply the edit and save the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or saved.
    pub(crate) fn execute(self, edit: Edit) -> Result<(), CliError> {
        let output = Output::new();
        let mut config = load_config(self.config.as_deref())?;

        let mut selection = config.selection();
        let changed = apply_edit(&mut selection, &self.fields, edit);
        for field in &self.fields {
            if !changed.contains(field) {
                output.warning(&match edit {
                    Edit::Add => format!("{field} is already selected"),
                    Edit::Remove => format!("{field} is not selected"),
                });
            }
        }
        if changed.is_empty() {
            return Ok(());
        }

        config.set_selection(&selection);
        let path = save_path(&config, self.config.as_deref());
        config.save(&path)?;

        let verb = match edit {
            Edit::Add => "Added",
            Edit::Remove => "Removed",
        };
        output.success(&format!(
            "{verb} {} field(s); {} selected in {}",
            changed.len(),
            selection.len(),
            path.display()
        ));
        Ok(())
    }
}

/// Apply an edit, returning the fields that actually changed.
fn apply_edit(selection: &mut FieldSelection, fields: &[FieldRef], edit: Edit) -> Vec<FieldRef> {
    fields
        .iter()
        .filter(|field| match edit {
            Edit::Add => selection.insert((*field).clone()),
            Edit::Remove => selection.remove(field),
        })
        .cloned()
        .collect()
}

/// One field per line, in selection order.
fn format_selection(selection: &FieldSelection) -> String {
    let mut out = String::new();
    for field in selection {
        let _ = writeln!(out, "{field}");
    }
    out
}
