//! Settings form model.
//!
//! Elements are grouped by element set, in the order the catalog lists them,
//! and every option carries whether it is currently selected. Rendering the
//! form is left to the caller.

use std::collections::HashSet;

use serde::Serialize;

use crate::catalog::{ElementCatalog, ElementId};
use crate::field::FieldSelection;

/// One checkbox in the settings form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FormOption {
    pub id: ElementId,
    pub name: String,
    pub checked: bool,
}

/// Checkboxes for the elements of one element set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FormGroup {
    pub set: String,
    pub options: Vec<FormOption>,
}

/// Grouped element checkboxes for choosing the autolinked fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SelectionForm {
    pub groups: Vec<FormGroup>,
}

impl SelectionForm {
    /// Build the form for `catalog`, checking the elements in `selection`.
    #[must_use]
    pub fn build(catalog: &dyn ElementCatalog, selection: &FieldSelection) -> Self {
        let checked: HashSet<ElementId> = selection.element_ids(catalog).into_iter().collect();
        let mut groups: Vec<FormGroup> = Vec::new();

        for element in catalog.elements() {
            let option = FormOption {
                id: element.id,
                checked: checked.contains(&element.id),
                name: element.name,
            };
            match groups.iter_mut().find(|g| g.set == element.set) {
                Some(group) => group.options.push(option),
                None => groups.push(FormGroup {
                    set: element.set,
                    options: vec![option],
                }),
            }
        }

        Self { groups }
    }

    /// Ids of all checked options.
    #[must_use]
    pub fn checked_ids(&self) -> Vec<ElementId> {
        self.groups
            .iter()
            .flat_map(|g| &g.options)
            .filter(|o| o.checked)
            .map(|o| o.id)
            .collect()
    }
}
