//! Field identifiers and the set of fields selected for autolinking.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::FieldError;
use crate::catalog::{ElementCatalog, ElementId};

/// Identifies a metadata field by element set and element name.
///
/// Displayed and parsed as `Set/Element`, e.g. `Dublin Core/Description`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldRef {
    /// Element set name (e.g., "Dublin Core").
    pub set: String,
    /// Element name within the set (e.g., "Description").
    pub element: String,
}

impl FieldRef {
    #[must_use]
    pub fn new(set: impl Into<String>, element: impl Into<String>) -> Self {
        Self {
            set: set.into(),
            element: element.into(),
        }
    }
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.set, self.element)
    }
}

impl FromStr for FieldRef {
    type Err = FieldError;

    /// Parse `Set/Element`. The first `/` separates the two parts.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (set, element) = s
            .split_once('/')
            .ok_or_else(|| FieldError::InvalidFieldRef(s.to_owned()))?;
        let (set, element) = (set.trim(), element.trim());
        if set.is_empty() || element.is_empty() {
            return Err(FieldError::InvalidFieldRef(s.to_owned()));
        }
        Ok(Self::new(set, element))
    }
}

/// Ordered, duplicate-free set of fields that get autolinked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldSelection {
    fields: Vec<FieldRef>,
}

impl FieldSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve submitted element ids into a selection.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::NotFound` for the first id missing from `catalog`.
    pub fn from_element_ids(
        catalog: &dyn ElementCatalog,
        ids: &[ElementId],
    ) -> Result<Self, FieldError> {
        let mut selection = Self::new();
        for &id in ids {
            let element = catalog.find(id).ok_or(FieldError::NotFound(id))?;
            selection.insert(element.field_ref());
        }
        Ok(selection)
    }

    /// Element ids of the selected fields that exist in `catalog`.
    ///
    /// Fields whose element has since disappeared from the catalog are skipped.
    #[must_use]
    pub fn element_ids(&self, catalog: &dyn ElementCatalog) -> Vec<ElementId> {
        self.fields
            .iter()
            .filter_map(|field| catalog.find_by_name(&field.set, &field.element))
            .map(|element| element.id)
            .collect()
    }

    #[must_use]
    pub fn contains(&self, field: &FieldRef) -> bool {
        self.fields.contains(field)
    }

    /// Add a field. Returns `false` if it was already selected.
    pub fn insert(&mut self, field: FieldRef) -> bool {
        if self.contains(&field) {
            return false;
        }
        self.fields.push(field);
        true
    }

    /// Remove a field. Returns `false` if it was not selected.
    pub fn remove(&mut self, field: &FieldRef) -> bool {
        let before = self.fields.len();
        self.fields.retain(|f| f != field);
        self.fields.len() != before
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldRef> {
        self.fields.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<FieldRef> for FieldSelection {
    fn from_iter<I: IntoIterator<Item = FieldRef>>(iter: I) -> Self {
        let mut selection = Self::new();
        for field in iter {
            selection.insert(field);
        }
        selection
    }
}

impl<'a> IntoIterator for &'a FieldSelection {
    type Item = &'a FieldRef;
    type IntoIter = std::slice::Iter<'a, FieldRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
