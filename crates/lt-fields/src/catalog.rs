//! Element catalog lookup.
//!
//! The host owns the list of metadata elements. [`ElementCatalog`] is the
//! narrow view this crate needs: find an element by id (form submissions) or
//! by set and name (stored selections).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::FieldError;
use crate::field::FieldRef;

/// Host-assigned element identifier.
pub type ElementId = u64;

/// A metadata element known to the host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    /// Element set the element belongs to.
    pub set: String,
    pub name: String,
}

impl Element {
    #[must_use]
    pub fn new(id: ElementId, set: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            set: set.into(),
            name: name.into(),
        }
    }

    /// The field reference stored when this element is selected.
    #[must_use]
    pub fn field_ref(&self) -> FieldRef {
        FieldRef::new(self.set.clone(), self.name.clone())
    }
}

/// Source of element definitions.
///
/// Implemented by the host's element storage.
pub trait ElementCatalog: Send + Sync {
    /// Look up an element by id.
    fn find(&self, id: ElementId) -> Option<Element>;

    /// Look up an element by set name and element name.
    fn find_by_name(&self, set: &str, name: &str) -> Option<Element>;

    /// All elements, in display order.
    fn elements(&self) -> Vec<Element>;
}

/// Catalog backed by a list held in memory.
///
/// Loadable from JSON of the form
/// `{"elements": [{"id": 1, "set": "Dublin Core", "name": "Title"}]}`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct InMemoryCatalog {
    elements: Vec<Element>,
}

impl InMemoryCatalog {
    #[must_use]
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    /// Parse a catalog from JSON.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::Json` if the JSON is malformed.
    pub fn from_json(content: &str) -> Result<Self, FieldError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read and parse a JSON catalog file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, FieldError> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        tracing::debug!(
            path = %path.display(),
            count = catalog.elements.len(),
            "Loaded element catalog"
        );
        Ok(catalog)
    }
}

impl ElementCatalog for InMemoryCatalog {
    fn find(&self, id: ElementId) -> Option<Element> {
        self.elements.iter().find(|e| e.id == id).cloned()
    }

    fn find_by_name(&self, set: &str, name: &str) -> Option<Element> {
        self.elements
            .iter()
            .find(|e| e.set == set && e.name == name)
            .cloned()
    }

    fn elements(&self) -> Vec<Element> {
        self.elements.clone()
    }
}
