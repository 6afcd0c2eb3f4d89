//! Metadata field selection and render hook for linkify-text.
//!
//! This crate provides:
//! - [`FieldRef`] and [`FieldSelection`]: which metadata fields get autolinked
//! - [`ElementCatalog`]: lookup of the host's element definitions by id or name
//! - [`SelectionForm`]: the grouped checkbox model behind the settings form
//! - [`FieldRenderer`]: the render hook applying the transform to selected fields
//!
//! # Quick Start
//!
//! ```
//! use lt_fields::{FieldRef, FieldRenderer, FieldSelection};
//! use lt_linkify::Linkifier;
//!
//! let description = FieldRef::new("Dublin Core", "Description");
//! let selection: FieldSelection = [description.clone()].into_iter().collect();
//! let renderer = FieldRenderer::new(selection, Linkifier::default());
//!
//! let html = renderer.render(&description, "see www.example.com", false);
//! assert_eq!(html, r#"see <a href="http://www.example.com">www.example.com</a>"#);
//!
//! let title = FieldRef::new("Dublin Core", "Title");
//! assert_eq!(renderer.render(&title, "www.example.com", false), "www.example.com");
//! ```

mod catalog;
mod error;
mod field;
mod form;
mod renderer;

pub use catalog::{Element, ElementCatalog, ElementId, InMemoryCatalog};
pub use error::FieldError;
pub use field::{FieldRef, FieldSelection};
pub use form::{FormGroup, FormOption, SelectionForm};
pub use renderer::{ElementText, FieldRenderer};
