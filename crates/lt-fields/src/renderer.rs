//! Render hook for metadata field values.
//!
//! The host calls [`FieldRenderer::render`] for every field value it displays.
//! Values of selected fields go through the autolink transform; everything
//! else is returned as-is without allocating.

use std::borrow::Cow;

use lt_linkify::Linkifier;

use crate::field::{FieldRef, FieldSelection};

/// Stored text of a field value along with its markup flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementText {
    pub text: String,
    /// Whether `text` is already HTML.
    pub html: bool,
}

impl ElementText {
    #[must_use]
    pub fn new(text: impl Into<String>, html: bool) -> Self {
        Self {
            text: text.into(),
            html,
        }
    }
}

/// Applies the autolink transform to the values of selected fields.
#[derive(Clone, Debug, Default)]
pub struct FieldRenderer {
    selection: FieldSelection,
    linkifier: Linkifier,
}

impl FieldRenderer {
    #[must_use]
    pub fn new(selection: FieldSelection, linkifier: Linkifier) -> Self {
        Self {
            selection,
            linkifier,
        }
    }

    #[must_use]
    pub fn selection(&self) -> &FieldSelection {
        &self.selection
    }

    #[must_use]
    pub fn linkifier(&self) -> &Linkifier {
        &self.linkifier
    }

    /// Render a field value for display.
    ///
    /// Returns `text` borrowed when the field is not selected or nothing was
    /// linked, and the linkified text otherwise. HTML values are never
    /// modified.
    pub fn render<'a>(&self, field: &FieldRef, text: &'a str, is_html: bool) -> Cow<'a, str> {
        if !self.selection.contains(field) {
            tracing::trace!(%field, "Field not selected, skipping autolink");
            return Cow::Borrowed(text);
        }

        let linked = self.linkifier.linkify(text, is_html);
        if linked == text {
            return Cow::Borrowed(text);
        }

        tracing::debug!(%field, "Autolinked field value");
        Cow::Owned(linked)
    }

    /// Render a stored field value, honoring its markup flag.
    pub fn render_element<'a>(&self, field: &FieldRef, value: &'a ElementText) -> Cow<'a, str> {
        self.render(field, &value.text, value.html)
    }
}
