//! Linkifier configuration and text assembly.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::anchor::push_anchor;
use crate::scanner::{Match, scan_kinds};

/// Scheme prefixed to URL targets that have none.
pub const DEFAULT_SCHEME: &str = "http";

/// Shared linkifier with default options, built on first use.
static DEFAULT_LINKIFIER: LazyLock<Linkifier> = LazyLock::new(Linkifier::default);

/// Options controlling what gets linked and how anchors look.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct LinkifyOptions {
    /// Scheme used in the target of URLs written without one.
    pub default_scheme: String,
    /// Link web addresses.
    pub urls: bool,
    /// Link email addresses.
    pub emails: bool,
    /// Extra attributes added to every anchor, emitted in key order.
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "BTreeMap::is_empty")
    )]
    pub attributes: BTreeMap<String, String>,
}

impl Default for LinkifyOptions {
    fn default() -> Self {
        Self {
            default_scheme: DEFAULT_SCHEME.to_owned(),
            urls: true,
            emails: true,
            attributes: BTreeMap::new(),
        }
    }
}

/// Rewrites URLs and emails in plain text into HTML anchors.
///
/// A `Linkifier` holds no mutable state and can be shared freely between
/// threads.
///
/// # Example
///
/// ```
/// use lt_linkify::{Linkifier, LinkifyOptions};
///
/// let linkifier = Linkifier::new(LinkifyOptions {
///     default_scheme: "https".to_owned(),
///     emails: false,
///     ..Default::default()
/// });
///
/// assert_eq!(
///     linkifier.linkify("www.a.com or me@a.com", false),
///     r#"<a href="https://www.a.com">www.a.com</a> or me@a.com"#
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct Linkifier {
    options: LinkifyOptions,
}

impl Linkifier {
    #[must_use]
    pub fn new(options: LinkifyOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &LinkifyOptions {
        &self.options
    }

    /// Find the links this linkifier would rewrite.
    #[must_use]
    pub fn scan<'t>(&self, text: &'t str) -> Vec<Match<'t>> {
        scan_kinds(text, self.options.urls, self.options.emails)
    }

    /// Rewrite every detected link in `text` into an anchor.
    ///
    /// Returns `text` unchanged when it is markup, empty, or whitespace only.
    /// Text between links is copied verbatim, without escaping.
    #[must_use]
    pub fn linkify(&self, text: &str, is_markup: bool) -> String {
        if is_markup || text.trim().is_empty() {
            return text.to_owned();
        }

        let matches = self.scan(text);
        if matches.is_empty() {
            return text.to_owned();
        }

        let mut result = String::with_capacity(text.len() + matches.len() * 32);
        let mut last = 0;
        for m in &matches {
            result.push_str(&text[last..m.start()]);
            push_anchor(
                &mut result,
                m,
                &self.options.default_scheme,
                &self.options.attributes,
            );
            last = m.end();
        }
        result.push_str(&text[last..]);
        result
    }
}

/// Linkify `text` with default options.
///
/// Equivalent to `Linkifier::default().linkify(text, is_markup)` without
/// rebuilding the linkifier on every call.
#[must_use]
pub fn linkify(text: &str, is_markup: bool) -> String {
    DEFAULT_LINKIFIER.linkify(text, is_markup)
}
