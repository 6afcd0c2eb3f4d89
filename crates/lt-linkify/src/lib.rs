//! Autolink transform for plain-text field values.
//!
//! This crate finds URL-like and email-like substrings in plain text and
//! rewrites each of them into an HTML anchor, copying everything else through
//! untouched.
//!
//! # Architecture
//!
//! - [`scan`]: left-to-right detection of non-overlapping [`Match`]es
//! - [`Linkifier`]: applies [`LinkifyOptions`] (default scheme, enabled kinds,
//!   extra anchor attributes) and assembles the output
//! - [`linkify`]: shorthand using a lazily built default [`Linkifier`]
//!
//! Text flagged as markup is never touched, so already-rendered HTML cannot be
//! double-linked or re-escaped.
//!
//! # Example
//!
//! ```
//! use lt_linkify::linkify;
//!
//! let html = linkify("Visit www.example.com today", false);
//! assert_eq!(
//!     html,
//!     r#"Visit <a href="http://www.example.com">www.example.com</a> today"#
//! );
//!
//! // Markup passes through unchanged.
//! assert_eq!(linkify("<b>www.example.com</b>", true), "<b>www.example.com</b>");
//! ```

mod anchor;
mod linkifier;
mod scanner;

pub use anchor::{escape_attr, link_target};
pub use linkifier::{DEFAULT_SCHEME, Linkifier, LinkifyOptions, linkify};
pub use scanner::{Match, MatchKind, scan};
