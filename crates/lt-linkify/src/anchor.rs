//! Anchor element output for detected links.

use std::collections::BTreeMap;

use crate::scanner::{Match, MatchKind};

/// Compute the `href` target for a detected link.
///
/// URLs without a scheme get `default_scheme` prefixed; emails get `mailto:`.
/// The visible label is never derived from this value.
///
/// # Examples
///
/// ```
/// use lt_linkify::{MatchKind, link_target};
///
/// assert_eq!(link_target("www.example.com", MatchKind::Url, "http"), "http://www.example.com");
/// assert_eq!(link_target("https://example.com", MatchKind::Url, "http"), "https://example.com");
/// assert_eq!(link_target("a@b.org", MatchKind::Email, "http"), "mailto:a@b.org");
/// ```
#[must_use]
pub fn link_target(label: &str, kind: MatchKind, default_scheme: &str) -> String {
    match kind {
        MatchKind::Email => format!("mailto:{label}"),
        MatchKind::Url if has_scheme(label) => label.to_owned(),
        MatchKind::Url => format!("{default_scheme}://{label}"),
    }
}

/// Whether `url` starts with one of the schemes the scanner recognizes.
fn has_scheme(url: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        url.get(..scheme.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(scheme))
    })
}

/// Append `<a href="...">label</a>` for `m` to `out`.
pub(crate) fn push_anchor(
    out: &mut String,
    m: &Match<'_>,
    default_scheme: &str,
    attributes: &BTreeMap<String, String>,
) {
    let label = m.as_str();
    out.push_str("<a href=\"");
    out.push_str(&escape_attr(&link_target(label, m.kind(), default_scheme)));
    out.push('"');
    for (name, value) in attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_attr(value));
        out.push('"');
    }
    out.push('>');
    out.push_str(label);
    out.push_str("</a>");
}

/// Escape a value for use inside a double-quoted HTML attribute.
#[must_use]
pub fn escape_attr(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::scan;
    use pretty_assertions::assert_eq;

    fn anchor_for(text: &str, attributes: &BTreeMap<String, String>) -> String {
        let matches = scan(text);
        let mut out = String::new();
        push_anchor(&mut out, &matches[0], "http", attributes);
        out
    }

    #[test]
    fn test_link_target_keeps_existing_scheme() {
        assert_eq!(
            link_target("HTTPS://Example.com/", MatchKind::Url, "http"),
            "HTTPS://Example.com/"
        );
    }

    #[test]
    fn test_link_target_custom_default_scheme() {
        assert_eq!(
            link_target("www.example.com/a", MatchKind::Url, "https"),
            "https://www.example.com/a"
        );
    }

    #[test]
    fn test_link_target_email() {
        assert_eq!(
            link_target("a.b@example.org", MatchKind::Email, "https"),
            "mailto:a.b@example.org"
        );
    }

    #[test]
    fn test_has_scheme() {
        assert!(has_scheme("http://a.com"));
        assert!(has_scheme("HTTPS://a.com"));
        assert!(!has_scheme("www.a.com"));
        assert!(!has_scheme("a.com/x?u=http://b.com"));
        assert!(!has_scheme("://a.com"));
        assert!(!has_scheme("http:"));
    }

    #[test]
    fn test_link_target_scheme_like_text_after_host_is_prefixed() {
        assert_eq!(
            link_target("www.example.com://x", MatchKind::Url, "http"),
            "http://www.example.com://x"
        );
        assert_eq!(
            link_target("example.com://x", MatchKind::Url, "https"),
            "https://example.com://x"
        );
    }

    #[test]
    fn test_push_anchor_www_with_colon_slashes_is_absolute() {
        assert_eq!(
            anchor_for("www.example.com://x", &BTreeMap::new()),
            r#"<a href="http://www.example.com://x">www.example.com://x</a>"#
        );
    }

    #[test]
    fn test_push_anchor_plain() {
        assert_eq!(
            anchor_for("http://example.com", &BTreeMap::new()),
            r#"<a href="http://example.com">http://example.com</a>"#
        );
    }

    #[test]
    fn test_push_anchor_escapes_href_not_label() {
        assert_eq!(
            anchor_for("http://a.com/?x=1&y=2", &BTreeMap::new()),
            r#"<a href="http://a.com/?x=1&amp;y=2">http://a.com/?x=1&y=2</a>"#
        );
    }

    #[test]
    fn test_push_anchor_with_attributes_in_key_order() {
        let attributes = BTreeMap::from([
            ("target".to_owned(), "_blank".to_owned()),
            ("class".to_owned(), "ext \"link\"".to_owned()),
        ]);
        assert_eq!(
            anchor_for("www.a.com", &attributes),
            r#"<a href="http://www.a.com" class="ext &quot;link&quot;" target="_blank">www.a.com</a>"#
        );
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr("<script>"), "&lt;script&gt;");
        assert_eq!(escape_attr("a & b"), "a &amp; b");
        assert_eq!(escape_attr(r#""quoted""#), "&quot;quoted&quot;");
        assert_eq!(escape_attr("it's"), "it&#x27;s");
    }
}
