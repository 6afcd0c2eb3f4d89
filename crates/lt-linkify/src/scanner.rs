//! URL and email detection.
//!
//! Candidates are found with two regexes, trimmed at their trailing edge, and
//! then merged into a single left-to-right list of non-overlapping matches.
//!
//! # Selection Rules
//!
//! - The leftmost candidate wins.
//! - Among candidates starting at the same position the longer one wins.
//! - An email beats a URL at the same start only when strictly longer.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

/// URL candidate: an `http(s)://` scheme or a `www.` host followed by a run
/// of characters allowed in a URL, or a bare `domain.tld` host with an
/// optional path.
static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)\b(?:",
        r#"(?P<scheme>https?://)[^\s<>"]*"#,
        r#"|(?P<www>www\d{0,3}\.)[^\s<>"]*"#,
        r"|(?P<host>[a-z0-9](?:[a-z0-9\-]*[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9\-]*[a-z0-9])?)*",
        r"\.(?P<tld>[a-z]{2,63}))\b",
        r#"(?P<path>/[^\s<>"]*)?"#,
        r")",
    ))
    .unwrap()
});

/// Top-level domains that make a bare `domain.tld` a link without a path.
///
/// Country codes that double as common file extensions (`.py`, `.rs`,
/// `.sh`, `.md`, `.pl`) are left out.
const KNOWN_TLDS: &[&str] = &[
    "com", "org", "net", "edu", "gov", "mil", "int", "info", "biz", "name", "pro", "museum",
    "aero", "coop", "app", "dev", "io", "co", "me", "tv", "fm", "ly", "us", "uk", "ca",
    "au", "nz", "ie", "de", "fr", "nl", "be", "lu", "ch", "at", "it", "es", "pt", "se",
    "no", "dk", "fi", "is", "eu", "jp", "cn", "kr", "tw", "hk", "sg", "in", "ru", "ua",
    "cz", "hu", "gr", "ro", "br", "ar", "mx", "cl", "za",
];

/// Email candidate: `local-part@domain` with at least one dot in the domain.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)[a-z0-9!#$%&*+=?^_~.\-]+@(?:[a-z0-9](?:[a-z0-9\-]*[a-z0-9])?\.)+[a-z]{2,}\b",
    )
    .unwrap()
});

/// Kind of a detected link.
///
/// Ordered so that a URL sorts before an email; this breaks ties between
/// equal-length candidates at the same position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum MatchKind {
    /// Web address, with or without a scheme.
    Url,
    /// Email address.
    Email,
}

/// A detected link span inside a text unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Match<'t> {
    haystack: &'t str,
    start: usize,
    end: usize,
    kind: MatchKind,
}

impl<'t> Match<'t> {
    fn new(haystack: &'t str, start: usize, end: usize, kind: MatchKind) -> Self {
        Self {
            haystack,
            start,
            end,
            kind,
        }
    }

    /// Byte offset where the match starts.
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset one past the end of the match.
    #[must_use]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Byte range `[start, end)` of the match.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    #[must_use]
    pub fn kind(&self) -> MatchKind {
        self.kind
    }

    /// The matched substring, exactly as it appears in the input.
    #[must_use]
    pub fn as_str(&self) -> &'t str {
        &self.haystack[self.start..self.end]
    }
}

/// Find all URLs and emails in `text`, left to right, without overlaps.
///
/// # Examples
///
/// ```
/// use lt_linkify::{MatchKind, scan};
///
/// let matches = scan("mail a@b.org or see https://b.org/x.");
/// assert_eq!(matches.len(), 2);
/// assert_eq!(matches[0].kind(), MatchKind::Email);
/// assert_eq!(matches[1].as_str(), "https://b.org/x");
/// ```
#[must_use]
pub fn scan(text: &str) -> Vec<Match<'_>> {
    scan_kinds(text, true, true)
}

/// Find matches of the enabled kinds only.
pub(crate) fn scan_kinds(text: &str, urls: bool, emails: bool) -> Vec<Match<'_>> {
    let mut candidates = Vec::new();
    if urls {
        candidates.extend(url_candidates(text));
    }
    if emails {
        candidates.extend(email_candidates(text));
    }
    select(candidates)
}

fn url_candidates(text: &str) -> impl Iterator<Item = Match<'_>> {
    URL_RE.captures_iter(text).filter_map(move |caps| {
        let whole = caps.get(0)?;
        if let Some(tld) = caps.name("tld") {
            // A bare host is a link only with a known TLD or a path, and
            // never as the domain or local part of an email address.
            let known = KNOWN_TLDS.iter().any(|t| t.eq_ignore_ascii_case(tld.as_str()));
            if !known && caps.name("path").is_none() {
                return None;
            }
            let before = text[..whole.start()].chars().next_back();
            let after = text[caps.name("host")?.end()..].chars().next();
            if matches!(before, Some('@' | '/')) || after == Some('@') {
                return None;
            }
        }

        let trimmed = trim_url_end(whole.as_str());
        if let Some(prefix) = caps.name("scheme").or_else(|| caps.name("www")) {
            // `http://` and `www.` need something after them.
            let rest = trimmed.get(prefix.len()..).unwrap_or_default();
            if !rest.chars().any(char::is_alphanumeric) {
                return None;
            }
        }

        Some(Match::new(
            text,
            whole.start(),
            whole.start() + trimmed.len(),
            MatchKind::Url,
        ))
    })
}

fn email_candidates(text: &str) -> impl Iterator<Item = Match<'_>> {
    EMAIL_RE.find_iter(text).filter_map(move |m| {
        // A local part cannot start with a dot; treat leading dots as prose.
        let local_dots = m.as_str().len() - m.as_str().trim_start_matches('.').len();
        let start = m.start() + local_dots;
        if text[start..].starts_with('@') {
            return None;
        }
        Some(Match::new(text, start, m.end(), MatchKind::Email))
    })
}

/// Merge candidates into non-overlapping, left-to-right order.
fn select(mut candidates: Vec<Match<'_>>) -> Vec<Match<'_>> {
    candidates.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then_with(|| b.end.cmp(&a.end))
            .then_with(|| a.kind.cmp(&b.kind))
    });

    let mut selected = Vec::with_capacity(candidates.len());
    let mut cursor = 0;
    for candidate in candidates {
        if candidate.start >= cursor && candidate.end > candidate.start {
            cursor = candidate.end;
            selected.push(candidate);
        }
    }
    selected
}

/// Drop trailing characters that read as sentence punctuation.
///
/// Closing brackets are kept only when they balance an opening bracket inside
/// the candidate, so `Foo_(bar)` survives but `(see http://x.com)` loses its
/// final `)`. Bracket depths are counted once and updated as characters are
/// dropped, so the cost stays linear in the candidate length.
fn trim_url_end(candidate: &str) -> &str {
    let mut depths = BracketDepths::of(candidate);
    let mut end = candidate.len();
    while let Some(last) = candidate[..end].chars().next_back() {
        let drop = match last {
            ')' | ']' | '}' => depths.unbalanced_close(last),
            '.' | ',' | ';' | ':' | '!' | '?' | '\'' | '`' | '*' | '(' | '[' | '{' | '«'
            | '»' | '“' | '”' | '‘' | '’' => true,
            _ => false,
        };
        if !drop {
            break;
        }
        depths.remove(last);
        end -= last.len_utf8();
    }
    &candidate[..end]
}

/// Closing minus opening count for `()`, `[]` and `{}`.
struct BracketDepths([isize; 3]);

impl BracketDepths {
    fn of(s: &str) -> Self {
        let mut depths = Self([0; 3]);
        for c in s.chars() {
            depths.add(c, 1);
        }
        depths
    }

    fn slot(c: char) -> Option<(usize, isize)> {
        match c {
            '(' => Some((0, -1)),
            ')' => Some((0, 1)),
            '[' => Some((1, -1)),
            ']' => Some((1, 1)),
            '{' => Some((2, -1)),
            '}' => Some((2, 1)),
            _ => None,
        }
    }

    fn add(&mut self, c: char, sign: isize) {
        if let Some((slot, step)) = Self::slot(c) {
            self.0[slot] += step * sign;
        }
    }

    fn remove(&mut self, c: char) {
        self.add(c, -1);
    }

    /// Whether a closing bracket `c` at the end has no opening partner.
    fn unbalanced_close(&self, c: char) -> bool {
        Self::slot(c).is_some_and(|(slot, _)| self.0[slot] > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn spans(text: &str) -> Vec<(&str, MatchKind)> {
        scan(text).iter().map(|m| (m.as_str(), m.kind())).collect()
    }

    #[test]
    fn test_scan_plain_text_has_no_matches() {
        assert!(scan("nothing to see here, move along.").is_empty());
    }

    #[test]
    fn test_scan_http_url() {
        let matches = scan("Visit http://example.com today");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].as_str(), "http://example.com");
        assert_eq!(matches[0].range(), 6..24);
        assert_eq!(matches[0].kind(), MatchKind::Url);
    }

    #[test]
    fn test_scan_https_url_with_path_query_fragment() {
        assert_eq!(
            spans("Go to https://example.com/path?q=1&r=2#frag now"),
            vec![("https://example.com/path?q=1&r=2#frag", MatchKind::Url)]
        );
    }

    #[test]
    fn test_scan_www_url() {
        assert_eq!(
            spans("www.example.com"),
            vec![("www.example.com", MatchKind::Url)]
        );
    }

    #[test]
    fn test_scan_bare_domain_with_path() {
        assert_eq!(
            spans("docs live at example.org/guide/intro."),
            vec![("example.org/guide/intro", MatchKind::Url)]
        );
    }

    #[test]
    fn test_scan_bare_domain_with_known_tld() {
        assert_eq!(
            spans("see example.com for more"),
            vec![("example.com", MatchKind::Url)]
        );
    }

    #[test]
    fn test_scan_bare_subdomain_trailing_period_excluded() {
        assert_eq!(
            spans("mirror at library.bgsu.edu."),
            vec![("library.bgsu.edu", MatchKind::Url)]
        );
    }

    #[test]
    fn test_scan_bare_domain_country_code() {
        assert_eq!(
            spans("(bbc.co.uk)"),
            vec![("bbc.co.uk", MatchKind::Url)]
        );
    }

    #[test]
    fn test_scan_file_names_are_ignored() {
        assert!(scan("open report.txt later").is_empty());
        assert!(scan("run setup.py and edit lib.rs").is_empty());
        assert!(scan("see Cargo.toml, README.md").is_empty());
    }

    #[test]
    fn test_scan_unknown_tld_with_path() {
        assert_eq!(
            spans("hosted on example.xyz/docs"),
            vec![("example.xyz/docs", MatchKind::Url)]
        );
    }

    #[test]
    fn test_scan_email_domain_not_linked_as_url() {
        assert!(scan_kinds("mail me@example.com", true, false).is_empty());
        assert!(scan_kinds("mail bob.uk@example.com", true, false).is_empty());
    }

    #[test]
    fn test_scan_www_with_scheme_like_suffix() {
        assert_eq!(
            spans("www.example.com://x"),
            vec![("www.example.com://x", MatchKind::Url)]
        );
    }

    #[test]
    fn test_scan_scheme_without_host_is_ignored() {
        assert!(scan("type http:// then the host").is_empty());
        assert!(scan("just www. and nothing").is_empty());
    }

    #[test]
    fn test_scan_url_is_case_insensitive() {
        assert_eq!(
            spans("HTTPS://Example.COM/Path"),
            vec![("HTTPS://Example.COM/Path", MatchKind::Url)]
        );
    }

    #[test]
    fn test_scan_trailing_period_excluded() {
        assert_eq!(
            spans("See https://example.com."),
            vec![("https://example.com", MatchKind::Url)]
        );
    }

    #[test]
    fn test_scan_trailing_punctuation_run_excluded() {
        assert_eq!(
            spans("Really? https://example.com/a?!..."),
            vec![("https://example.com/a", MatchKind::Url)]
        );
    }

    #[test]
    fn test_scan_closing_paren_excluded() {
        assert_eq!(
            spans("(see http://x.com)"),
            vec![("http://x.com", MatchKind::Url)]
        );
    }

    #[test]
    fn test_scan_balanced_parens_kept() {
        assert_eq!(
            spans("https://en.wikipedia.org/wiki/Rust_(programming_language)"),
            vec![(
                "https://en.wikipedia.org/wiki/Rust_(programming_language)",
                MatchKind::Url
            )]
        );
    }

    #[test]
    fn test_scan_balanced_parens_inside_outer_parens() {
        assert_eq!(
            spans("(https://en.wikipedia.org/wiki/Foo_(bar))."),
            vec![("https://en.wikipedia.org/wiki/Foo_(bar)", MatchKind::Url)]
        );
    }

    #[test]
    fn test_scan_url_stops_at_angle_bracket_and_quote() {
        assert_eq!(
            spans(r#"<http://a.com> "http://b.com""#),
            vec![
                ("http://a.com", MatchKind::Url),
                ("http://b.com", MatchKind::Url)
            ]
        );
    }

    #[test]
    fn test_scan_email() {
        assert_eq!(
            spans("Contact me at a.b@example.org."),
            vec![("a.b@example.org", MatchKind::Email)]
        );
    }

    #[test]
    fn test_scan_email_with_plus_and_subdomain() {
        assert_eq!(
            spans("write to jane+news@mail.example.co.uk"),
            vec![("jane+news@mail.example.co.uk", MatchKind::Email)]
        );
    }

    #[test]
    fn test_scan_email_requires_dot_in_domain() {
        assert!(scan("root@localhost is not linked").is_empty());
    }

    #[test]
    fn test_scan_email_leading_dots_dropped() {
        assert_eq!(
            spans("...bob@example.com"),
            vec![("bob@example.com", MatchKind::Email)]
        );
    }

    #[test]
    fn test_scan_email_before_www_host_wins() {
        // The email starts further left than the `www.` host inside it.
        assert_eq!(
            spans("bob@www.example.com"),
            vec![("bob@www.example.com", MatchKind::Email)]
        );
    }

    #[test]
    fn test_scan_url_containing_at_sign_wins() {
        assert_eq!(
            spans("http://user@example.com/inbox"),
            vec![("http://user@example.com/inbox", MatchKind::Url)]
        );
    }

    #[test]
    fn test_scan_equal_start_tie_goes_to_url() {
        assert_eq!(
            spans("www.bob@example.com"),
            vec![("www.bob@example.com", MatchKind::Url)]
        );
    }

    #[test]
    fn test_select_equal_start_longer_email_wins() {
        let text = "www.x@example.com";
        let picked = select(vec![
            Match::new(text, 0, 5, MatchKind::Url),
            Match::new(text, 0, 17, MatchKind::Email),
        ]);
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].kind(), MatchKind::Email);
    }

    #[test]
    fn test_select_equal_start_equal_length_goes_to_url() {
        let text = "www.x@example.com";
        let picked = select(vec![
            Match::new(text, 0, 17, MatchKind::Email),
            Match::new(text, 0, 17, MatchKind::Url),
        ]);
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].kind(), MatchKind::Url);
    }

    #[test]
    fn test_scan_two_urls_in_order() {
        let matches = scan("See https://a.com and https://b.com");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].as_str(), "https://a.com");
        assert_eq!(matches[1].as_str(), "https://b.com");
        assert!(matches[0].end() <= matches[1].start());
    }

    #[test]
    fn test_scan_non_ascii_neighbours() {
        assert_eq!(
            spans("voir «https://exemple.fr/é» ici"),
            vec![("https://exemple.fr/é", MatchKind::Url)]
        );
    }

    #[test]
    fn test_scan_kinds_urls_only() {
        let matches = scan_kinds("a@b.org https://c.org", true, false);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].kind(), MatchKind::Url);
    }

    #[test]
    fn test_scan_kinds_emails_only() {
        let matches = scan_kinds("a@b.org https://c.org", false, true);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].kind(), MatchKind::Email);
    }

    #[test]
    fn test_trim_url_end_keeps_clean_url() {
        assert_eq!(trim_url_end("http://a.com/x"), "http://a.com/x");
    }

    #[test]
    fn test_trim_url_end_long_closing_run() {
        let candidate = format!("http://a.com/x{}", ")".repeat(50_000));
        assert_eq!(trim_url_end(&candidate), "http://a.com/x");
    }

    #[test]
    fn test_scan_url_followed_by_long_closing_run() {
        let text = format!("http://a.com{}", ")".repeat(50_000));
        assert_eq!(spans(&text), vec![("http://a.com", MatchKind::Url)]);
    }

    #[test]
    fn test_trim_url_end_nested_brackets() {
        assert_eq!(trim_url_end("http://a.com/(x[y]))]."), "http://a.com/(x[y])");
    }

    #[test]
    fn test_trim_url_end_unbalanced_bracket() {
        assert_eq!(trim_url_end("http://a.com/x]"), "http://a.com/x");
        assert_eq!(trim_url_end("http://a.com/[x]"), "http://a.com/[x]");
    }

    #[test]
    fn test_select_prefers_leftmost_then_longest() {
        let text = "abcdefgh";
        let picked = select(vec![
            Match::new(text, 2, 6, MatchKind::Url),
            Match::new(text, 0, 3, MatchKind::Email),
            Match::new(text, 0, 4, MatchKind::Url),
            Match::new(text, 5, 8, MatchKind::Email),
        ]);
        let ranges: Vec<_> = picked.iter().map(Match::range).collect();
        assert_eq!(ranges, vec![0..4, 5..8]);
    }
}
