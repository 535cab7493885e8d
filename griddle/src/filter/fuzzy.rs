//! Fuzzy matching for the global filter, using nucleo-matcher.

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

/// Score a query against a haystack.
///
/// Returns `None` when the pattern does not match. An empty query matches
/// everything with score 0, mirroring "no constraint".
pub fn match_score(query: &str, haystack: &str) -> Option<u32> {
    if query.is_empty() {
        return Some(0);
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let pattern = Pattern::new(
        query,
        CaseMatching::Ignore,
        Normalization::Smart,
        AtomKind::Fuzzy,
    );

    let mut buf = Vec::new();
    let haystack = Utf32Str::new(haystack, &mut buf);
    pattern.score(haystack, &mut matcher)
}

/// Check whether a query fuzzily matches a haystack.
pub fn is_match(query: &str, haystack: &str) -> bool {
    match_score(query, haystack).is_some()
}
