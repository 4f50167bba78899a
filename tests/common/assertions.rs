//! Domain-specific assertion macros for cardgraph harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear which query produced which result set.

// ---------------------------------------------------------------------------
// Query result assertions
// ---------------------------------------------------------------------------

/// Assert that `query` selects exactly `expected` (paths, in input order)
/// from a document slice.
///
/// ```rust
/// assert_hits!(vault(), "tag:project", ["projects/alpha.md"]);
/// ```
#[macro_export]
macro_rules! assert_hits {
    ($docs:expr, $query:expr, [$($path:expr),* $(,)?]) => {{
        let docs: &[cardgraph::SearchableDocument] = &$docs;
        let query = cardgraph::Query::parse($query);
        let actual: Vec<&str> = query.filter(docs).map(|d| d.path.as_str()).collect();
        let expected: Vec<&str> = vec![$($path),*];
        pretty_assertions::assert_eq!(
            actual, expected,
            "assert_hits! failed for query {:?} (terms: {:?})", $query, query.terms()
        );
    }};
}

/// Assert that a single document is accepted by `query`.
#[macro_export]
macro_rules! assert_match {
    ($doc:expr, $query:expr) => {{
        let doc: &cardgraph::SearchableDocument = &$doc;
        let terms = cardgraph::parse($query);
        if !cardgraph::matches(doc, &terms) {
            panic!(
                "assert_match! failed: {:?} rejected\n  query: {:?}\n  terms: {:?}",
                doc, $query, terms
            );
        }
    }};
}

/// Assert that a single document is rejected by `query`.
#[macro_export]
macro_rules! assert_no_match {
    ($doc:expr, $query:expr) => {{
        let doc: &cardgraph::SearchableDocument = &$doc;
        let terms = cardgraph::parse($query);
        if cardgraph::matches(doc, &terms) {
            panic!(
                "assert_no_match! failed: {:?} accepted\n  query: {:?}\n  terms: {:?}",
                doc, $query, terms
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Numeric assertions
// ---------------------------------------------------------------------------

/// Assert two floats are within `1e-9` of each other.
#[macro_export]
macro_rules! assert_close {
    ($actual:expr, $expected:expr) => {{
        let actual: f64 = $actual;
        let expected: f64 = $expected;
        if (actual - expected).abs() > 1e-9 {
            panic!(
                "assert_close! failed:\n  expected: {}\n  actual:   {}",
                expected, actual
            );
        }
    }};
}
