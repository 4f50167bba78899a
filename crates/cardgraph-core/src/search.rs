//! Search layer: query parser and matcher.
//!
//! A query is a whitespace-separated list of tokens:
//!
//! ```text
//! query  := token (whitespace token)*
//! token  := ['-'] [ prefix ':' ] ( quoted | bare )
//! prefix := 'tag' | 'path'
//! quoted := '"' any-char-except-quote* '"'
//! bare   := non-whitespace-char+
//! ```
//!
//! Every token becomes a [`SearchTerm`]; all terms must hold for a document
//! to match (negated terms must *not* hold). There is no OR. Malformed
//! fragments are dropped rather than reported, since the parser runs on every
//! keystroke of a live search box:
//!
//! - a bare `-`, an empty `tag:` / `path:`, or an empty `""` produce no term;
//! - an unterminated quote swallows the rest of the query and produces no term.

use crate::types::{SearchTerm, SearchableDocument, TermKind};
use phf::phf_map;

/// Recognised filter prefixes, keyed by their lowercase spelling.
static PREFIXES: phf::Map<&'static str, TermKind> = phf_map! {
    "tag" => TermKind::Tag,
    "path" => TermKind::Path,
};

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse a raw query string into terms, in left-to-right token order.
///
/// Duplicate tokens are kept as duplicate terms. Values are lowercased;
/// quoted values keep their internal whitespace.
pub fn parse(query: &str) -> Vec<SearchTerm> {
    let mut terms = Vec::new();
    let mut rest = query;

    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            break;
        }
        let (term, remaining) = next_token(rest);
        rest = remaining;
        terms.extend(term);
    }

    tracing::debug!(query, terms = terms.len(), "search: parsed query");
    terms
}

/// Lex one token off the front of `input`, which must start with a
/// non-whitespace character. Returns the term (if any) and the unconsumed tail.
fn next_token(input: &str) -> (Option<SearchTerm>, &str) {
    let (negated, body) = match input.strip_prefix('-') {
        Some(body) => (true, body),
        None => (false, input),
    };
    let (kind, body) = split_prefix(body);

    if let Some(quoted) = body.strip_prefix('"') {
        return match quoted.find('"') {
            Some(end) => (make_term(kind, quoted[..end].trim(), negated), &quoted[end + 1..]),
            None => {
                tracing::debug!(token = input, "search: dropping unterminated quote");
                (None, "")
            }
        };
    }

    let end = body.find(char::is_whitespace).unwrap_or(body.len());
    (make_term(kind, &body[..end], negated), &body[end..])
}

/// Split a recognised `prefix:` off the token body. Prefixes match
/// case-insensitively; anything else leaves the body untouched as text.
fn split_prefix(body: &str) -> (TermKind, &str) {
    if let Some((head, tail)) = body.split_once(':') {
        if let Some(kind) = PREFIXES.get(head.to_ascii_lowercase().as_str()) {
            return (*kind, tail);
        }
    }
    (TermKind::Text, body)
}

fn make_term(kind: TermKind, raw: &str, negated: bool) -> Option<SearchTerm> {
    let raw = match kind {
        // Document tags are stored without their marker, so `tag:#x` == `tag:x`.
        TermKind::Tag => raw.strip_prefix('#').unwrap_or(raw),
        TermKind::Text | TermKind::Path => raw,
    };
    if raw.is_empty() {
        return None;
    }
    Some(SearchTerm::new(kind, raw.to_lowercase(), negated))
}

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

/// Evaluate `terms` against a document.
///
/// An empty term list matches everything. Evaluation stops at the first term
/// that rejects the document: a positive term that does not match, or a
/// negated term that does.
pub fn matches(document: &SearchableDocument, terms: &[SearchTerm]) -> bool {
    terms
        .iter()
        .all(|term| term_matches(document, term) != term.negated)
}

/// Substring match of a single term, ignoring its negation flag.
fn term_matches(document: &SearchableDocument, term: &SearchTerm) -> bool {
    let value = term.value.as_str();
    match term.kind {
        TermKind::Tag => document.tags.iter().any(|tag| tag.contains(value)),
        TermKind::Path => document.path.contains(value),
        TermKind::Text => {
            document.path.contains(value)
                || document.aliases.iter().any(|alias| alias.contains(value))
        }
    }
}

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// An owned, parsed query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    terms: Vec<SearchTerm>,
}

impl Query {
    pub fn parse(query: &str) -> Self {
        Self { terms: parse(query) }
    }

    pub fn terms(&self) -> &[SearchTerm] {
        &self.terms
    }

    /// True when the query has no terms and therefore matches every document.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn matches(&self, document: &SearchableDocument) -> bool {
        matches(document, &self.terms)
    }

    /// Iterate over the documents this query accepts, in input order.
    ///
    /// The yielded references borrow from `documents`, not from the query, so
    /// they may outlive it.
    pub fn filter<'q, 'd: 'q, I>(
        &'q self,
        documents: I,
    ) -> impl Iterator<Item = &'d SearchableDocument> + 'q
    where
        I: IntoIterator<Item = &'d SearchableDocument>,
        I::IntoIter: 'q,
    {
        documents.into_iter().filter(move |doc| self.matches(doc))
    }
}

impl From<Vec<SearchTerm>> for Query {
    fn from(terms: Vec<SearchTerm>) -> Self {
        Self { terms }
    }
}

impl std::str::FromStr for Query {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Query::parse(s))
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{term}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(v: &str) -> SearchTerm {
        SearchTerm::new(TermKind::Text, v, false)
    }

    #[test]
    fn empty_and_blank_queries_have_no_terms() {
        assert!(parse("").is_empty());
        assert!(parse("   \t\n").is_empty());
    }

    #[test]
    fn bare_dash_is_dropped() {
        assert!(parse("-").is_empty());
        assert_eq!(parse("- foo"), vec![text("foo")]);
    }

    #[test]
    fn mixed_query() {
        assert_eq!(
            parse(r#"foo tag:"my project" -path:"archive""#),
            vec![
                text("foo"),
                SearchTerm::new(TermKind::Tag, "my project", false),
                SearchTerm::new(TermKind::Path, "archive", true),
            ]
        );
    }

    #[test]
    fn empty_prefixed_values_are_dropped() {
        assert!(parse("tag:").is_empty());
        assert!(parse(r#"tag:"""#).is_empty());
        assert!(parse("-path:").is_empty());
        assert!(parse(r#""""#).is_empty());
        assert!(parse("tag:#").is_empty());
    }

    #[test]
    fn unknown_prefix_is_text() {
        assert_eq!(parse("foo:bar"), vec![text("foo:bar")]);
    }

    #[test]
    fn prefix_is_case_insensitive_and_value_lowercased() {
        assert_eq!(
            parse("TAG:Work Path:Daily/"),
            vec![
                SearchTerm::new(TermKind::Tag, "work", false),
                SearchTerm::new(TermKind::Path, "daily/", false),
            ]
        );
    }

    #[test]
    fn tag_marker_is_stripped() {
        assert_eq!(parse("tag:#Idea"), parse("tag:idea"));
    }

    #[test]
    fn quoted_value_is_trimmed_but_keeps_inner_whitespace() {
        assert_eq!(parse(r#""  two   words ""#), vec![text("two   words")]);
    }

    #[test]
    fn unterminated_quote_drops_rest() {
        assert_eq!(parse(r#"foo tag:"my pro"#), vec![text("foo")]);
    }

    #[test]
    fn closing_quote_ends_token() {
        assert_eq!(parse(r#""ab"cd"#), vec![text("ab"), text("cd")]);
    }

    #[test]
    fn quote_inside_bare_token_is_literal() {
        assert_eq!(parse(r#"foo"bar"#), vec![text("foo\"bar")]);
    }

    #[test]
    fn duplicates_preserved_in_order() {
        assert_eq!(parse("b a b"), vec![text("b"), text("a"), text("b")]);
    }

    #[test]
    fn negated_quoted_text() {
        assert_eq!(
            parse(r#"-"old stuff""#),
            vec![SearchTerm::new(TermKind::Text, "old stuff", true)]
        );
    }

    fn doc() -> SearchableDocument {
        SearchableDocument::new("Projects/Alpha.md", ["First Letter"], ["#project", "work/q3"])
    }

    #[test]
    fn empty_terms_match() {
        assert!(matches(&doc(), &[]));
    }

    #[test]
    fn text_matches_path_or_alias() {
        assert!(matches(&doc(), &parse("alpha")));
        assert!(matches(&doc(), &parse("letter")));
        assert!(!matches(&doc(), &parse("beta")));
    }

    #[test]
    fn text_does_not_match_tags() {
        assert!(!matches(&doc(), &parse("q3")));
        assert!(matches(&doc(), &parse("tag:q3")));
    }

    #[test]
    fn path_filter_ignores_aliases() {
        assert!(!matches(&doc(), &parse("path:letter")));
        assert!(matches(&doc(), &parse("path:projects/")));
    }

    #[test]
    fn negation_rejects() {
        assert!(!matches(&doc(), &parse("alpha -tag:work")));
        assert!(matches(&doc(), &parse("alpha -tag:home")));
    }

    #[test]
    fn query_filter_keeps_order() {
        let docs = vec![
            SearchableDocument::new("b.md", [] as [&str; 0], ["x"]),
            SearchableDocument::new("a.md", [] as [&str; 0], ["y"]),
            SearchableDocument::new("c.md", [] as [&str; 0], ["x"]),
        ];
        let q: Query = "tag:x".parse().unwrap();
        let hits: Vec<_> = q.filter(&docs).map(|d| d.path.as_str()).collect();
        assert_eq!(hits, vec!["b.md", "c.md"]);
    }

    #[test]
    fn filtered_documents_outlive_the_query() {
        let docs = vec![
            SearchableDocument::new("keep.md", [] as [&str; 0], ["x"]),
            SearchableDocument::new("drop.md", [] as [&str; 0], ["y"]),
        ];
        let hits: Vec<&SearchableDocument> = Query::parse("tag:x").filter(&docs).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].path, "keep.md");
    }

    #[test]
    fn empty_query_reports_empty() {
        assert!(Query::parse("  -  tag: ").is_empty());
        assert!(!Query::parse("x").is_empty());
    }

    #[test]
    fn query_display_round_trips() {
        let q = Query::parse(r#"foo tag:"my project" -path:archive"#);
        assert_eq!(Query::parse(&q.to_string()), q);
    }
}
