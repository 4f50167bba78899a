//! Core types shared by the query engine: the parsed [`SearchTerm`], its
//! [`TermKind`] discriminant, and the [`SearchableDocument`] view a term is
//! evaluated against.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which document attribute a term is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermKind {
    /// Free text: path or any alias.
    Text,
    /// `tag:` filter: any tag.
    Tag,
    /// `path:` filter: the document path.
    Path,
}

impl TermKind {
    /// Query prefix for this kind, without the trailing `:`. `Text` has none.
    pub fn prefix(self) -> Option<&'static str> {
        match self {
            TermKind::Text => None,
            TermKind::Tag => Some("tag"),
            TermKind::Path => Some("path"),
        }
    }
}

/// A single parsed unit of a search query.
///
/// `value` is lowercased and never empty; the parser drops tokens that would
/// produce an empty value instead of materialising them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchTerm {
    pub kind: TermKind,
    pub value: String,
    pub negated: bool,
}

impl SearchTerm {
    pub fn new(kind: TermKind, value: impl Into<String>, negated: bool) -> Self {
        Self {
            kind,
            value: value.into(),
            negated,
        }
    }
}

/// Canonical query syntax. Values containing whitespace are quoted, so
/// re-parsing the output yields the same term as long as the value holds no
/// `"` character.
impl std::fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.negated {
            f.write_str("-")?;
        }
        if let Some(prefix) = self.kind.prefix() {
            write!(f, "{prefix}:")?;
        }
        let needs_quotes = self.value.chars().any(char::is_whitespace)
            || self.value.starts_with('"')
            || (self.kind == TermKind::Text && self.value.starts_with('-'))
            || (self.kind == TermKind::Text && self.value.contains(':'));
        if needs_quotes {
            write!(f, "\"{}\"", self.value)
        } else {
            f.write_str(&self.value)
        }
    }
}

/// The searchable attributes of one note, already case-normalised.
///
/// Tags are stored without their leading `#`. Build one with
/// [`SearchableDocument::new`] from raw strings (which normalises them) or
/// with [`SearchableDocument::from_metadata`](crate::metadata) from a
/// front-matter value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchableDocument {
    pub path: String,
    pub aliases: BTreeSet<String>,
    pub tags: BTreeSet<String>,
}

impl SearchableDocument {
    pub fn new<A, T>(path: &str, aliases: A, tags: T) -> Self
    where
        A: IntoIterator,
        A::Item: AsRef<str>,
        T: IntoIterator,
        T::Item: AsRef<str>,
    {
        Self {
            path: path.to_lowercase(),
            aliases: aliases
                .into_iter()
                .filter_map(|a| normalize_alias(a.as_ref()))
                .collect(),
            tags: tags
                .into_iter()
                .filter_map(|t| normalize_tag(t.as_ref()))
                .collect(),
        }
    }
}

/// Strip one leading `#` and lowercase. Returns `None` for an empty tag.
pub fn normalize_tag(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let bare = trimmed.strip_prefix('#').unwrap_or(trimmed);
    (!bare.is_empty()).then(|| bare.to_lowercase())
}

/// Lowercase an alias. Returns `None` for a blank alias.
pub fn normalize_alias(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}
