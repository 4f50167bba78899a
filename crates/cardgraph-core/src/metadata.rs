//! Attribute extraction from note metadata.
//!
//! Front-matter arrives as loosely-typed JSON-like data: `tags` and `aliases`
//! may each be a single string, an array, or missing entirely, and arrays may
//! hold non-string entries. Anything that is not a string is skipped.

use crate::types::{normalize_alias, normalize_tag, SearchableDocument};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

const ALIAS_KEYS: &[&str] = &["aliases", "alias"];
const TAG_KEYS: &[&str] = &["tags", "tag"];

/// `#tag` not preceded by a word character or another `#`.
static INLINE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^\w#])#([\p{L}\p{N}_/\-]+)").expect("inline tag pattern is valid")
});

impl SearchableDocument {
    /// Build a document from its path, optional front-matter and the inline
    /// tag list the host found in the note body.
    pub fn from_metadata<S: AsRef<str>>(
        path: &str,
        frontmatter: Option<&Value>,
        inline_tags: &[S],
    ) -> Self {
        let (aliases, mut tags) = match frontmatter {
            Some(fm) => (frontmatter_aliases(fm), frontmatter_tags(fm)),
            None => (Vec::new(), Vec::new()),
        };
        tags.extend(inline_tags.iter().filter_map(|t| normalize_tag(t.as_ref())));

        let doc = SearchableDocument {
            path: path.to_lowercase(),
            aliases: aliases.into_iter().collect(),
            tags: tags.into_iter().collect(),
        };
        tracing::trace!(path = %doc.path, aliases = doc.aliases.len(), tags = doc.tags.len(), "metadata: document built");
        doc
    }
}

/// Collect every string under any of `keys`, accepting a bare string or an
/// array of strings per key.
fn string_values(frontmatter: &Value, keys: &[&str]) -> Vec<String> {
    let mut out = Vec::new();
    for key in keys {
        match frontmatter.get(*key) {
            Some(Value::String(s)) => out.push(s.clone()),
            Some(Value::Array(items)) => {
                out.extend(items.iter().filter_map(Value::as_str).map(str::to_string))
            }
            _ => {}
        }
    }
    out
}

/// Front-matter tags, normalised (marker stripped, lowercased, blanks dropped).
fn frontmatter_tags(frontmatter: &Value) -> Vec<String> {
    string_values(frontmatter, TAG_KEYS)
        .iter()
        .filter_map(|t| normalize_tag(t))
        .collect()
}

/// Front-matter aliases, lowercased, blanks dropped.
fn frontmatter_aliases(frontmatter: &Value) -> Vec<String> {
    string_values(frontmatter, ALIAS_KEYS)
        .iter()
        .filter_map(|a| normalize_alias(a))
        .collect()
}

/// Scan markdown text for inline `#tags`, in order of appearance.
///
/// Fenced code blocks are skipped. A purely numeric tag (`#123`) is not a tag.
/// Returned tags keep their original case and carry no `#`.
pub fn inline_tags(body: &str) -> Vec<String> {
    let mut tags = Vec::new();
    let mut in_fence = false;

    for line in body.lines() {
        if line.trim_start().starts_with("```") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }
        for cap in INLINE_TAG.captures_iter(line) {
            let tag = &cap[1];
            if tag.chars().any(|c| !c.is_numeric()) {
                tags.push(tag.to_string());
            }
        }
    }
    tags
}
