//! Turns exported note records into [`SearchableDocument`] values.
//!
//! The host owns the vault; the `cardgraph` binary only sees a JSON array of
//! note records:
//!
//! ```json
//! [{ "path": "Projects/Alpha.md",
//!    "frontmatter": { "tags": ["work"], "aliases": "A" },
//!    "inline_tags": ["#idea"],
//!    "body": "text with #more tags" }]
//! ```
//!
//! `frontmatter`, `inline_tags` and `body` are optional. Tags found in `body`
//! are added to `inline_tags`.

use cardgraph_core::metadata;
use cardgraph_core::SearchableDocument;
use serde::Deserialize;
use std::io::Read;

/// One note as exported by the host.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NoteRecord {
    pub path: String,
    #[serde(default)]
    pub frontmatter: Option<serde_json::Value>,
    #[serde(default)]
    pub inline_tags: Vec<String>,
    #[serde(default)]
    pub body: Option<String>,
}

impl NoteRecord {
    pub fn to_document(&self) -> SearchableDocument {
        let mut tags = self.inline_tags.clone();
        if let Some(body) = &self.body {
            tags.extend(metadata::inline_tags(body));
        }
        SearchableDocument::from_metadata(&self.path, self.frontmatter.as_ref(), &tags)
    }
}

/// Read a JSON array of note records, keeping input order.
pub fn read_records<R: Read>(reader: R) -> anyhow::Result<Vec<NoteRecord>> {
    let records: Vec<NoteRecord> = serde_json::from_reader(reader)?;
    tracing::debug!(notes = records.len(), "ingest: records read");
    Ok(records)
}

/// Read a JSON array of note records and convert each to a document, keeping
/// input order.
pub fn read_documents<R: Read>(reader: R) -> anyhow::Result<Vec<SearchableDocument>> {
    Ok(read_records(reader)?.iter().map(NoteRecord::to_document).collect())
}
