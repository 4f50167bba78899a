//! Ergonomic constructors for test documents and settings.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use cardgraph::{DisplaySettings, ForceSettings, SearchableDocument};

// ---------------------------------------------------------------------------
// DocumentBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`SearchableDocument`] test fixtures. Values go through
/// the same normalisation as real documents (lowercase, `#` stripped).
///
/// # Example
///
/// ```rust
/// let doc = DocumentBuilder::new("Projects/Alpha.md")
///     .alias("First Letter")
///     .tag("#project")
///     .build();
/// ```
pub struct DocumentBuilder {
    path: String,
    aliases: Vec<String>,
    tags: Vec<String>,
}

impl DocumentBuilder {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            aliases: Vec::new(),
            tags: Vec::new(),
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn build(self) -> SearchableDocument {
        SearchableDocument::new(&self.path, self.aliases, self.tags)
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// A document with only a path.
pub fn doc(path: &str) -> SearchableDocument {
    DocumentBuilder::new(path).build()
}

/// A document with a path and tags.
pub fn tagged(path: &str, tags: &[&str]) -> SearchableDocument {
    tags.iter()
        .fold(DocumentBuilder::new(path), |b, t| b.tag(*t))
        .build()
}

/// Display settings where every field differs from its default.
pub fn tweaked_display() -> DisplaySettings {
    DisplaySettings {
        card_width: 300.0,
        card_height: 90.0,
        font_size: 18.0,
        excerpt_lines: 7,
        show_tags: false,
        show_arrows: false,
    }
}

/// Force settings where every field differs from its default.
pub fn tweaked_forces() -> ForceSettings {
    ForceSettings {
        repel_force: 4.0,
        link_force: 0.3,
        link_distance: 120.0,
        center_force: 0.9,
    }
}
