//! Static note corpora used across harnesses.

use cardgraph::ingest;
use cardgraph::SearchableDocument;

/// A small vault exported as note records, covering every front-matter shape
/// the ingest layer must tolerate.
pub const VAULT_JSON: &str = r##"[
  { "path": "Projects/Alpha.md",
    "frontmatter": { "tags": ["project", "work/q3"], "aliases": "First Letter" } },
  { "path": "Projects/Approximate Plans.md",
    "frontmatter": { "tags": "#planning" },
    "body": "rough numbers #estimates" },
  { "path": "Archive/Old Project.md",
    "frontmatter": { "tags": ["project", 2019, null], "aliases": ["Legacy", false] } },
  { "path": "Daily/2024-01-15.md",
    "inline_tags": ["#journal"] },
  { "path": "Inbox/prod-x notes.md",
    "frontmatter": { "tags": ["prod-x"] } },
  { "path": "Misc/Readme.md" }
]"##;

/// Paths of every note in [`VAULT_JSON`], in file order, lowercased.
pub const VAULT_PATHS: &[&str] = &[
    "projects/alpha.md",
    "projects/approximate plans.md",
    "archive/old project.md",
    "daily/2024-01-15.md",
    "inbox/prod-x notes.md",
    "misc/readme.md",
];

pub fn vault() -> Vec<SearchableDocument> {
    ingest::read_documents(VAULT_JSON.as_bytes()).expect("VAULT_JSON must be valid")
}

/// Generate `n` synthetic documents for throughput-style tests.
pub fn synthetic_vault(n: usize) -> Vec<SearchableDocument> {
    (0..n)
        .map(|i| {
            let folder = match i % 4 {
                0 => "projects",
                1 => "archive",
                2 => "daily",
                _ => "inbox",
            };
            SearchableDocument::new(
                &format!("{folder}/note-{i}.md"),
                [format!("alias {i}")],
                [format!("tag{}", i % 7), "common".to_string()],
            )
        })
        .collect()
}
