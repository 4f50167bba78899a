//! Card graph for note collections.
//!
//! The host application renders notes as a force-directed graph of cards.
//! This crate re-exports the host-independent core so that integration tests
//! and the `cardgraph` binary can import it from one place, and adds the
//! [`ingest`] layer that reads exported note records.
//!
//! # Architecture
//!
//! ```text
//! note records ──► ingest ──► SearchableDocument ──┐
//!                                                  ├──► search::matches
//! query string ──► search::parse ──► SearchTerm ───┘
//!
//! config.toml ──► Config ──► layout::compute_forces ──► LayoutParameters
//! ```

pub mod ingest;

pub use cardgraph_core::{config, error, layout, metadata, search, settings, types};
pub use cardgraph_core::{
    compute_forces, matches, parse, DisplayField, DisplaySettings, ForceField, ForceSettings,
    LayoutParameters, PhysicsConstants, Point, Query, SearchTerm, SearchableDocument, SettingValue,
    Settings, SettingsError, TermKind, Viewport, PHYSICS,
};
