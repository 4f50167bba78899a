//! Host-independent parts of the card graph.
//!
//! Two pure components, neither depending on the other:
//!
//! ```text
//! query string ──► search::parse ──► [SearchTerm] ──► search::matches(doc) ──► bool
//!
//! ForceSettings ─┐
//! DisplaySettings├─► layout::compute_forces ──► LayoutParameters ──► force engine
//! PHYSICS ───────┘
//! ```
//!
//! Everything is synchronous and free of shared mutable state, so callers
//! may invoke it from any thread as often as they like (once per keystroke,
//! once per vault event). Debouncing is the caller's job.

pub mod config;
pub mod error;
pub mod layout;
pub mod metadata;
pub mod search;
pub mod settings;
pub mod types;

pub use error::SettingsError;
pub use layout::{compute_forces, LayoutParameters, PhysicsConstants, Point, Viewport, PHYSICS};
pub use search::{matches, parse, Query};
pub use settings::{DisplayField, DisplaySettings, ForceField, ForceSettings, SettingValue, Settings};
pub use types::{SearchTerm, SearchableDocument, TermKind};
