//! Error types for cardgraph-core.
//!
//! Query parsing, matching and force computation are total and never fail;
//! only the settings field model has failure modes.

use crate::settings::SettingValue;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    #[error("unknown setting: {0:?}")]
    UnknownField(String),

    #[error("setting `{field}` expects a {expected} value, got {actual}")]
    KindMismatch {
        field: &'static str,
        expected: &'static str,
        actual: SettingValue,
    },
}
