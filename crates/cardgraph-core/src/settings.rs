//! User-adjustable display and force settings.
//!
//! Both records are flat: every field has a default and (for numbers) a valid
//! range, and fields never depend on each other. Fields are addressed through
//! the [`DisplayField`] / [`ForceField`] enums so a caller can reset or set a
//! single field by name without touching the rest of the record.
//!
//! Ranges describe what the settings UI offers. Nothing here clamps on
//! assignment; callers that accept free-form input use
//! [`DisplaySettings::clamped`] / [`ForceSettings::clamped`] before handing
//! the record to the layout mapper.

use crate::error::SettingsError;
use phf::phf_map;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Values and fields
// ---------------------------------------------------------------------------

/// The value of a single setting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Number(f64),
    Toggle(bool),
}

impl std::fmt::Display for SettingValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingValue::Number(n) => write!(f, "{n}"),
            SettingValue::Toggle(b) => write!(f, "{b}"),
        }
    }
}

/// Common description of a settings field.
pub trait SettingField: Copy + FromStr<Err = SettingsError> + 'static {
    /// Every field of the record, in declaration order.
    const ALL: &'static [Self];

    /// snake_case name, as used in the config file.
    fn name(self) -> &'static str;

    fn default_value(self) -> SettingValue;

    /// Valid range for numeric fields; `None` for toggles.
    fn range(self) -> Option<RangeInclusive<f64>>;
}

/// A settings record addressable field by field.
pub trait Settings {
    type Field: SettingField;

    fn get(&self, field: Self::Field) -> SettingValue;

    /// Assign one field. Fails only when the value kind does not match the
    /// field (a toggle for a number or vice versa).
    fn set(&mut self, field: Self::Field, value: SettingValue) -> Result<(), SettingsError>;

    /// Restore one field to its documented default; all other fields keep
    /// their current values.
    fn reset(&mut self, field: Self::Field);

    fn reset_by_name(&mut self, name: &str) -> Result<(), SettingsError> {
        let field = name.parse::<Self::Field>()?;
        self.reset(field);
        tracing::debug!(field = name, "settings: reset to default");
        Ok(())
    }

    fn set_by_name(&mut self, name: &str, value: SettingValue) -> Result<(), SettingsError> {
        let field = name.parse::<Self::Field>()?;
        self.set(field, value)
    }
}

fn mismatch(field: &'static str, expected: &'static str, actual: SettingValue) -> SettingsError {
    SettingsError::KindMismatch {
        field,
        expected,
        actual,
    }
}

fn expect_number(field: &'static str, value: SettingValue) -> Result<f64, SettingsError> {
    match value {
        SettingValue::Number(n) => Ok(n),
        other => Err(mismatch(field, "number", other)),
    }
}

fn expect_toggle(field: &'static str, value: SettingValue) -> Result<bool, SettingsError> {
    match value {
        SettingValue::Toggle(b) => Ok(b),
        other => Err(mismatch(field, "toggle", other)),
    }
}

fn clamp_to<F: SettingField>(field: F, value: f64) -> f64 {
    match field.range() {
        Some(range) => value.clamp(*range.start(), *range.end()),
        None => value,
    }
}

// ---------------------------------------------------------------------------
// Display settings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayField {
    CardWidth,
    CardHeight,
    FontSize,
    ExcerptLines,
    ShowTags,
    ShowArrows,
}

static DISPLAY_FIELDS: phf::Map<&'static str, DisplayField> = phf_map! {
    "card_width" => DisplayField::CardWidth,
    "card_height" => DisplayField::CardHeight,
    "font_size" => DisplayField::FontSize,
    "excerpt_lines" => DisplayField::ExcerptLines,
    "show_tags" => DisplayField::ShowTags,
    "show_arrows" => DisplayField::ShowArrows,
};

impl FromStr for DisplayField {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DISPLAY_FIELDS
            .get(s)
            .copied()
            .ok_or_else(|| SettingsError::UnknownField(s.to_string()))
    }
}

impl SettingField for DisplayField {
    const ALL: &'static [Self] = &[
        DisplayField::CardWidth,
        DisplayField::CardHeight,
        DisplayField::FontSize,
        DisplayField::ExcerptLines,
        DisplayField::ShowTags,
        DisplayField::ShowArrows,
    ];

    fn name(self) -> &'static str {
        match self {
            DisplayField::CardWidth => "card_width",
            DisplayField::CardHeight => "card_height",
            DisplayField::FontSize => "font_size",
            DisplayField::ExcerptLines => "excerpt_lines",
            DisplayField::ShowTags => "show_tags",
            DisplayField::ShowArrows => "show_arrows",
        }
    }

    fn default_value(self) -> SettingValue {
        match self {
            DisplayField::CardWidth => SettingValue::Number(default_card_width()),
            DisplayField::CardHeight => SettingValue::Number(default_card_height()),
            DisplayField::FontSize => SettingValue::Number(default_font_size()),
            DisplayField::ExcerptLines => SettingValue::Number(default_excerpt_lines() as f64),
            DisplayField::ShowTags => SettingValue::Toggle(default_show_tags()),
            DisplayField::ShowArrows => SettingValue::Toggle(default_show_arrows()),
        }
    }

    fn range(self) -> Option<RangeInclusive<f64>> {
        match self {
            DisplayField::CardWidth => Some(120.0..=480.0),
            DisplayField::CardHeight => Some(80.0..=400.0),
            DisplayField::FontSize => Some(10.0..=24.0),
            DisplayField::ExcerptLines => Some(0.0..=10.0),
            DisplayField::ShowTags | DisplayField::ShowArrows => None,
        }
    }
}

/// How cards are drawn. `card_width` / `card_height` also drive the
/// collision radius of the layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    #[serde(default = "default_card_width")]
    pub card_width: f64,
    #[serde(default = "default_card_height")]
    pub card_height: f64,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    /// Body lines shown under the card title.
    #[serde(default = "default_excerpt_lines")]
    pub excerpt_lines: u32,
    #[serde(default = "default_show_tags")]
    pub show_tags: bool,
    #[serde(default = "default_show_arrows")]
    pub show_arrows: bool,
}

fn default_card_width() -> f64 { 240.0 }
fn default_card_height() -> f64 { 160.0 }
fn default_font_size() -> f64 { 14.0 }
fn default_excerpt_lines() -> u32 { 3 }
fn default_show_tags() -> bool { true }
fn default_show_arrows() -> bool { true }

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            card_width: default_card_width(),
            card_height: default_card_height(),
            font_size: default_font_size(),
            excerpt_lines: default_excerpt_lines(),
            show_tags: default_show_tags(),
            show_arrows: default_show_arrows(),
        }
    }
}

impl DisplaySettings {
    /// A copy with every numeric field pulled into its range.
    pub fn clamped(&self) -> Self {
        Self {
            card_width: clamp_to(DisplayField::CardWidth, self.card_width),
            card_height: clamp_to(DisplayField::CardHeight, self.card_height),
            font_size: clamp_to(DisplayField::FontSize, self.font_size),
            excerpt_lines: clamp_to(DisplayField::ExcerptLines, self.excerpt_lines as f64) as u32,
            show_tags: self.show_tags,
            show_arrows: self.show_arrows,
        }
    }
}

impl Settings for DisplaySettings {
    type Field = DisplayField;

    fn get(&self, field: DisplayField) -> SettingValue {
        match field {
            DisplayField::CardWidth => SettingValue::Number(self.card_width),
            DisplayField::CardHeight => SettingValue::Number(self.card_height),
            DisplayField::FontSize => SettingValue::Number(self.font_size),
            DisplayField::ExcerptLines => SettingValue::Number(self.excerpt_lines as f64),
            DisplayField::ShowTags => SettingValue::Toggle(self.show_tags),
            DisplayField::ShowArrows => SettingValue::Toggle(self.show_arrows),
        }
    }

    fn set(&mut self, field: DisplayField, value: SettingValue) -> Result<(), SettingsError> {
        let name = field.name();
        match field {
            DisplayField::CardWidth => self.card_width = expect_number(name, value)?,
            DisplayField::CardHeight => self.card_height = expect_number(name, value)?,
            DisplayField::FontSize => self.font_size = expect_number(name, value)?,
            // Saturating cast: negatives become 0.
            DisplayField::ExcerptLines => {
                self.excerpt_lines = expect_number(name, value)?.round() as u32
            }
            DisplayField::ShowTags => self.show_tags = expect_toggle(name, value)?,
            DisplayField::ShowArrows => self.show_arrows = expect_toggle(name, value)?,
        }
        Ok(())
    }

    fn reset(&mut self, field: DisplayField) {
        match field {
            DisplayField::CardWidth => self.card_width = default_card_width(),
            DisplayField::CardHeight => self.card_height = default_card_height(),
            DisplayField::FontSize => self.font_size = default_font_size(),
            DisplayField::ExcerptLines => self.excerpt_lines = default_excerpt_lines(),
            DisplayField::ShowTags => self.show_tags = default_show_tags(),
            DisplayField::ShowArrows => self.show_arrows = default_show_arrows(),
        }
    }
}

// ---------------------------------------------------------------------------
// Force settings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForceField {
    RepelForce,
    LinkForce,
    LinkDistance,
    CenterForce,
}

static FORCE_FIELDS: phf::Map<&'static str, ForceField> = phf_map! {
    "repel_force" => ForceField::RepelForce,
    "link_force" => ForceField::LinkForce,
    "link_distance" => ForceField::LinkDistance,
    "center_force" => ForceField::CenterForce,
};

impl FromStr for ForceField {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FORCE_FIELDS
            .get(s)
            .copied()
            .ok_or_else(|| SettingsError::UnknownField(s.to_string()))
    }
}

impl SettingField for ForceField {
    const ALL: &'static [Self] = &[
        ForceField::RepelForce,
        ForceField::LinkForce,
        ForceField::LinkDistance,
        ForceField::CenterForce,
    ];

    fn name(self) -> &'static str {
        match self {
            ForceField::RepelForce => "repel_force",
            ForceField::LinkForce => "link_force",
            ForceField::LinkDistance => "link_distance",
            ForceField::CenterForce => "center_force",
        }
    }

    fn default_value(self) -> SettingValue {
        SettingValue::Number(match self {
            ForceField::RepelForce => default_repel_force(),
            ForceField::LinkForce => default_link_force(),
            ForceField::LinkDistance => default_link_distance(),
            ForceField::CenterForce => default_center_force(),
        })
    }

    fn range(self) -> Option<RangeInclusive<f64>> {
        Some(match self {
            ForceField::RepelForce => 0.0..=20.0,
            ForceField::LinkForce => 0.0..=1.0,
            ForceField::LinkDistance => 30.0..=500.0,
            ForceField::CenterForce => 0.0..=1.0,
        })
    }
}

/// Slider values for the force simulation, before multipliers are applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForceSettings {
    #[serde(default = "default_repel_force")]
    pub repel_force: f64,
    #[serde(default = "default_link_force")]
    pub link_force: f64,
    #[serde(default = "default_link_distance")]
    pub link_distance: f64,
    #[serde(default = "default_center_force")]
    pub center_force: f64,
}

fn default_repel_force() -> f64 { 10.0 }
fn default_link_force() -> f64 { 1.0 }
fn default_link_distance() -> f64 { 250.0 }
fn default_center_force() -> f64 { 0.5 }

impl Default for ForceSettings {
    fn default() -> Self {
        Self {
            repel_force: default_repel_force(),
            link_force: default_link_force(),
            link_distance: default_link_distance(),
            center_force: default_center_force(),
        }
    }
}

impl ForceSettings {
    /// A copy with every field pulled into its range.
    pub fn clamped(&self) -> Self {
        Self {
            repel_force: clamp_to(ForceField::RepelForce, self.repel_force),
            link_force: clamp_to(ForceField::LinkForce, self.link_force),
            link_distance: clamp_to(ForceField::LinkDistance, self.link_distance),
            center_force: clamp_to(ForceField::CenterForce, self.center_force),
        }
    }
}

impl Settings for ForceSettings {
    type Field = ForceField;

    fn get(&self, field: ForceField) -> SettingValue {
        SettingValue::Number(match field {
            ForceField::RepelForce => self.repel_force,
            ForceField::LinkForce => self.link_force,
            ForceField::LinkDistance => self.link_distance,
            ForceField::CenterForce => self.center_force,
        })
    }

    fn set(&mut self, field: ForceField, value: SettingValue) -> Result<(), SettingsError> {
        let n = expect_number(field.name(), value)?;
        match field {
            ForceField::RepelForce => self.repel_force = n,
            ForceField::LinkForce => self.link_force = n,
            ForceField::LinkDistance => self.link_distance = n,
            ForceField::CenterForce => self.center_force = n,
        }
        Ok(())
    }

    fn reset(&mut self, field: ForceField) {
        match field {
            ForceField::RepelForce => self.repel_force = default_repel_force(),
            ForceField::LinkForce => self.link_force = default_link_force(),
            ForceField::LinkDistance => self.link_distance = default_link_distance(),
            ForceField::CenterForce => self.center_force = default_center_force(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
