//! The Theme Record: the single persisted theme configuration.
//!
//! Stored as the named aggregate `theme` with three groups: `settings`,
//! `colors` (record field name → stored color string) and `sizes` (size
//! token key → size string). Field values may be `null` or empty, meaning
//! "unset".

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::presets::PresetChoice;
use crate::types::Timestamp;

/// Global switches of the theme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSettings {
    /// Global on/off switch. `null` reads as `false`.
    #[serde(default, deserialize_with = "null_as_false")]
    pub enabled: bool,
    /// `"custom"` or a preset identifier. Absent reads as custom.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_preset: Option<String>,
}

/// The persisted theme aggregate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeRecord {
    #[serde(default)]
    pub settings: ThemeSettings,
    #[serde(default)]
    pub colors: BTreeMap<String, Option<String>>,
    #[serde(default)]
    pub sizes: BTreeMap<String, Option<String>>,
    /// Set by the store on every successful write.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

impl ThemeRecord {
    /// An enabled record with no values, using custom fields.
    pub fn enabled() -> Self {
        Self {
            settings: ThemeSettings {
                enabled: true,
                use_preset: None,
            },
            ..Self::default()
        }
    }

    pub fn with_preset(mut self, preset: impl Into<String>) -> Self {
        self.settings.use_preset = Some(preset.into());
        self
    }

    pub fn with_color(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.colors.insert(field.into(), Some(value.into()));
        self
    }

    pub fn with_size(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.sizes.insert(key.into(), Some(value.into()));
        self
    }

    /// Stored value of a color field, treating `null` and `""` as unset.
    pub fn color(&self, field: &str) -> Option<&str> {
        non_empty(self.colors.get(field))
    }

    /// Stored value of a size field, treating `null` and `""` as unset.
    pub fn size(&self, key: &str) -> Option<&str> {
        non_empty(self.sizes.get(key))
    }

    pub fn preset_choice(&self) -> PresetChoice {
        PresetChoice::from_setting(self.settings.use_preset.as_deref())
    }
}

fn non_empty(value: Option<&Option<String>>) -> Option<&str> {
    value
        .and_then(|v| v.as_deref())
        .filter(|v| !v.trim().is_empty())
}
