//! Preset Registry: built-in, complete theme bundles an operator can select
//! instead of entering custom values.
//!
//! Presets are compiled in and never reference the Theme Record. Color maps
//! are keyed by token key (not by record field name) and hold raw stored
//! strings, so they go through exactly the same decode/format path as
//! custom values.

use serde::Serialize;

use crate::tokens::{Label, Mode};

/* --------------------------------------------------------------------------
   Types
   -------------------------------------------------------------------------- */

/// Literal `usePreset` value selecting the record's own custom fields.
pub const CUSTOM_PRESET: &str = "custom";

/// An immutable, built-in theme bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub id: &'static str,
    pub name: Label,
    pub light: &'static [(&'static str, &'static str)],
    pub dark: &'static [(&'static str, &'static str)],
    pub sizes: &'static [(&'static str, &'static str)],
}

impl Preset {
    /// Color map for `mode`, keyed by token key.
    pub fn colors(&self, mode: Mode) -> &'static [(&'static str, &'static str)] {
        match mode {
            Mode::Light => self.light,
            Mode::Dark => self.dark,
        }
    }

    /// Raw value of color token `key` in `mode`.
    pub fn color(&self, mode: Mode, key: &str) -> Option<&'static str> {
        lookup(self.colors(mode), key)
    }

    /// Raw value of size token `key`.
    pub fn size(&self, key: &str) -> Option<&'static str> {
        lookup(self.sizes, key)
    }

    pub fn summary(&self) -> PresetSummary {
        PresetSummary {
            id: self.id,
            name: self.name,
        }
    }
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Identifier and display name of a preset, for the admin selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PresetSummary {
    pub id: &'static str,
    pub name: Label,
}

/// What the `usePreset` setting selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresetChoice {
    /// Use the record's own color and size fields.
    Custom,
    /// Use the preset with this identifier (which may not exist).
    Preset(String),
}

impl PresetChoice {
    /// Interpret a stored `usePreset` value. Absent, empty, and `"custom"`
    /// all select custom values.
    pub fn from_setting(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") | Some(CUSTOM_PRESET) => Self::Custom,
            Some(id) => Self::Preset(id.to_string()),
        }
    }
}

/* --------------------------------------------------------------------------
   Registry
   -------------------------------------------------------------------------- */

static PRESETS: &[Preset] = &[BARDAHL, LUXINNOVATION, COMPUTERLAND];

/// Every built-in preset, in selector order.
pub fn presets() -> &'static [Preset] {
    PRESETS
}

/// Find a preset by identifier.
pub fn preset_by_id(id: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.id == id)
}

/* --------------------------------------------------------------------------
   Data
   -------------------------------------------------------------------------- */

#[rustfmt::skip]
const BARDAHL: Preset = Preset {
    id: "bardahl",
    name: Label {
        en: "Bardahl Theme",
        fr: "Thème Bardahl",
        nl: "Bardahl Thema",
    },
    light: &[
        ("background", "#FFFFFF"), ("foreground", "#202020"), ("card", "#FFFFFF"),
        ("cardForeground", "#202020"), ("popover", "#FFFFFF"), ("popoverForeground", "#202020"),
        ("primary", "#FFD100"), ("primaryForeground", "#202020"), ("secondary", "#202020"),
        ("secondaryForeground", "#FFFFFF"), ("muted", "#F4F4F4"), ("mutedForeground", "#666666"),
        ("accent", "#FFE766"), ("accentForeground", "#202020"), ("destructive", "#FF4444"),
        ("destructiveForeground", "#FFFFFF"), ("border", "#E5E5E5"), ("input", "#E5E5E5"),
        ("ring", "#FFD100"), ("chart1", "#FFD100"), ("chart2", "#FF6B6B"),
        ("chart3", "#4ECDC4"), ("chart4", "#45B7D1"), ("chart5", "#96CEB4"),
        ("sidebar", "#202020"), ("sidebarForeground", "#FFFFFF"), ("sidebarPrimary", "#FFD100"),
        ("sidebarPrimaryForeground", "#202020"), ("sidebarAccent", "#FFE766"), ("sidebarAccentForeground", "#202020"),
        ("sidebarBorder", "#333333"),
    ],
    dark: &[
        ("background", "#202020"), ("foreground", "#FFFFFF"), ("card", "#2A2A2A"),
        ("cardForeground", "#FFFFFF"), ("popover", "#2A2A2A"), ("popoverForeground", "#FFFFFF"),
        ("primary", "#FFD100"), ("primaryForeground", "#202020"), ("secondary", "#333333"),
        ("secondaryForeground", "#FFFFFF"), ("muted", "#333333"), ("mutedForeground", "#999999"),
        ("accent", "#FFE766"), ("accentForeground", "#202020"), ("destructive", "#FF4444"),
        ("destructiveForeground", "#FFFFFF"), ("border", "rgba(255, 255, 255, 0.1)"), ("input", "rgba(255, 255, 255, 0.1)"),
        ("ring", "#FFD100"), ("chart1", "#FFD100"), ("chart2", "#FF6B6B"),
        ("chart3", "#4ECDC4"), ("chart4", "#45B7D1"), ("chart5", "#96CEB4"),
        ("sidebar", "#2A2A2A"), ("sidebarForeground", "#FFFFFF"), ("sidebarPrimary", "#FFD100"),
        ("sidebarPrimaryForeground", "#202020"), ("sidebarAccent", "#FFE766"), ("sidebarAccentForeground", "#202020"),
        ("sidebarBorder", "rgba(255, 255, 255, 0.1)"),
    ],
    sizes: &[
        ("radius", "0.5rem"), ("radiusLg", "0.75rem"), ("radiusSm", "0.25rem"),
    ],
};

#[rustfmt::skip]
const LUXINNOVATION: Preset = Preset {
    id: "luxinnovation",
    name: Label {
        en: "Luxinnovation Theme",
        fr: "Thème Luxinnovation",
        nl: "Luxinnovation Thema",
    },
    light: &[
        ("background", "#FFFFFF"), ("foreground", "#1D214E"), ("card", "#FFFFFF"),
        ("cardForeground", "#1D214E"), ("popover", "#FFFFFF"), ("popoverForeground", "#1D214E"),
        ("primary", "#0099FF"), ("primaryForeground", "#FFFFFF"), ("secondary", "#1D214E"),
        ("secondaryForeground", "#FFFFFF"), ("muted", "#F0F7FF"), ("mutedForeground", "#4A4D6E"),
        ("accent", "#66C2FF"), ("accentForeground", "#1D214E"), ("destructive", "#FF4444"),
        ("destructiveForeground", "#FFFFFF"), ("border", "#E6F3FF"), ("input", "#E6F3FF"),
        ("ring", "#0099FF"), ("chart1", "#0099FF"), ("chart2", "#FF6B6B"),
        ("chart3", "#4ECDC4"), ("chart4", "#FFD93D"), ("chart5", "#95D5B2"),
        ("sidebar", "#1D214E"), ("sidebarForeground", "#FFFFFF"), ("sidebarPrimary", "#0099FF"),
        ("sidebarPrimaryForeground", "#FFFFFF"), ("sidebarAccent", "#66C2FF"), ("sidebarAccentForeground", "#1D214E"),
        ("sidebarBorder", "#2A2F66"),
    ],
    dark: &[
        ("background", "#1D214E"), ("foreground", "#FFFFFF"), ("card", "#2A2F66"),
        ("cardForeground", "#FFFFFF"), ("popover", "#2A2F66"), ("popoverForeground", "#FFFFFF"),
        ("primary", "#0099FF"), ("primaryForeground", "#FFFFFF"), ("secondary", "#E6F3FF"),
        ("secondaryForeground", "#1D214E"), ("muted", "#353B7A"), ("mutedForeground", "#99D6FF"),
        ("accent", "#66C2FF"), ("accentForeground", "#1D214E"), ("destructive", "#FF4444"),
        ("destructiveForeground", "#FFFFFF"), ("border", "rgba(255, 255, 255, 0.1)"), ("input", "rgba(255, 255, 255, 0.1)"),
        ("ring", "#0099FF"), ("chart1", "#0099FF"), ("chart2", "#FF6B6B"),
        ("chart3", "#4ECDC4"), ("chart4", "#FFD93D"), ("chart5", "#95D5B2"),
        ("sidebar", "#2A2F66"), ("sidebarForeground", "#FFFFFF"), ("sidebarPrimary", "#0099FF"),
        ("sidebarPrimaryForeground", "#FFFFFF"), ("sidebarAccent", "#66C2FF"), ("sidebarAccentForeground", "#1D214E"),
        ("sidebarBorder", "rgba(255, 255, 255, 0.1)"),
    ],
    sizes: &[
        ("radius", "0.5rem"), ("radiusLg", "0.75rem"), ("radiusSm", "0.25rem"),
    ],
};

#[rustfmt::skip]
const COMPUTERLAND: Preset = Preset {
    id: "computerland",
    name: Label {
        en: "Computerland Theme",
        fr: "Thème Computerland",
        nl: "Computerland Thema",
    },
    light: &[
        ("background", "#FFFFFF"), ("foreground", "#2F2F2F"), ("card", "#FFFFFF"),
        ("cardForeground", "#2F2F2F"), ("popover", "#FFFFFF"), ("popoverForeground", "#2F2F2F"),
        ("primary", "#007CC2"), ("primaryForeground", "#FFFFFF"), ("secondary", "#2F2F2F"),
        ("secondaryForeground", "#FFFFFF"), ("muted", "#F8FAFC"), ("mutedForeground", "#64748B"),
        ("accent", "#E6F4FB"), ("accentForeground", "#007CC2"), ("destructive", "#EF4444"),
        ("destructiveForeground", "#FFFFFF"), ("border", "#E2E8F0"), ("input", "#F1F5F9"),
        ("ring", "#007CC2"), ("chart1", "#007CC2"), ("chart2", "#FF6B6B"),
        ("chart3", "#06D6A0"), ("chart4", "#FFD93D"), ("chart5", "#9B5DE5"),
        ("sidebar", "#2F2F2F"), ("sidebarForeground", "#FFFFFF"), ("sidebarPrimary", "#007CC2"),
        ("sidebarPrimaryForeground", "#FFFFFF"), ("sidebarAccent", "#E6F4FB"), ("sidebarAccentForeground", "#007CC2"),
        ("sidebarBorder", "#404040"),
    ],
    dark: &[
        ("background", "#2F2F2F"), ("foreground", "#FFFFFF"), ("card", "#404040"),
        ("cardForeground", "#FFFFFF"), ("popover", "#404040"), ("popoverForeground", "#FFFFFF"),
        ("primary", "#007CC2"), ("primaryForeground", "#FFFFFF"), ("secondary", "#F8FAFC"),
        ("secondaryForeground", "#2F2F2F"), ("muted", "#404040"), ("mutedForeground", "#94A3B8"),
        ("accent", "#0EA5E9"), ("accentForeground", "#FFFFFF"), ("destructive", "#EF4444"),
        ("destructiveForeground", "#FFFFFF"), ("border", "rgba(255, 255, 255, 0.1)"), ("input", "rgba(255, 255, 255, 0.05)"),
        ("ring", "#007CC2"), ("chart1", "#007CC2"), ("chart2", "#FF6B6B"),
        ("chart3", "#06D6A0"), ("chart4", "#FFD93D"), ("chart5", "#9B5DE5"),
        ("sidebar", "#404040"), ("sidebarForeground", "#FFFFFF"), ("sidebarPrimary", "#007CC2"),
        ("sidebarPrimaryForeground", "#FFFFFF"), ("sidebarAccent", "#0EA5E9"), ("sidebarAccentForeground", "#FFFFFF"),
        ("sidebarBorder", "rgba(255, 255, 255, 0.1)"),
    ],
    sizes: &[
        ("radius", "0.375rem"), ("radiusLg", "0.5rem"), ("radiusSm", "0.25rem"),
    ],
};

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{COLOR_TOKENS, SIZE_TOKENS};

    #[test]
    fn every_preset_is_complete() {
        for preset in presets() {
            for token in COLOR_TOKENS {
                for mode in Mode::ALL {
                    assert!(
                        preset.color(mode, token.key).is_some(),
                        "{} lacks {} {}",
                        preset.id,
                        mode.as_str(),
                        token.key
                    );
                }
            }
            for token in SIZE_TOKENS {
                assert!(preset.size(token.key).is_some(), "{} lacks {}", preset.id, token.key);
            }
        }
    }

    #[test]
    fn presets_only_use_catalog_keys() {
        for preset in presets() {
            for (key, _) in preset.light.iter().chain(preset.dark) {
                assert!(crate::tokens::color_token(key).is_some(), "{key}");
            }
            for (key, _) in preset.sizes {
                assert!(crate::tokens::size_token(key).is_some(), "{key}");
            }
        }
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(preset_by_id("bardahl").unwrap().color(Mode::Light, "primary"), Some("#FFD100"));
        assert_eq!(preset_by_id("computerland").unwrap().size("radius"), Some("0.375rem"));
        assert!(preset_by_id("unknownId").is_none());
        assert!(preset_by_id(CUSTOM_PRESET).is_none());
    }

    #[test]
    fn preset_ids_are_unique() {
        let mut ids: Vec<_> = presets().iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), presets().len());
    }

    #[test]
    fn preset_choice_from_setting() {
        assert_eq!(PresetChoice::from_setting(None), PresetChoice::Custom);
        assert_eq!(PresetChoice::from_setting(Some("")), PresetChoice::Custom);
        assert_eq!(PresetChoice::from_setting(Some("custom")), PresetChoice::Custom);
        assert_eq!(
            PresetChoice::from_setting(Some("bardahl")),
            PresetChoice::Preset("bardahl".into())
        );
    }
}
