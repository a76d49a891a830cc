//! Theme Resolver: turns a Theme Record into format-selected token maps.
//!
//! This is the only place that distinguishes presets from custom values.
//! Downstream code (the CSS emitter) sees a [`ResolvedTheme`] and nothing
//! else.

use std::collections::BTreeMap;

use crate::color::{parse_color_value, ColorFormat};
use crate::presets::{preset_by_id, Preset, PresetChoice};
use crate::record::ThemeRecord;
use crate::tokens::{ColorToken, Mode, COLOR_TOKENS, SIZE_TOKENS};

/// Token key → rendered value.
pub type TokenMap = BTreeMap<&'static str, String>;

/// Format-selected token values, ready for emission.
///
/// The default value is the empty theme: nothing to emit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedTheme {
    /// Light (default) color values.
    pub light: TokenMap,
    /// Dark color values.
    pub dark: TokenMap,
    /// Size values; these apply to both modes.
    pub sizes: TokenMap,
}

impl ResolvedTheme {
    /// No light declaration at all (neither a color nor a size).
    pub fn is_empty(&self) -> bool {
        self.light.is_empty() && self.sizes.is_empty()
    }
}

/// Where token values are read from.
enum Source<'a> {
    Custom(&'a ThemeRecord),
    Preset(&'static Preset),
}

impl<'a> Source<'a> {
    fn color(&self, token: &ColorToken, mode: Mode) -> Option<&'a str> {
        match self {
            Source::Custom(record) => record.color(token.field_name(mode)),
            Source::Preset(preset) => preset.color(mode, token.key).filter(|v| !v.is_empty()),
        }
    }

    fn size(&self, key: &str) -> Option<&'a str> {
        match self {
            Source::Custom(record) => record.size(key),
            Source::Preset(preset) => preset.size(key).filter(|v| !v.is_empty()),
        }
    }
}

/// Select the source of token values, or `None` when nothing should render.
fn select_source(record: Option<&ThemeRecord>) -> Option<Source<'_>> {
    let Some(record) = record else {
        tracing::debug!("No theme record stored");
        return None;
    };
    if !record.settings.enabled {
        tracing::debug!("Theme is disabled");
        return None;
    }

    match record.preset_choice() {
        PresetChoice::Custom => Some(Source::Custom(record)),
        PresetChoice::Preset(id) => match preset_by_id(&id) {
            Some(preset) => Some(Source::Preset(preset)),
            None => {
                tracing::error!(preset = %id, "Preset theme not found");
                None
            }
        },
    }
}

/// Render one stored color in `format`.
///
/// Values that do not decode (non-hex legacy strings such as `rgba(...)`,
/// corrupt JSON) pass through verbatim.
fn render_color(raw: &str, format: ColorFormat, token: &ColorToken) -> String {
    match parse_color_value(Some(raw)) {
        Some(formats) => formats.select(format).to_string(),
        None => {
            tracing::debug!(token = token.key, value = raw, "Passing color through unparsed");
            raw.to_string()
        }
    }
}

/// Resolve a Theme Record into token maps in the requested color format.
///
/// Returns the empty theme when the record is absent or disabled, when it
/// names an unknown preset, or when no light declaration would be produced.
/// Dark values that are not set inherit the light source value, which is
/// rendered again on its own (not copied from the light output).
pub fn resolve(record: Option<&ThemeRecord>, format: ColorFormat) -> ResolvedTheme {
    let Some(source) = select_source(record) else {
        return ResolvedTheme::default();
    };

    let mut resolved = ResolvedTheme::default();

    for token in COLOR_TOKENS {
        let light = source.color(token, Mode::Light);
        let dark = source.color(token, Mode::Dark).or(light);

        if let Some(raw) = light {
            resolved.light.insert(token.key, render_color(raw, format, token));
        }
        if let Some(raw) = dark {
            resolved.dark.insert(token.key, render_color(raw, format, token));
        }
    }

    for token in SIZE_TOKENS {
        if let Some(value) = source.size(token.key) {
            resolved.sizes.insert(token.key, value.to_string());
        }
    }

    if resolved.is_empty() {
        return ResolvedTheme::default();
    }
    resolved
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */
