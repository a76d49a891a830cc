//! Color codec: conversion between the textual color representations a theme
//! can carry (hex, HSL, RGB, OKLCH) and decoding of stored color values.
//!
//! A stored color is either a legacy plain hex string (`"#FFD100"`) or the
//! structured JSON form produced by [`to_stored_form`]:
//!
//! ```json
//! {"hex":"#ffd100","hsl":"hsl(49.18,100%,50%)","oklch":"oklch(87.4% 0.178 93.6)",
//!  "rgb":"rgb(255,209,0)","reference":"hex"}
//! ```
//!
//! Conversion never panics and never returns a partially filled result:
//! unparseable input yields a [`ColorError`].

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use palette::{FromColor, Hsl, Oklch, Srgb};
use regex::Regex;
use serde::{Deserialize, Serialize};

/* --------------------------------------------------------------------------
   Formats
   -------------------------------------------------------------------------- */

/// Chroma below which a color is treated as achromatic (hue undefined).
pub const ACHROMATIC_CHROMA: f64 = 0.0001;

/// A textual color representation the CSS emitter can be asked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    #[default]
    Hex,
    Hsl,
    Oklch,
    Rgb,
}

impl ColorFormat {
    pub const ALL: [ColorFormat; 4] = [Self::Hex, Self::Hsl, Self::Oklch, Self::Rgb];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Hsl => "hsl",
            Self::Oklch => "oklch",
            Self::Rgb => "rgb",
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorFormat {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "hsl" => Ok(Self::Hsl),
            "oklch" => Ok(Self::Oklch),
            "rgb" => Ok(Self::Rgb),
            other => Err(ColorError::UnknownFormat(other.to_string())),
        }
    }
}

/// The format that is authoritative when the stored representations disagree.
///
/// Only `hex` is ever written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceFormat {
    #[default]
    Hex,
}

/// One color in every supported representation.
///
/// `hex` is mandatory. The other representations are optional on decode so
/// that partially written records still resolve (missing formats fall back
/// to `hex`, see [`ColorFormats::select`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorFormats {
    pub hex: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hsl: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oklch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rgb: Option<String>,
    #[serde(default)]
    pub reference: ReferenceFormat,
}

impl ColorFormats {
    /// The representation for `format`, or `hex` when that one is absent.
    pub fn select(&self, format: ColorFormat) -> &str {
        let picked = match format {
            ColorFormat::Hex => None,
            ColorFormat::Hsl => self.hsl.as_deref(),
            ColorFormat::Oklch => self.oklch.as_deref(),
            ColorFormat::Rgb => self.rgb.as_deref(),
        };
        picked
            .filter(|s| !s.is_empty())
            .unwrap_or(self.hex.as_str())
    }
}

/* --------------------------------------------------------------------------
   Errors
   -------------------------------------------------------------------------- */

/// Why a color string could not be converted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("Color value is empty")]
    Empty,

    #[error("Unrecognized color: {0}")]
    Unrecognized(String),

    #[error("Unknown color format '{0}'. Must be one of: hex, hsl, oklch, rgb")]
    UnknownFormat(String),

    #[error("Failed to serialize color: {0}")]
    Serialize(String),
}

/* --------------------------------------------------------------------------
   Stored values
   -------------------------------------------------------------------------- */

/// A color value as found in a Theme Record field or a preset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredColor {
    /// Plain string written before the structured form existed (or any other
    /// string that does not decode as structured JSON).
    Legacy(String),
    /// Structured JSON form.
    Structured(ColorFormats),
}

impl StoredColor {
    /// Classify a raw stored string.
    pub fn from_stored(raw: &str) -> Self {
        match serde_json::from_str::<ColorFormats>(raw) {
            Ok(formats) => Self::Structured(formats),
            Err(_) => Self::Legacy(raw.to_string()),
        }
    }

    /// Upgrade to the structured form.
    ///
    /// Legacy values are only upgraded when they look like a hex code (`#`
    /// prefix) and convert cleanly; anything else yields `None` and is left
    /// to the caller to pass through verbatim.
    pub fn upgrade(&self) -> Option<ColorFormats> {
        match self {
            Self::Structured(formats) => Some(formats.clone()),
            Self::Legacy(raw) if raw.trim_start().starts_with('#') => convert(raw).ok(),
            Self::Legacy(_) => None,
        }
    }
}

/// Decode a stored color value. Empty or absent means "unset".
pub fn parse_color_value(stored: Option<&str>) -> Option<ColorFormats> {
    let raw = stored.filter(|s| !s.trim().is_empty())?;
    StoredColor::from_stored(raw).upgrade()
}

/// Convert `input` and serialize it into the structured storage form.
pub fn to_stored_form(input: &str) -> Result<String, ColorError> {
    let formats = convert(input)?;
    serde_json::to_string(&formats).map_err(|e| ColorError::Serialize(e.to_string()))
}

/* --------------------------------------------------------------------------
   Conversion
   -------------------------------------------------------------------------- */

/// An sRGB color with straight alpha, channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Rgba {
    rgb: Srgb<f64>,
    alpha: f64,
}

/// Convert any recognized color string into all representations.
///
/// Accepts `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa` (the `#` is optional),
/// CSS named colors, and `rgb()`/`rgba()`/`hsl()`/`hsla()` functional
/// notation with comma or space separated arguments.
pub fn convert(input: &str) -> Result<ColorFormats, ColorError> {
    let color = parse_color(input)?;
    Ok(ColorFormats {
        hex: format_hex(&color),
        hsl: Some(format_hsl(&color)),
        oklch: Some(oklch_of(&color)),
        rgb: Some(format_rgb(&color)),
        reference: ReferenceFormat::Hex,
    })
}

/// Whether [`convert`] would accept `input`.
pub fn is_valid_color(input: &str) -> bool {
    parse_color(input).is_ok()
}

/// Normalize a hex code to the form [`convert`] produces: lower-case,
/// `#`-prefixed, shorthand expanded. Returns `None` for non-hex input.
pub fn normalize_hex(input: &str) -> Option<String> {
    parse_hex(input.trim()).map(|c| format_hex(&c))
}

/// Normalize what an operator typed into the color picker.
///
/// Empty input clears the field. A bare 3- or 6-digit hex code gets its
/// `#`; anything else is kept as typed and left to validation.
pub fn normalize_picker_input(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    if BARE_HEX_RE.is_match(trimmed) {
        return Some(format!("#{trimmed}"));
    }
    Some(trimmed.to_string())
}

static BARE_HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$").expect("valid regex"));

static FUNCTIONAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)(rgba?|hsla?)\(\s*([^()]*?)\s*\)$").expect("valid regex")
});

fn parse_color(input: &str) -> Result<Rgba, ColorError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ColorError::Empty);
    }

    if let Some(caps) = FUNCTIONAL_RE.captures(trimmed) {
        let args = caps.get(2).map_or("", |m| m.as_str());
        let parsed = match caps[1].to_ascii_lowercase().as_str() {
            "rgb" | "rgba" => parse_rgb_args(args),
            _ => parse_hsl_args(args),
        };
        return parsed.ok_or_else(|| ColorError::Unrecognized(trimmed.to_string()));
    }

    if let Some(named) = palette::named::from_str(&trimmed.to_ascii_lowercase()) {
        return Ok(Rgba {
            rgb: named.into_format(),
            alpha: 1.0,
        });
    }

    parse_hex(trimmed).ok_or_else(|| ColorError::Unrecognized(trimmed.to_string()))
}

fn parse_hex(input: &str) -> Option<Rgba> {
    let digits = input.strip_prefix('#').unwrap_or(input);
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let expanded: String = match digits.len() {
        3 | 4 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => digits.to_string(),
        _ => return None,
    };

    let byte = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
    let rgb = Srgb::new(byte(0)?, byte(2)?, byte(4)?).into_format();
    let alpha = if expanded.len() == 8 {
        f64::from(byte(6)?) / 255.0
    } else {
        1.0
    };
    Some(Rgba { rgb, alpha })
}

fn split_args(args: &str) -> Vec<&str> {
    args.split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn parse_alpha(raw: Option<&&str>) -> Option<f64> {
    let Some(raw) = raw else {
        return Some(1.0);
    };
    let value = match raw.strip_suffix('%') {
        Some(pct) => parse_number(pct)? / 100.0,
        None => parse_number(raw)?,
    };
    Some(value.clamp(0.0, 1.0))
}

fn parse_rgb_args(args: &str) -> Option<Rgba> {
    let parts = split_args(args);
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }

    let channel = |raw: &str| -> Option<f64> {
        let value = match raw.strip_suffix('%') {
            Some(pct) => parse_number(pct)? * 2.55,
            None => parse_number(raw)?,
        };
        Some(value.clamp(0.0, 255.0) / 255.0)
    };

    Some(Rgba {
        rgb: Srgb::new(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?),
        alpha: parse_alpha(parts.get(3))?,
    })
}

fn parse_hsl_args(args: &str) -> Option<Rgba> {
    let parts = split_args(args);
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }

    let hue = parse_number(parts[0].trim_end_matches("deg"))?;
    let percent = |raw: &str| -> Option<f64> {
        let value = parse_number(raw.trim_end_matches('%'))?;
        Some((value / 100.0).clamp(0.0, 1.0))
    };

    let hsl: Hsl<palette::encoding::Srgb, f64> =
        Hsl::new(hue, percent(parts[1])?, percent(parts[2])?);
    Some(Rgba {
        rgb: Srgb::from_color(hsl),
        alpha: parse_alpha(parts.get(3))?,
    })
}

/* --------------------------------------------------------------------------
   Formatting
   -------------------------------------------------------------------------- */

/// Round to two decimals, the precision used in `hsl()`/`rgba()` alpha output.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0 + 0.0
}

fn to_byte(channel: f64) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn format_hex(color: &Rgba) -> String {
    let (r, g, b) = (
        to_byte(color.rgb.red),
        to_byte(color.rgb.green),
        to_byte(color.rgb.blue),
    );
    if color.alpha < 1.0 {
        let a = to_byte(color.alpha);
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    } else {
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

fn format_rgb(color: &Rgba) -> String {
    let (r, g, b) = (
        to_byte(color.rgb.red),
        to_byte(color.rgb.green),
        to_byte(color.rgb.blue),
    );
    if color.alpha < 1.0 {
        format!("rgba({r},{g},{b},{})", round2(color.alpha))
    } else {
        format!("rgb({r},{g},{b})")
    }
}

fn format_hsl(color: &Rgba) -> String {
    let hsl: Hsl<palette::encoding::Srgb, f64> = Hsl::from_color(color.rgb);
    let hue = hsl.hue.into_positive_degrees();
    let hue = if hue.is_nan() || hsl.saturation == 0.0 {
        0.0
    } else {
        round2(hue)
    };
    let saturation = round2(hsl.saturation * 100.0);
    let lightness = round2(hsl.lightness * 100.0);

    if color.alpha < 1.0 {
        format!(
            "hsla({hue},{saturation}%,{lightness}%,{})",
            round2(color.alpha)
        )
    } else {
        format!("hsl({hue},{saturation}%,{lightness}%)")
    }
}

fn oklch_of(color: &Rgba) -> String {
    let oklch: Oklch<f64> = Oklch::from_color(color.rgb);
    format_oklch(
        oklch.l,
        oklch.chroma,
        oklch.hue.into_positive_degrees(),
    )
}

/// Format OKLCH components as `oklch(L% C H)`.
///
/// Lightness is given in `0.0..=1.0` and printed as a percentage with one
/// decimal; chroma gets three decimals and hue one. Achromatic colors (chroma
/// below [`ACHROMATIC_CHROMA`]) and NaN hues print as `oklch(L% 0 0)`.
pub fn format_oklch(lightness: f64, chroma: f64, hue: f64) -> String {
    let l = format!("{:.1}", lightness * 100.0);
    if chroma.is_nan() || chroma < ACHROMATIC_CHROMA {
        return format!("oklch({l}% 0 0)");
    }
    let hue = if hue.is_nan() {
        "0".to_string()
    } else {
        format!("{hue:.1}")
    };
    format!("oklch({l}% {chroma:.3} {hue})")
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    // --- convert ---

    #[test]
    fn convert_hex_produces_every_format() {
        let formats = convert("#FFD100").unwrap();
        assert_eq!(formats.hex, "#ffd100");
        assert_eq!(formats.rgb.as_deref(), Some("rgb(255,209,0)"));
        assert_eq!(formats.hsl.as_deref(), Some("hsl(49.18,100%,50%)"));
        assert!(formats.oklch.as_deref().unwrap().starts_with("oklch("));
        assert_eq!(formats.reference, ReferenceFormat::Hex);
    }

    #[test]
    fn convert_expands_shorthand_hex() {
        assert_eq!(convert("#fff").unwrap().hex, "#ffffff");
        assert_eq!(convert("abc").unwrap().hex, "#aabbcc");
    }

    #[test]
    fn convert_named_color() {
        let formats = convert("tomato").unwrap();
        assert_eq!(formats.hex, "#ff6347");
        assert_eq!(convert("Red").unwrap().hex, "#ff0000");
    }

    #[test]
    fn convert_rgb_function() {
        assert_eq!(convert("rgb(255, 209, 0)").unwrap().hex, "#ffd100");
        assert_eq!(convert("rgb(255 209 0)").unwrap().hex, "#ffd100");
    }

    #[test]
    fn convert_rgba_keeps_alpha() {
        let formats = convert("rgba(255, 255, 255, 0.1)").unwrap();
        assert_eq!(formats.hex, "#ffffff1a");
        assert_eq!(formats.rgb.as_deref(), Some("rgba(255,255,255,0.1)"));
        assert_eq!(formats.hsl.as_deref(), Some("hsla(0,0%,100%,0.1)"));
    }

    #[test]
    fn convert_hsl_function() {
        assert_eq!(convert("hsl(0, 100%, 50%)").unwrap().hex, "#ff0000");
        assert_eq!(convert("hsl(120deg 100% 50%)").unwrap().hex, "#00ff00");
    }

    #[test]
    fn convert_rejects_garbage() {
        assert_matches!(convert("not-a-color"), Err(ColorError::Unrecognized(_)));
        assert_matches!(convert("#12345"), Err(ColorError::Unrecognized(_)));
        assert_matches!(convert("rgb(1, 2)"), Err(ColorError::Unrecognized(_)));
        assert_matches!(convert("   "), Err(ColorError::Empty));
    }

    #[test]
    fn is_valid_color_matches_convert() {
        assert!(is_valid_color("#000"));
        assert!(is_valid_color("white"));
        assert!(!is_valid_color("#GGGGGG"));
    }

    // --- oklch ---

    #[test]
    fn oklch_of_greys_has_zero_hue() {
        for input in ["#000000", "#ffffff", "#808080", "#202020"] {
            let oklch = convert(input).unwrap().oklch.unwrap();
            assert!(oklch.ends_with(" 0 0)"), "{input} produced {oklch}");
            assert!(!oklch.contains("NaN"));
        }
    }

    #[test]
    fn oklch_white_is_full_lightness() {
        assert_eq!(convert("#ffffff").unwrap().oklch.unwrap(), "oklch(100.0% 0 0)");
        assert_eq!(convert("#000000").unwrap().oklch.unwrap(), "oklch(0.0% 0 0)");
    }

    #[test]
    fn oklch_of_red_has_expected_shape() {
        // Pure sRGB red: L ≈ 62.8%, C ≈ 0.258, H ≈ 29.2.
        assert_eq!(convert("#ff0000").unwrap().oklch.unwrap(), "oklch(62.8% 0.258 29.2)");
    }

    #[test]
    fn format_oklch_zeroes_undefined_hue() {
        assert_eq!(format_oklch(0.5, 0.00005, f64::NAN), "oklch(50.0% 0 0)");
        assert_eq!(format_oklch(0.5, 0.1, f64::NAN), "oklch(50.0% 0.100 0)");
        assert_eq!(format_oklch(0.75, 0.12345, 210.06), "oklch(75.0% 0.123 210.1)");
    }

    // --- stored values ---

    #[test]
    fn stored_structured_value_decodes() {
        let raw = r##"{"hex":"#FFD100","hsl":"hsl(49.18,100%,50%)","oklch":"oklch(87.4% 0.178 93.6)","rgb":"rgb(255,209,0)","reference":"hex"}"##;
        let formats = parse_color_value(Some(raw)).unwrap();
        assert_eq!(formats.hex, "#FFD100");
        assert_eq!(formats.select(ColorFormat::Rgb), "rgb(255,209,0)");
    }

    #[test]
    fn stored_legacy_hex_is_upgraded() {
        assert_matches!(StoredColor::from_stored("#FFD100"), StoredColor::Legacy(_));
        let formats = parse_color_value(Some("#FFD100")).unwrap();
        assert_eq!(formats.hex, "#ffd100");
    }

    #[test]
    fn stored_non_hex_legacy_is_not_upgraded() {
        assert_eq!(parse_color_value(Some("rgba(255, 255, 255, 0.1)")), None);
        assert_eq!(parse_color_value(Some("{broken json")), None);
        assert_eq!(parse_color_value(Some("")), None);
        assert_eq!(parse_color_value(None), None);
    }

    #[test]
    fn select_falls_back_to_hex_when_format_missing() {
        let formats = parse_color_value(Some(r##"{"hex":"#123456"}"##)).unwrap();
        assert_eq!(formats.select(ColorFormat::Oklch), "#123456");
        assert_eq!(formats.select(ColorFormat::Hsl), "#123456");
        assert_eq!(formats.reference, ReferenceFormat::Hex);
    }

    #[test]
    fn stored_form_round_trips_hex() {
        for input in ["#FFD100", "#abc", "#0099ff", "#2A2F66"] {
            let stored = to_stored_form(input).unwrap();
            let parsed = parse_color_value(Some(&stored)).unwrap();
            assert_eq!(Some(parsed.hex), normalize_hex(input), "round trip of {input}");
        }
    }

    // --- normalization ---

    #[test]
    fn normalize_hex_lowercases_and_expands() {
        assert_eq!(normalize_hex("#ABC").as_deref(), Some("#aabbcc"));
        assert_eq!(normalize_hex("FFD100").as_deref(), Some("#ffd100"));
        assert_eq!(normalize_hex("red"), None);
    }

    #[test]
    fn picker_input_normalization() {
        assert_eq!(normalize_picker_input(""), None);
        assert_eq!(normalize_picker_input("  "), None);
        assert_eq!(normalize_picker_input("ffd100").as_deref(), Some("#ffd100"));
        assert_eq!(normalize_picker_input("fff").as_deref(), Some("#fff"));
        assert_eq!(normalize_picker_input("#ffd100").as_deref(), Some("#ffd100"));
        assert_eq!(normalize_picker_input("tomato").as_deref(), Some("tomato"));
    }

    // --- format parsing ---

    #[test]
    fn color_format_parses_case_insensitively() {
        assert_eq!("OKLCH".parse::<ColorFormat>().unwrap(), ColorFormat::Oklch);
        assert_eq!(" rgb ".parse::<ColorFormat>().unwrap(), ColorFormat::Rgb);
        assert_matches!("lab".parse::<ColorFormat>(), Err(ColorError::UnknownFormat(_)));
    }
}
