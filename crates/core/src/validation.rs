//! Editor-facing validation of Theme Record input.
//!
//! Validation runs at the input boundary only. The resolver never rejects a
//! stored value: whatever made it into the store is rendered as well as it
//! can be.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::color::{normalize_picker_input, to_stored_form, StoredColor};
use crate::presets::{preset_by_id, PresetChoice};
use crate::record::ThemeRecord;
use crate::tokens::{color_field, size_token};

/* --------------------------------------------------------------------------
   Messages
   -------------------------------------------------------------------------- */

pub const HEX_COLOR_MESSAGE: &str = "Please enter a valid hex color code (e.g. #FF00DD)";

pub const SIZE_MESSAGE: &str = "Please enter a valid size (e.g. 0.625rem, 10px, 50%)";

static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$").expect("valid regex"));

static SIZE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d*\.?\d+(px|rem|em|vh|vw|%)?$").expect("valid regex"));

/* --------------------------------------------------------------------------
   Single-field validators
   -------------------------------------------------------------------------- */

/// Validate a color field value (legacy hex or structured JSON).
///
/// Structured values are checked on their embedded `hex`; anything else is
/// checked as a raw hex code. Absent or empty values are valid.
pub fn validate_hex_color(value: Option<&str>) -> Result<(), String> {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return Ok(());
    };

    let hex = match StoredColor::from_stored(value) {
        StoredColor::Structured(formats) => formats.hex,
        StoredColor::Legacy(raw) => raw,
    };

    if HEX_RE.is_match(&hex) {
        Ok(())
    } else {
        Err(HEX_COLOR_MESSAGE.to_string())
    }
}

/// Validate a size value: a number with an optional `px`, `rem`, `em`, `vh`,
/// `vw` or `%` unit. Absent or empty values are valid.
pub fn validate_size(value: Option<&str>) -> Result<(), String> {
    match value.filter(|v| !v.is_empty()) {
        Some(v) if !SIZE_RE.is_match(v) => Err(SIZE_MESSAGE.to_string()),
        _ => Ok(()),
    }
}

/* --------------------------------------------------------------------------
   Whole-record validation
   -------------------------------------------------------------------------- */

/// A validation failure on one field, addressed by its record path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Dotted path, e.g. `colors.lightPrimary`.
    pub field: String,
    pub message: String,
}

/// Every field that failed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct FieldErrors {
    pub errors: Vec<FieldError>,
}

impl FieldErrors {
    fn push(&mut self, field: String, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// Message reported for `field`, if any.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

/// Validate a Theme Record before it is written.
///
/// Reports every failing field at once: an unknown preset, unknown color
/// or size fields, malformed colors and malformed sizes.
pub fn validate_theme_record(record: &ThemeRecord) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    if let PresetChoice::Preset(id) = record.preset_choice() {
        if preset_by_id(&id).is_none() {
            errors.push(
                "settings.usePreset".to_string(),
                format!("Unknown preset '{id}'"),
            );
        }
    }

    for (field, value) in &record.colors {
        let path = format!("colors.{field}");
        if color_field(field).is_none() {
            errors.push(path, "Unknown color field");
        } else if let Err(message) = validate_hex_color(value.as_deref()) {
            errors.push(path, message);
        }
    }

    for (key, value) in &record.sizes {
        let path = format!("sizes.{key}");
        if size_token(key).is_none() {
            errors.push(path, "Unknown size field");
        } else if let Err(message) = validate_size(value.as_deref()) {
            errors.push(path, message);
        }
    }

    if errors.errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Prepare an editor submission for storage.
///
/// Color inputs are normalized the way the picker widget does it (blank
/// becomes unset, a bare hex code gets its `#`), the record is validated,
/// and legacy hex values are upgraded to the structured stored form.
pub fn prepare_theme_record(mut record: ThemeRecord) -> Result<ThemeRecord, FieldErrors> {
    for value in record.colors.values_mut() {
        *value = value.as_deref().and_then(normalize_picker_input);
    }

    validate_theme_record(&record)?;

    for value in record.colors.values_mut() {
        if let Some(raw) = value.as_deref() {
            if let StoredColor::Legacy(_) = StoredColor::from_stored(raw) {
                // Validated as hex above, so conversion only fails on
                // serialization.
                if let Ok(stored) = to_stored_form(raw) {
                    *value = Some(stored);
                }
            }
        }
    }
    Ok(record)
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */
