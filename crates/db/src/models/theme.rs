//! Theme global entity model and DTO.

use prism_core::record::{ThemeRecord, ThemeSettings};
use prism_core::store::StoreError;
use prism_core::types::Timestamp;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `theme_globals` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ThemeGlobalRow {
    pub slug: String,
    pub settings: serde_json::Value,
    pub colors: serde_json::Value,
    pub sizes: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ThemeGlobalRow {
    /// Decode the JSONB groups into a [`ThemeRecord`].
    ///
    /// SQL `null` in a group reads as an empty group.
    pub fn into_record(self) -> Result<ThemeRecord, StoreError> {
        let settings: ThemeSettings = decode(self.settings, "settings")?;
        Ok(ThemeRecord {
            settings,
            colors: decode(self.colors, "colors")?,
            sizes: decode(self.sizes, "sizes")?,
            updated_at: Some(self.updated_at),
        })
    }
}

fn decode<T>(value: serde_json::Value, group: &str) -> Result<T, StoreError>
where
    T: serde::de::DeserializeOwned + Default,
{
    if value.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(value).map_err(|e| StoreError::Corrupt(format!("{group}: {e}")))
}

/// DTO for writing the theme global.
#[derive(Debug, Clone)]
pub struct SaveThemeGlobal {
    pub settings: serde_json::Value,
    pub colors: serde_json::Value,
    pub sizes: serde_json::Value,
}

impl SaveThemeGlobal {
    pub fn from_record(record: &ThemeRecord) -> Result<Self, StoreError> {
        let encode = |value: serde_json::Result<serde_json::Value>| {
            value.map_err(|e| StoreError::Corrupt(e.to_string()))
        };
        Ok(Self {
            settings: encode(serde_json::to_value(&record.settings))?,
            colors: encode(serde_json::to_value(&record.colors))?,
            sizes: encode(serde_json::to_value(&record.sizes))?,
        })
    }
}
