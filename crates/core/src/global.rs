//! The `theme` named singleton: one Theme Record per deployment, read and
//! written through an injected [`ThemeStore`], with after-change hooks.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::THEME_GLOBAL_SLUG;
use crate::error::CoreError;
use crate::record::ThemeRecord;
use crate::store::{StoreError, ThemeStore};

/// Runs after every successful write of the Theme Record.
#[async_trait]
pub trait ThemeChangeListener: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    async fn theme_changed(&self, record: &ThemeRecord) -> Result<(), CoreError>;
}

/// Owner of the Theme Record.
pub struct ThemeGlobal {
    store: Arc<dyn ThemeStore>,
    listeners: Vec<Arc<dyn ThemeChangeListener>>,
}

impl ThemeGlobal {
    pub fn new(store: Arc<dyn ThemeStore>) -> Self {
        Self {
            store,
            listeners: Vec::new(),
        }
    }

    /// Register a listener. Listeners run in registration order.
    pub fn on_change(mut self, listener: Arc<dyn ThemeChangeListener>) -> Self {
        self.listeners.push(listener);
        self
    }

    pub fn slug(&self) -> &'static str {
        THEME_GLOBAL_SLUG
    }

    /// The stored record, if any.
    pub async fn read(&self) -> Result<Option<ThemeRecord>, StoreError> {
        self.store.read_theme_record().await
    }

    /// The stored record, or a disabled empty one when nothing is stored.
    pub async fn read_or_default(&self) -> Result<ThemeRecord, StoreError> {
        Ok(self.read().await?.unwrap_or_default())
    }

    /// Write `record`, stamping `updated_at`, then notify every listener.
    ///
    /// Listeners are awaited before returning. A listener failure is logged
    /// and does not fail the write.
    pub async fn update(&self, mut record: ThemeRecord) -> Result<ThemeRecord, StoreError> {
        record.updated_at = Some(chrono::Utc::now());
        let stored = self.store.write_theme_record(record).await?;

        tracing::info!(
            slug = THEME_GLOBAL_SLUG,
            enabled = stored.settings.enabled,
            preset = stored.settings.use_preset.as_deref().unwrap_or("custom"),
            "Theme record updated",
        );

        for listener in &self.listeners {
            if let Err(e) = listener.theme_changed(&stored).await {
                tracing::error!(listener = listener.name(), error = %e, "Theme change listener failed");
            }
        }
        Ok(stored)
    }
}
