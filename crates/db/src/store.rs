//! [`ThemeStore`] backed by the `theme_globals` table.

use async_trait::async_trait;
use prism_core::config::THEME_GLOBAL_SLUG;
use prism_core::record::ThemeRecord;
use prism_core::store::{StoreError, ThemeStore};

use crate::models::theme::SaveThemeGlobal;
use crate::repositories::ThemeRepo;
use crate::DbPool;

/// Persists the Theme Record as the `theme` row of `theme_globals`.
#[derive(Debug, Clone)]
pub struct PgThemeStore {
    pool: DbPool,
}

impl PgThemeStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

fn unavailable(e: sqlx::Error) -> StoreError {
    tracing::error!(error = %e, "Theme store query failed");
    StoreError::Unavailable(e.to_string())
}

#[async_trait]
impl ThemeStore for PgThemeStore {
    async fn read_theme_record(&self) -> Result<Option<ThemeRecord>, StoreError> {
        ThemeRepo::find_by_slug(&self.pool, THEME_GLOBAL_SLUG)
            .await
            .map_err(unavailable)?
            .map(|row| row.into_record())
            .transpose()
    }

    async fn write_theme_record(&self, record: ThemeRecord) -> Result<ThemeRecord, StoreError> {
        let input = SaveThemeGlobal::from_record(&record)?;
        let row = ThemeRepo::upsert(&self.pool, THEME_GLOBAL_SLUG, &input)
            .await
            .map_err(unavailable)?;
        row.into_record()
    }
}
