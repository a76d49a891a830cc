//! Repository for the `theme_globals` table.

use sqlx::PgPool;

use crate::models::theme::{SaveThemeGlobal, ThemeGlobalRow};

/// Column list for `theme_globals` queries.
const COLUMNS: &str = "slug, settings, colors, sizes, created_at, updated_at";

/// Reads and upserts named theme globals.
pub struct ThemeRepo;

impl ThemeRepo {
    /// Find a global by slug. Returns `None` if it was never written.
    pub async fn find_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<ThemeGlobalRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM theme_globals WHERE slug = $1");
        sqlx::query_as::<_, ThemeGlobalRow>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Upsert a global. Creates if absent, replaces every group if it exists.
    ///
    /// Uses `ON CONFLICT (slug) DO UPDATE` to guarantee one row per slug.
    pub async fn upsert(
        pool: &PgPool,
        slug: &str,
        input: &SaveThemeGlobal,
    ) -> Result<ThemeGlobalRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO theme_globals (slug, settings, colors, sizes) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (slug) DO UPDATE \
             SET settings = EXCLUDED.settings, \
                 colors = EXCLUDED.colors, \
                 sizes = EXCLUDED.sizes, \
                 updated_at = now() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ThemeGlobalRow>(&query)
            .bind(slug)
            .bind(&input.settings)
            .bind(&input.colors)
            .bind(&input.sizes)
            .fetch_one(pool)
            .await
    }
}
