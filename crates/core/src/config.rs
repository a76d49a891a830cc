//! Compile-time theme configuration.
//!
//! These values cannot change without a redeploy. The Token Catalog and the
//! Preset Registry are compiled in as well (see [`crate::tokens`] and
//! [`crate::presets`]).

/// Emit a second, dark-mode scoped block of custom properties.
pub const DARK_MODE_ENABLED: bool = true;

/// How long generated CSS stays cached without an invalidation (7 days).
pub const CACHE_TIME_SECONDS: u64 = 60 * 60 * 24 * 7;

/// Tag shared by every cached theme entry; invalidation targets this tag.
pub const THEME_CACHE_TAG: &str = "theme-data";

/// Base cache key of the (single) theme.
pub const THEME_CACHE_KEY: &str = "theme-global";

/// Slug of the named singleton aggregate holding the Theme Record.
pub const THEME_GLOBAL_SLUG: &str = "theme";

/// Selector scoping the light (default) declarations.
pub const ROOT_SELECTOR: &str = ":root";

/// Selector scoping the dark-mode declarations.
pub const DARK_SELECTOR: &str = ".dark";
