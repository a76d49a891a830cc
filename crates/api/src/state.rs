use std::sync::Arc;

use prism_core::store::ThemeStore;
use prism_core::{ThemeCssCache, ThemeGlobal};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The `theme` singleton; writes go through here.
    pub theme: Arc<ThemeGlobal>,
    /// Cached page-shell CSS, invalidated by every theme write.
    pub theme_css: Arc<ThemeCssCache>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Wire the theme singleton and the CSS cache over `store`.
    pub fn new(store: Arc<dyn ThemeStore>, config: ServerConfig) -> Self {
        let theme_css = Arc::new(ThemeCssCache::new(Arc::clone(&store)));
        let theme = ThemeGlobal::new(store).on_change(theme_css.clone());

        Self {
            theme: Arc::new(theme),
            theme_css,
            config: Arc::new(config),
        }
    }
}
