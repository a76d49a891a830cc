//! Route definitions for the theme.
//!
//! Two routers are provided:
//! - `stylesheet_router()` for the page-shell CSS mounted at the root
//! - `router()` for the admin API mounted at `/api/v1/theme`

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::theme;
use crate::state::AppState;

/// Page-shell stylesheet.
///
/// ```text
/// GET /theme.css?format=   -> get_theme_css
/// ```
pub fn stylesheet_router() -> Router<AppState> {
    Router::new().route("/theme.css", get(theme::get_theme_css))
}

/// Admin theme routes mounted at `/api/v1/theme`.
///
/// ```text
/// GET  /                  -> get_theme
/// PUT  /                  -> update_theme
/// GET  /presets           -> list_presets
/// GET  /fields            -> list_fields
/// POST /colors/convert    -> convert_color
/// GET  /preview?format=   -> preview_theme_css
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(theme::get_theme).put(theme::update_theme))
        .route("/presets", get(theme::list_presets))
        .route("/fields", get(theme::list_fields))
        .route("/colors/convert", post(theme::convert_color))
        .route("/preview", get(theme::preview_theme_css))
}
