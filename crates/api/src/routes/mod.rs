pub mod health;
pub mod theme;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /theme                          get, update the Theme Record
/// /theme/presets                  built-in presets (GET)
/// /theme/fields                   admin form schema (GET)
/// /theme/colors/convert           picker color conversion (POST)
/// /theme/preview                  uncached CSS (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/theme", theme::router())
}
