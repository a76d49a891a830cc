//! Handlers for the theme: the page-shell stylesheet and the admin API.

use axum::extract::{Query, State};
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::response::IntoResponse;
use axum::Json;
use prism_core::color::{convert, ColorError, ColorFormat, ColorFormats};
use prism_core::config::DARK_MODE_ENABLED;
use prism_core::presets::{presets, PresetSummary};
use prism_core::record::ThemeRecord;
use prism_core::tokens::{field_schema, FieldSchema};
use prism_core::validation::prepare_theme_record;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

const TEXT_CSS: &str = "text/css; charset=utf-8";

/// Query parameters of the CSS endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct CssQuery {
    /// `hex`, `hsl`, `oklch` or `rgb`. Defaults to the configured format.
    pub format: Option<String>,
}

impl CssQuery {
    fn color_format(&self, fallback: ColorFormat) -> AppResult<ColorFormat> {
        match self.format.as_deref() {
            None | Some("") => Ok(fallback),
            Some(raw) => raw
                .parse()
                .map_err(|e: ColorError| AppError::BadRequest(e.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Page-shell stylesheet
// ---------------------------------------------------------------------------

/// GET /theme.css
///
/// The generated custom-property stylesheet, served through the cache.
/// An empty body means "no theme": the shell falls back to its defaults.
pub async fn get_theme_css(
    State(state): State<AppState>,
    Query(query): Query<CssQuery>,
) -> AppResult<impl IntoResponse> {
    let format = query.color_format(state.config.theme_color_format)?;
    let css = state.theme_css.get_theme_css(format).await;

    Ok((
        [(CONTENT_TYPE, TEXT_CSS), (CACHE_CONTROL, "no-cache")],
        css.to_string(),
    ))
}

// ---------------------------------------------------------------------------
// Admin endpoints
// ---------------------------------------------------------------------------

/// GET /api/v1/theme
///
/// The stored Theme Record, or a disabled empty record when none exists.
pub async fn get_theme(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let record = state.theme.read_or_default().await?;

    Ok(Json(DataResponse { data: record }))
}

/// PUT /api/v1/theme
///
/// Validate and store the Theme Record. The CSS cache is invalidated before
/// the response is sent.
pub async fn update_theme(
    State(state): State<AppState>,
    Json(input): Json<ThemeRecord>,
) -> AppResult<impl IntoResponse> {
    let record = prepare_theme_record(input)?;
    let stored = state.theme.update(record).await?;

    tracing::info!(
        enabled = stored.settings.enabled,
        colors = stored.colors.len(),
        sizes = stored.sizes.len(),
        "Theme updated via admin API",
    );

    Ok(Json(DataResponse { data: stored }))
}

/// GET /api/v1/theme/presets
pub async fn list_presets() -> Json<DataResponse<Vec<PresetSummary>>> {
    let data = presets().iter().map(|p| p.summary()).collect();
    Json(DataResponse { data })
}

/// GET /api/v1/theme/fields
///
/// The admin form description: light colors, dark colors, sizes.
pub async fn list_fields() -> Json<DataResponse<Vec<FieldSchema>>> {
    Json(DataResponse {
        data: field_schema(DARK_MODE_ENABLED),
    })
}

/// Body of the color conversion endpoint.
#[derive(Debug, Deserialize)]
pub struct ConvertColorRequest {
    pub input: String,
}

/// POST /api/v1/theme/colors/convert
///
/// Convert a picker input into every representation.
pub async fn convert_color(
    Json(body): Json<ConvertColorRequest>,
) -> AppResult<Json<DataResponse<ColorFormats>>> {
    let formats = convert(&body.input).map_err(|e| AppError::BadRequest(e.to_string()))?;
    Ok(Json(DataResponse { data: formats }))
}

/// GET /api/v1/theme/preview
///
/// CSS computed straight from the store, bypassing the cache.
pub async fn preview_theme_css(
    State(state): State<AppState>,
    Query(query): Query<CssQuery>,
) -> AppResult<impl IntoResponse> {
    let format = query.color_format(state.config.theme_color_format)?;
    let css = state.theme_css.render_uncached(format).await?;

    Ok(([(CONTENT_TYPE, TEXT_CSS), (CACHE_CONTROL, "no-store")], css))
}
