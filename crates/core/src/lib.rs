//! Prism theme domain.
//!
//! Turns one persisted Theme Record into the CSS custom-property text the
//! page shell injects:
//!
//! - [`color`]: color conversion and stored-value decoding.
//! - [`tokens`] / [`presets`]: the compiled-in token catalog and preset bundles.
//! - [`record`] / [`validation`]: the Theme Record and its editor validation.
//! - [`resolver`] / [`css`]: resolution into token maps and CSS emission.
//! - [`store`] / [`global`]: the persistence seam and the `theme` singleton.
//! - [`cache`]: the tagged, time-bounded cache in front of the pipeline.

pub mod cache;
pub mod color;
pub mod config;
pub mod css;
pub mod error;
pub mod global;
pub mod presets;
pub mod record;
pub mod resolver;
pub mod store;
pub mod tokens;
pub mod types;
pub mod validation;

pub use cache::ThemeCssCache;
pub use color::{ColorFormat, ColorFormats};
pub use global::{ThemeChangeListener, ThemeGlobal};
pub use record::ThemeRecord;
pub use resolver::ResolvedTheme;
pub use store::{MemoryThemeStore, StoreError, ThemeStore};
