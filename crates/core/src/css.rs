//! CSS Emitter: serializes a [`ResolvedTheme`] into custom-property blocks.

use std::fmt::Write;

use crate::color::ColorFormat;
use crate::config::{DARK_MODE_ENABLED, DARK_SELECTOR, ROOT_SELECTOR};
use crate::record::ThemeRecord;
use crate::resolver::{resolve, ResolvedTheme, TokenMap};
use crate::tokens::{COLOR_TOKENS, SIZE_TOKENS};

/// Writes `selector { --var: value; ... }` blocks in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CssEmitter {
    pub dark_mode: bool,
    pub root_selector: &'static str,
    pub dark_selector: &'static str,
}

impl Default for CssEmitter {
    fn default() -> Self {
        Self {
            dark_mode: DARK_MODE_ENABLED,
            root_selector: ROOT_SELECTOR,
            dark_selector: DARK_SELECTOR,
        }
    }
}

impl CssEmitter {
    /// Serialize `resolved`. The empty theme yields `""`.
    ///
    /// The root block carries light colors then sizes. The dark block is
    /// only written when dark mode is on and it has a declaration: dark
    /// colors, or sizes, which it repeats.
    pub fn emit(&self, resolved: &ResolvedTheme) -> String {
        if resolved.is_empty() {
            return String::new();
        }

        let mut css = String::new();
        write_block(&mut css, self.root_selector, &resolved.light, &resolved.sizes);

        if self.dark_mode && !(resolved.dark.is_empty() && resolved.sizes.is_empty()) {
            css.push('\n');
            write_block(&mut css, self.dark_selector, &resolved.dark, &resolved.sizes);
        }
        css
    }
}

fn write_block(css: &mut String, selector: &str, colors: &TokenMap, sizes: &TokenMap) {
    css.push_str(selector);
    css.push_str(" {");

    let colors = COLOR_TOKENS
        .iter()
        .filter_map(|t| colors.get(t.key).map(|v| (t.css_var, v)));
    let sizes = SIZE_TOKENS
        .iter()
        .filter_map(|t| sizes.get(t.key).map(|v| (t.css_var, v)));

    for (var, value) in colors.chain(sizes) {
        // Writing into a String cannot fail.
        let _ = write!(css, " {var}: {value};");
    }
    css.push_str(" }");
}

/// Emit with the default emitter.
pub fn emit(resolved: &ResolvedTheme) -> String {
    CssEmitter::default().emit(resolved)
}

/// Resolve `record` in `format` and emit it: the uncached pipeline.
pub fn generate_theme_css(record: Option<&ThemeRecord>, format: ColorFormat) -> String {
    emit(&resolve(record, format))
}
