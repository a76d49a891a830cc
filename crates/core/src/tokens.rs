//! Token Catalog: the static registry of every themeable token.
//!
//! Each color token has a stable key, a CSS custom-property name, the Theme
//! Record field name for both modes, and a label in every admin language.
//! The key ↔ variable mapping is published: renaming either side orphans
//! stored records.
//!
//! Declaration order is canonical. The CSS emitter walks these tables in
//! order, so output is stable regardless of how a record's fields were
//! ordered.

use serde::Serialize;

/* --------------------------------------------------------------------------
   Types
   -------------------------------------------------------------------------- */

/// Light or dark variant of a color token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Light, Mode::Dark];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }
}

/// Whether a token carries a color or a size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Color,
    Size,
}

/// Display label in every admin language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Label {
    pub en: &'static str,
    pub fr: &'static str,
    pub nl: &'static str,
}

/// A themeable color token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorToken {
    pub key: &'static str,
    pub css_var: &'static str,
    pub light_field: &'static str,
    pub dark_field: &'static str,
    pub label: Label,
}

impl ColorToken {
    /// Theme Record field holding this token's value in `mode`.
    pub fn field_name(&self, mode: Mode) -> &'static str {
        match mode {
            Mode::Light => self.light_field,
            Mode::Dark => self.dark_field,
        }
    }
}

/// A themeable size token. Sizes are mode-independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizeToken {
    pub key: &'static str,
    pub css_var: &'static str,
    pub label: Label,
}

const fn color(
    key: &'static str,
    css_var: &'static str,
    light_field: &'static str,
    dark_field: &'static str,
    label: [&'static str; 3],
) -> ColorToken {
    ColorToken {
        key,
        css_var,
        light_field,
        dark_field,
        label: Label {
            en: label[0],
            fr: label[1],
            nl: label[2],
        },
    }
}

const fn size(key: &'static str, css_var: &'static str, label: [&'static str; 3]) -> SizeToken {
    SizeToken {
        key,
        css_var,
        label: Label {
            en: label[0],
            fr: label[1],
            nl: label[2],
        },
    }
}

/* --------------------------------------------------------------------------
   Catalog
   -------------------------------------------------------------------------- */

#[rustfmt::skip]
pub static COLOR_TOKENS: &[ColorToken] = &[
    color("primary", "--primary", "lightPrimary", "darkPrimary",
        ["Primary Color", "Couleur Primaire", "Primaire Kleur"]),
    color("primaryForeground", "--primary-foreground", "lightPrimaryForeground", "darkPrimaryForeground",
        ["Primary Foreground", "Premier Plan Primaire", "Primaire Voorgrond"]),
    color("secondary", "--secondary", "lightSecondary", "darkSecondary",
        ["Secondary Color", "Couleur Secondaire", "Secundaire Kleur"]),
    color("secondaryForeground", "--secondary-foreground", "lightSecondaryForeground", "darkSecondaryForeground",
        ["Secondary Foreground", "Premier Plan Secondaire", "Secundaire Voorgrond"]),
    color("muted", "--muted", "lightMuted", "darkMuted",
        ["Muted Color", "Couleur Atténuée", "Gedempte Kleur"]),
    color("mutedForeground", "--muted-foreground", "lightMutedForeground", "darkMutedForeground",
        ["Muted Foreground", "Premier Plan Atténué", "Gedempte Voorgrond"]),
    color("accent", "--accent", "lightAccent", "darkAccent",
        ["Accent Color", "Couleur d'Accent", "Accent Kleur"]),
    color("accentForeground", "--accent-foreground", "lightAccentForeground", "darkAccentForeground",
        ["Accent Foreground", "Premier Plan d'Accent", "Accent Voorgrond"]),
    color("destructive", "--destructive", "lightDestructive", "darkDestructive",
        ["Destructive Color", "Couleur Destructive", "Destructieve Kleur"]),
    color("destructiveForeground", "--destructive-foreground", "lightDestructiveForeground", "darkDestructiveForeground",
        ["Destructive Foreground", "Premier Plan Destructif", "Destructieve Voorgrond"]),
    color("border", "--border", "lightBorder", "darkBorder",
        ["Border Color", "Couleur de Bordure", "Rand Kleur"]),
    color("input", "--input", "lightInput", "darkInput",
        ["Input Color", "Couleur de Saisie", "Invoer Kleur"]),
    color("ring", "--ring", "lightRing", "darkRing",
        ["Ring Color", "Couleur d'Anneau", "Ring Kleur"]),
    color("background", "--background", "lightBackground", "darkBackground",
        ["Background Color", "Couleur de Fond", "Achtergrond Kleur"]),
    color("foreground", "--foreground", "lightForeground", "darkForeground",
        ["Foreground Color", "Couleur de Premier Plan", "Voorgrond Kleur"]),
    color("card", "--card", "lightCard", "darkCard",
        ["Card Color", "Couleur de Carte", "Kaart Kleur"]),
    color("cardForeground", "--card-foreground", "lightCardForeground", "darkCardForeground",
        ["Card Foreground", "Premier Plan de Carte", "Kaart Voorgrond"]),
    color("popover", "--popover", "lightPopover", "darkPopover",
        ["Popover Color", "Couleur de Popover", "Popover Kleur"]),
    color("popoverForeground", "--popover-foreground", "lightPopoverForeground", "darkPopoverForeground",
        ["Popover Foreground", "Premier Plan de Popover", "Popover Voorgrond"]),
    color("chart1", "--chart-1", "lightChart1", "darkChart1",
        ["Chart Color 1", "Couleur de Graphique 1", "Grafiek Kleur 1"]),
    color("chart2", "--chart-2", "lightChart2", "darkChart2",
        ["Chart Color 2", "Couleur de Graphique 2", "Grafiek Kleur 2"]),
    color("chart3", "--chart-3", "lightChart3", "darkChart3",
        ["Chart Color 3", "Couleur de Graphique 3", "Grafiek Kleur 3"]),
    color("chart4", "--chart-4", "lightChart4", "darkChart4",
        ["Chart Color 4", "Couleur de Graphique 4", "Grafiek Kleur 4"]),
    color("chart5", "--chart-5", "lightChart5", "darkChart5",
        ["Chart Color 5", "Couleur de Graphique 5", "Grafiek Kleur 5"]),
    color("sidebar", "--sidebar", "lightSidebar", "darkSidebar",
        ["Sidebar Color", "Couleur de la Barre Latérale", "Zijbalk Kleur"]),
    color("sidebarForeground", "--sidebar-foreground", "lightSidebarForeground", "darkSidebarForeground",
        ["Sidebar Foreground", "Premier Plan de la Barre Latérale", "Zijbalk Voorgrond"]),
    color("sidebarPrimary", "--sidebar-primary", "lightSidebarPrimary", "darkSidebarPrimary",
        ["Sidebar Primary", "Primaire de la Barre Latérale", "Zijbalk Primair"]),
    color("sidebarPrimaryForeground", "--sidebar-primary-foreground", "lightSidebarPrimaryForeground", "darkSidebarPrimaryForeground",
        ["Sidebar Primary Foreground", "Premier Plan Primaire de la Barre Latérale", "Zijbalk Primaire Voorgrond"]),
    color("sidebarAccent", "--sidebar-accent", "lightSidebarAccent", "darkSidebarAccent",
        ["Sidebar Accent", "Accent de la Barre Latérale", "Zijbalk Accent"]),
    color("sidebarAccentForeground", "--sidebar-accent-foreground", "lightSidebarAccentForeground", "darkSidebarAccentForeground",
        ["Sidebar Accent Foreground", "Premier Plan d'Accent de la Barre Latérale", "Zijbalk Accent Voorgrond"]),
    color("sidebarBorder", "--sidebar-border", "lightSidebarBorder", "darkSidebarBorder",
        ["Sidebar Border", "Bordure de la Barre Latérale", "Zijbalk Rand"]),
];

#[rustfmt::skip]
pub static SIZE_TOKENS: &[SizeToken] = &[
    size("radius", "--radius", ["Border Radius", "Rayon de Bordure", "Rand Radius"]),
    size("radiusLg", "--radius-lg", ["Large Border Radius", "Grand Rayon de Bordure", "Grote Rand Radius"]),
    size("radiusSm", "--radius-sm", ["Small Border Radius", "Petit Rayon de Bordure", "Kleine Rand Radius"]),
];

/* --------------------------------------------------------------------------
   Lookups
   -------------------------------------------------------------------------- */

/// Find a color token by key.
pub fn color_token(key: &str) -> Option<&'static ColorToken> {
    COLOR_TOKENS.iter().find(|t| t.key == key)
}

/// Find a size token by key.
pub fn size_token(key: &str) -> Option<&'static SizeToken> {
    SIZE_TOKENS.iter().find(|t| t.key == key)
}

/// Reverse lookup of a Theme Record color field (`lightPrimary`, ...).
pub fn color_field(field: &str) -> Option<(&'static ColorToken, Mode)> {
    COLOR_TOKENS.iter().find_map(|t| {
        Mode::ALL
            .into_iter()
            .find(|m| t.field_name(*m) == field)
            .map(|m| (t, m))
    })
}

/* --------------------------------------------------------------------------
   Admin field schema
   -------------------------------------------------------------------------- */

/// One editable field of the theme form, as the admin UI renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSchema {
    /// Record field name (`lightPrimary`, `radius`, ...).
    pub name: &'static str,
    /// Token key the field feeds.
    pub token: &'static str,
    pub css_var: &'static str,
    pub kind: TokenKind,
    /// `None` for sizes.
    pub mode: Option<Mode>,
    pub label: Label,
}

/// Every editable field, in form order: light colors, dark colors (when
/// `dark_mode` is on), then sizes.
pub fn field_schema(dark_mode: bool) -> Vec<FieldSchema> {
    let modes: &[Mode] = if dark_mode {
        &Mode::ALL
    } else {
        &[Mode::Light]
    };

    let colors = modes.iter().flat_map(|mode| {
        COLOR_TOKENS.iter().map(move |t| FieldSchema {
            name: t.field_name(*mode),
            token: t.key,
            css_var: t.css_var,
            kind: TokenKind::Color,
            mode: Some(*mode),
            label: t.label,
        })
    });

    let sizes = SIZE_TOKENS.iter().map(|t| FieldSchema {
        name: t.key,
        token: t.key,
        css_var: t.css_var,
        kind: TokenKind::Size,
        mode: None,
        label: t.label,
    });

    colors.chain(sizes).collect()
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn capitalize(key: &str) -> String {
        let mut chars = key.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    #[test]
    fn field_names_follow_mode_prefix_convention() {
        for token in COLOR_TOKENS {
            assert_eq!(token.light_field, format!("light{}", capitalize(token.key)));
            assert_eq!(token.dark_field, format!("dark{}", capitalize(token.key)));
        }
    }

    #[test]
    fn keys_and_variables_are_unique() {
        let keys: HashSet<_> = COLOR_TOKENS
            .iter()
            .map(|t| t.key)
            .chain(SIZE_TOKENS.iter().map(|t| t.key))
            .collect();
        let vars: HashSet<_> = COLOR_TOKENS
            .iter()
            .map(|t| t.css_var)
            .chain(SIZE_TOKENS.iter().map(|t| t.css_var))
            .collect();
        let total = COLOR_TOKENS.len() + SIZE_TOKENS.len();
        assert_eq!(keys.len(), total);
        assert_eq!(vars.len(), total);
    }

    #[test]
    fn every_variable_is_a_custom_property() {
        for var in COLOR_TOKENS
            .iter()
            .map(|t| t.css_var)
            .chain(SIZE_TOKENS.iter().map(|t| t.css_var))
        {
            assert!(var.starts_with("--"), "{var}");
        }
    }

    #[test]
    fn lookups_by_key_and_field() {
        assert_eq!(color_token("sidebarBorder").unwrap().css_var, "--sidebar-border");
        assert_eq!(size_token("radius").unwrap().css_var, "--radius");
        assert!(color_token("radius").is_none());

        let (token, mode) = color_field("darkChart3").unwrap();
        assert_eq!(token.key, "chart3");
        assert_eq!(mode, Mode::Dark);
        assert!(color_field("primary").is_none());
    }

    #[test]
    fn field_schema_covers_both_modes_then_sizes() {
        let schema = field_schema(true);
        assert_eq!(schema.len(), COLOR_TOKENS.len() * 2 + SIZE_TOKENS.len());
        assert_eq!(schema[0].name, "lightPrimary");
        assert_eq!(schema[COLOR_TOKENS.len()].name, "darkPrimary");
        assert_eq!(schema.last().unwrap().kind, TokenKind::Size);
    }

    #[test]
    fn field_schema_without_dark_mode_has_light_only() {
        let schema = field_schema(false);
        assert_eq!(schema.len(), COLOR_TOKENS.len() + SIZE_TOKENS.len());
        assert!(schema.iter().all(|f| f.mode != Some(Mode::Dark)));
    }
}
