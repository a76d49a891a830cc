//! End-to-end: store → ThemeGlobal → Cache Gate → CSS.

use std::sync::Arc;

use prism_core::color::to_stored_form;
use prism_core::css::generate_theme_css;
use prism_core::record::ThemeRecord;
use prism_core::{ColorFormat, MemoryThemeStore, ThemeCssCache, ThemeGlobal};

struct Harness {
    store: Arc<MemoryThemeStore>,
    css: Arc<ThemeCssCache>,
    global: ThemeGlobal,
}

fn harness(initial: Option<ThemeRecord>) -> Harness {
    let store = Arc::new(match initial {
        Some(record) => MemoryThemeStore::with_record(record),
        None => MemoryThemeStore::new(),
    });
    let css = Arc::new(ThemeCssCache::new(store.clone()));
    let global = ThemeGlobal::new(store.clone()).on_change(css.clone());
    Harness { store, css, global }
}

#[tokio::test]
async fn custom_record_renders_root_and_dark_blocks() {
    let primary = r##"{"hex":"#FFD100","hsl":"hsl(49.18,100%,50%)","rgb":"rgb(255,209,0)","reference":"hex"}"##;
    let record = ThemeRecord::enabled()
        .with_preset("custom")
        .with_color("lightPrimary", primary)
        .with_size("radius", "0.5rem");
    let h = harness(Some(record));

    let css = h.css.get_theme_css(ColorFormat::Hex).await;
    assert!(css.contains(":root { --primary: #FFD100; --radius: 0.5rem; }"));
    assert!(css.contains(".dark { --primary: #FFD100; --radius: 0.5rem; }"));

    let hsl = h.css.get_theme_css(ColorFormat::Hsl).await;
    assert!(hsl.contains("--primary: hsl(49.18,100%,50%);"));
}

#[tokio::test]
async fn preset_record_ignores_stray_colors() {
    let with_stray = ThemeRecord::enabled()
        .with_preset("bardahl")
        .with_color("lightPrimary", "#000000");
    let clean = ThemeRecord::enabled().with_preset("bardahl");

    let h = harness(Some(with_stray));
    let css = h.css.get_theme_css(ColorFormat::Oklch).await;
    assert_eq!(&*css, generate_theme_css(Some(&clean), ColorFormat::Oklch));
    assert!(css.contains("--border: rgba(255, 255, 255, 0.1);"));
}

#[tokio::test]
async fn unknown_preset_renders_nothing() {
    let h = harness(Some(ThemeRecord::enabled().with_preset("unknownId")));
    assert_eq!(&*h.css.get_theme_css(ColorFormat::Hex).await, "");
}

#[tokio::test]
async fn update_invalidates_cached_css() {
    let h = harness(None);

    assert_eq!(&*h.css.get_theme_css(ColorFormat::Hex).await, "");
    assert_eq!(&*h.css.get_theme_css(ColorFormat::Hex).await, "");
    assert_eq!(h.store.reads(), 1);

    let record = ThemeRecord::enabled().with_color("lightPrimary", to_stored_form("#0099FF").unwrap());
    h.global.update(record).await.unwrap();

    let css = h.css.get_theme_css(ColorFormat::Hex).await;
    assert!(css.starts_with(":root { --primary: #0099ff; }"));
    assert_eq!(h.store.reads(), 2);

    // Served from cache again until the next write.
    h.css.get_theme_css(ColorFormat::Hex).await;
    assert_eq!(h.store.reads(), 2);
}

#[tokio::test]
async fn disabling_the_theme_clears_output() {
    let h = harness(Some(ThemeRecord::enabled().with_preset("computerland")));
    assert!(!h.css.get_theme_css(ColorFormat::Rgb).await.is_empty());

    let mut record = h.global.read_or_default().await.unwrap();
    record.settings.enabled = false;
    h.global.update(record).await.unwrap();

    assert_eq!(&*h.css.get_theme_css(ColorFormat::Rgb).await, "");
}
