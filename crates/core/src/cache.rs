//! Cache Gate: tagged, time-bounded memoization of the generated theme CSS.
//!
//! Entries are keyed per color format (`theme-global:hex`, ...) and all carry
//! the `theme-data` tag, so one tag revalidation drops every format at once.
//! [`ThemeCssCache`] registers as a [`ThemeChangeListener`] to be revalidated
//! on every successful write.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::color::ColorFormat;
use crate::config::{CACHE_TIME_SECONDS, THEME_CACHE_KEY, THEME_CACHE_TAG};
use crate::css::generate_theme_css;
use crate::error::CoreError;
use crate::global::ThemeChangeListener;
use crate::record::ThemeRecord;
use crate::store::{StoreError, ThemeStore};

/* --------------------------------------------------------------------------
   Tagged cache
   -------------------------------------------------------------------------- */

struct Entry {
    value: Arc<str>,
    tags: Vec<String>,
    expires_at: Instant,
}

/// Key/value cache with per-entry expiry and tag-based invalidation.
///
/// Every revalidation bumps a generation counter. A value computed before a
/// revalidation can be offered with [`TagCache::insert_if_current`], which
/// refuses it instead of caching data the revalidation meant to drop.
pub struct TagCache {
    ttl: Duration,
    entries: RwLock<HashMap<String, Entry>>,
    generation: AtomicU64,
}

impl TagCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
            generation: AtomicU64::new(0),
        }
    }

    /// Number of revalidations so far. Read it before computing a value.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// The cached value for `key`, unless absent or expired.
    pub async fn get(&self, key: &str) -> Option<Arc<str>> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|e| e.expires_at > Instant::now())
            .map(|e| Arc::clone(&e.value))
    }

    /// Store `value` under `key` with the given tags, replacing any entry.
    pub async fn insert(&self, key: impl Into<String>, value: Arc<str>, tags: &[&str]) {
        let entry = Entry {
            value,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            expires_at: Instant::now() + self.ttl,
        };
        self.entries.write().await.insert(key.into(), entry);
    }

    /// Like [`TagCache::insert`], unless a revalidation ran since `seen` was
    /// read. Returns whether the value was stored.
    pub async fn insert_if_current(
        &self,
        key: impl Into<String>,
        value: Arc<str>,
        tags: &[&str],
        seen: u64,
    ) -> bool {
        let mut entries = self.entries.write().await;
        // Checked under the write lock, which revalidation also holds.
        if self.generation.load(Ordering::Acquire) != seen {
            return false;
        }
        let entry = Entry {
            value,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            expires_at: Instant::now() + self.ttl,
        };
        entries.insert(key.into(), entry);
        true
    }

    /// Drop every entry carrying `tag`. Returns how many were dropped.
    pub async fn revalidate_tag(&self, tag: &str) -> usize {
        let mut entries = self.entries.write().await;
        self.generation.fetch_add(1, Ordering::AcqRel);
        let before = entries.len();
        entries.retain(|_, e| !e.tags.iter().any(|t| t == tag));
        before - entries.len()
    }

    /// Number of entries held, expired ones included.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/* --------------------------------------------------------------------------
   Theme CSS
   -------------------------------------------------------------------------- */

/// Cache key of the theme CSS in `format`.
pub fn theme_cache_key(format: ColorFormat) -> String {
    format!("{THEME_CACHE_KEY}:{format}")
}

/// Serves the theme CSS, computing it from the store on a miss.
pub struct ThemeCssCache {
    store: Arc<dyn ThemeStore>,
    cache: TagCache,
}

impl ThemeCssCache {
    /// A cache holding entries for [`CACHE_TIME_SECONDS`].
    pub fn new(store: Arc<dyn ThemeStore>) -> Self {
        Self::with_ttl(store, Duration::from_secs(CACHE_TIME_SECONDS))
    }

    pub fn with_ttl(store: Arc<dyn ThemeStore>, ttl: Duration) -> Self {
        Self {
            store,
            cache: TagCache::new(ttl),
        }
    }

    /// The theme CSS in `format`.
    ///
    /// Never fails: when the store cannot be read the result is `""`, which
    /// is not cached so the next request retries.
    pub async fn get_theme_css(&self, format: ColorFormat) -> Arc<str> {
        let key = theme_cache_key(format);
        if let Some(css) = self.cache.get(&key).await {
            tracing::debug!(key = %key, "Theme CSS cache hit");
            return css;
        }

        let seen = self.cache.generation();
        let css: Arc<str> = match self.store.read_theme_record().await {
            Ok(record) => generate_theme_css(record.as_ref(), format).into(),
            Err(e) => {
                tracing::error!(error = %e, "Failed to read theme record, serving empty CSS");
                return Arc::from("");
            }
        };

        let cached = self
            .cache
            .insert_if_current(key.clone(), Arc::clone(&css), &[THEME_CACHE_TAG], seen)
            .await;
        if cached {
            tracing::info!(key = %key, bytes = css.len(), "Theme CSS computed");
        } else {
            tracing::debug!(key = %key, "Theme changed while computing CSS, not caching");
        }
        css
    }

    /// Compute the CSS from the store without touching the cache.
    pub async fn render_uncached(&self, format: ColorFormat) -> Result<String, StoreError> {
        let record = self.store.read_theme_record().await?;
        Ok(generate_theme_css(record.as_ref(), format))
    }

    /// Drop every cached theme entry.
    pub async fn invalidate(&self) -> usize {
        let dropped = self.cache.revalidate_tag(THEME_CACHE_TAG).await;
        tracing::info!(tag = THEME_CACHE_TAG, dropped, "Theme CSS cache invalidated");
        dropped
    }
}

#[async_trait]
impl ThemeChangeListener for ThemeCssCache {
    fn name(&self) -> &'static str {
        "theme_css_cache"
    }

    async fn theme_changed(&self, _record: &ThemeRecord) -> Result<(), CoreError> {
        self.invalidate().await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::Notify;

    use super::*;
    use crate::store::MemoryThemeStore;

    fn themed_store() -> Arc<MemoryThemeStore> {
        Arc::new(MemoryThemeStore::with_record(
            ThemeRecord::enabled().with_color("lightPrimary", "#FFD100"),
        ))
    }

    #[tokio::test]
    async fn tag_cache_revalidates_by_tag() {
        let cache = TagCache::new(Duration::from_secs(60));
        cache.insert("a", Arc::from("1"), &["x"]).await;
        cache.insert("b", Arc::from("2"), &["x", "y"]).await;
        cache.insert("c", Arc::from("3"), &["y"]).await;

        assert_eq!(cache.revalidate_tag("x").await, 2);
        assert!(cache.get("a").await.is_none());
        assert_eq!(cache.get("c").await.as_deref(), Some("3"));
        assert_eq!(cache.revalidate_tag("x").await, 0);
    }

    #[tokio::test]
    async fn tag_cache_refuses_values_older_than_revalidation() {
        let cache = TagCache::new(Duration::from_secs(60));
        let seen = cache.generation();
        cache.revalidate_tag("x").await;

        assert!(!cache.insert_if_current("a", Arc::from("old"), &["x"], seen).await);
        assert!(cache.get("a").await.is_none());

        let seen = cache.generation();
        assert!(cache.insert_if_current("a", Arc::from("new"), &["x"], seen).await);
        assert_eq!(cache.get("a").await.as_deref(), Some("new"));
    }

    #[tokio::test(start_paused = true)]
    async fn tag_cache_entries_expire() {
        let cache = TagCache::new(Duration::from_secs(10));
        cache.insert("a", Arc::from("1"), &[]).await;

        tokio::time::advance(Duration::from_secs(9)).await;
        assert!(cache.get("a").await.is_some());
        tokio::time::advance(Duration::from_secs(2)).await;
        assert!(cache.get("a").await.is_none());
    }

    #[tokio::test]
    async fn second_read_is_served_from_cache() {
        let store = themed_store();
        let cache = ThemeCssCache::new(store.clone());

        let first = cache.get_theme_css(ColorFormat::Hex).await;
        let second = cache.get_theme_css(ColorFormat::Hex).await;
        assert_eq!(first, second);
        assert!(first.starts_with(":root { --primary: #ffd100; }"));
        assert_eq!(store.reads(), 1);
    }

    #[tokio::test]
    async fn formats_are_cached_separately() {
        let store = themed_store();
        let cache = ThemeCssCache::new(store.clone());

        let hex = cache.get_theme_css(ColorFormat::Hex).await;
        let rgb = cache.get_theme_css(ColorFormat::Rgb).await;
        assert_ne!(hex, rgb);
        assert!(rgb.contains("--primary: rgb(255,209,0);"));
        assert_eq!(store.reads(), 2);
    }

    #[tokio::test]
    async fn invalidation_drops_every_format() {
        let store = themed_store();
        let cache = ThemeCssCache::new(store.clone());
        cache.get_theme_css(ColorFormat::Hex).await;
        cache.get_theme_css(ColorFormat::Hsl).await;

        assert_eq!(cache.invalidate().await, 2);
        cache.get_theme_css(ColorFormat::Hex).await;
        assert_eq!(store.reads(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn expired_entry_is_recomputed() {
        let store = themed_store();
        let cache = ThemeCssCache::with_ttl(store.clone(), Duration::from_secs(5));
        cache.get_theme_css(ColorFormat::Hex).await;

        tokio::time::advance(Duration::from_secs(6)).await;
        cache.get_theme_css(ColorFormat::Hex).await;
        assert_eq!(store.reads(), 2);
    }

    #[tokio::test]
    async fn store_failure_serves_empty_and_is_not_cached() {
        let store = themed_store();
        let cache = ThemeCssCache::new(store.clone());

        store.set_unavailable(true);
        assert_eq!(&*cache.get_theme_css(ColorFormat::Hex).await, "");

        store.set_unavailable(false);
        assert!(!cache.get_theme_css(ColorFormat::Hex).await.is_empty());
        assert_eq!(store.reads(), 2);
    }

    /// Store whose reads park until released, so a write can land mid-read.
    struct ParkedStore {
        record: ThemeRecord,
        entered: Notify,
        release: Notify,
    }

    #[async_trait]
    impl ThemeStore for ParkedStore {
        async fn read_theme_record(&self) -> Result<Option<ThemeRecord>, StoreError> {
            self.entered.notify_one();
            self.release.notified().await;
            Ok(Some(self.record.clone()))
        }

        async fn write_theme_record(
            &self,
            record: ThemeRecord,
        ) -> Result<ThemeRecord, StoreError> {
            Ok(record)
        }
    }

    #[tokio::test]
    async fn read_racing_invalidation_is_not_cached() {
        let store = Arc::new(ParkedStore {
            record: ThemeRecord::enabled().with_color("lightPrimary", "#FFD100"),
            entered: Notify::new(),
            release: Notify::new(),
        });
        let cache = Arc::new(ThemeCssCache::new(store.clone()));

        let reader = {
            let cache = Arc::clone(&cache);
            tokio::spawn(async move { cache.get_theme_css(ColorFormat::Hex).await })
        };
        store.entered.notified().await;
        cache.invalidate().await;
        store.release.notify_one();

        let css = reader.await.unwrap();
        assert!(css.starts_with(":root { --primary: #ffd100;"));
        assert!(cache.cache.is_empty().await);
    }

    #[tokio::test]
    async fn render_uncached_bypasses_cache() {
        let store = themed_store();
        let cache = ThemeCssCache::new(store.clone());

        let css = cache.render_uncached(ColorFormat::Hex).await.unwrap();
        assert!(css.contains("--primary: #ffd100;"));
        assert!(cache.cache.is_empty().await);
    }
}
