//! Persistence seam for the Theme Record.
//!
//! The rest of the crate only sees [`ThemeStore`]. The PostgreSQL
//! implementation lives in `prism-db`; [`MemoryThemeStore`] serves tests and
//! local runs without a database.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::record::ThemeRecord;

/// Why the store could not serve a request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Theme store unavailable: {0}")]
    Unavailable(String),

    #[error("Stored theme record is corrupt: {0}")]
    Corrupt(String),
}

/// Reads and writes the single Theme Record.
#[async_trait]
pub trait ThemeStore: Send + Sync {
    /// The stored record, or `None` when nothing was ever written.
    async fn read_theme_record(&self) -> Result<Option<ThemeRecord>, StoreError>;

    /// Replace the stored record. Returns the record as stored.
    async fn write_theme_record(&self, record: ThemeRecord) -> Result<ThemeRecord, StoreError>;
}

/* --------------------------------------------------------------------------
   In-memory store
   -------------------------------------------------------------------------- */

/// Process-local store. Counts reads and can be switched to fail.
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    record: RwLock<Option<ThemeRecord>>,
    reads: AtomicUsize,
    unavailable: AtomicBool,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store already holding `record`.
    pub fn with_record(record: ThemeRecord) -> Self {
        Self {
            record: RwLock::new(Some(record)),
            ..Self::default()
        }
    }

    /// Number of `read_theme_record` calls served so far (failed ones included).
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// Make every subsequent call fail with [`StoreError::Unavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store switched off".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ThemeStore for MemoryThemeStore {
    async fn read_theme_record(&self) -> Result<Option<ThemeRecord>, StoreError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;
        Ok(self.record.read().await.clone())
    }

    async fn write_theme_record(&self, record: ThemeRecord) -> Result<ThemeRecord, StoreError> {
        self.check_available()?;
        *self.record.write().await = Some(record.clone());
        Ok(record)
    }
}
