/// Failure reported by a [`ThemeChangeListener`](crate::global::ThemeChangeListener).
///
/// Listener failures never fail the write that triggered them; they are
/// logged by [`ThemeGlobal::update`](crate::global::ThemeGlobal::update).
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Internal error: {0}")]
    Internal(String),
}
