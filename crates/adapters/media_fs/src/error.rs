//! Media-specific error type wrapping filesystem errors.

use atelier_domain::error::AtelierError;

/// Errors originating from the filesystem media store.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    /// A filesystem operation failed.
    #[error("filesystem error")]
    Io(#[from] std::io::Error),

    /// A bucket or object name would escape the storage root.
    #[error("invalid object name `{0}`")]
    InvalidName(String),
}

impl From<MediaError> for AtelierError {
    fn from(err: MediaError) -> Self {
        Self::Media(Box::new(err))
    }
}
