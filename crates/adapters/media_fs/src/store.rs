//! Filesystem implementation of [`MediaStore`].

use std::path::PathBuf;

use atelier_app::ports::MediaStore;
use atelier_domain::error::AtelierError;

use crate::error::MediaError;

/// Filesystem-backed media store.
///
/// Objects live at `<root>/<bucket>/<name>`; public URLs are
/// `<base_url>/<bucket>/<percent-encoded name>`.
#[derive(Debug, Clone)]
pub struct FsMediaStore {
    root: PathBuf,
    base_url: String,
}

impl FsMediaStore {
    /// Create a store rooted at `root`, serving URLs under `base_url`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Resolve the on-disk location, rejecting names that would escape
    /// the storage root.
    fn location(&self, bucket: &str, path: &str) -> Result<PathBuf, MediaError> {
        for segment in [bucket, path] {
            if segment.is_empty()
                || segment.contains("..")
                || segment.contains('/')
                || segment.contains('\\')
            {
                return Err(MediaError::InvalidName(segment.to_string()));
            }
        }
        Ok(self.root.join(bucket).join(path))
    }
}

impl MediaStore for FsMediaStore {
    async fn store(&self, bucket: &str, path: &str, bytes: Vec<u8>) -> Result<String, AtelierError> {
        let location = self.location(bucket, path)?;
        // Parent always exists after this, and writing over an existing
        // object is the intended upsert behavior.
        tokio::fs::create_dir_all(self.root.join(bucket))
            .await
            .map_err(MediaError::from)?;
        tokio::fs::write(&location, bytes)
            .await
            .map_err(MediaError::from)?;
        tracing::debug!(bucket, object = path, "wrote media object");
        Ok(self.public_url(bucket, path))
    }

    async fn remove(&self, bucket: &str, path: &str) -> Result<(), AtelierError> {
        let location = self.location(bucket, path)?;
        tokio::fs::remove_file(&location)
            .await
            .map_err(MediaError::from)?;
        Ok(())
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        format!(
            "{}/{bucket}/{}",
            self.base_url,
            urlencoding::encode(path)
        )
    }
}
