//! Media service — upload naming and best-effort image cleanup.

use atelier_domain::error::AtelierError;

use crate::ports::MediaStore;

/// Application service for image uploads and removals.
pub struct MediaService<MS> {
    pub(crate) store: MS,
}

/// Recover the storage path of an object from its public URL.
///
/// The URL is split on the `/{bucket}/` segment and the remainder is
/// percent-decoded, so `…/projects/abc%20def.png` yields `abc def.png`.
/// Returns `None` when the URL does not contain the bucket segment or the
/// remainder fails to decode.
#[must_use]
pub fn object_path(bucket: &str, url: &str) -> Option<String> {
    let marker = format!("/{bucket}/");
    let (_, encoded) = url.split_once(&marker)?;
    if encoded.is_empty() {
        return None;
    }
    urlencoding::decode(encoded).ok().map(|path| path.into_owned())
}

impl<MS: MediaStore> MediaService<MS> {
    /// Create a new service backed by the given media store.
    pub fn new(store: MS) -> Self {
        Self { store }
    }

    /// Store uploaded bytes under a collision-safe random name, keeping the
    /// original file extension. Returns the public URL.
    ///
    /// # Errors
    ///
    /// Returns [`AtelierError::Media`] when the store rejects the write.
    pub async fn upload(
        &self,
        bucket: &str,
        original_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String, AtelierError> {
        let name = generated_name(original_name);
        let url = self.store.store(bucket, &name, bytes).await?;
        tracing::debug!(bucket, object = %name, "stored uploaded image");
        Ok(url)
    }

    /// Best-effort removal of the object a public URL points at.
    ///
    /// Never fails: a URL without the bucket segment is ignored, and store
    /// errors are logged and swallowed so cleanup can never block the
    /// primary mutation that triggered it.
    pub async fn remove_by_url(&self, bucket: &str, url: &str) {
        let Some(path) = object_path(bucket, url) else {
            tracing::debug!(bucket, url, "url does not reference the bucket, skipping removal");
            return;
        };
        if let Err(err) = self.store.remove(bucket, &path).await {
            tracing::warn!(bucket, object = %path, error = %err, "image cleanup failed");
        }
    }

    /// Remove every URL present in `before` but absent from `after`.
    pub async fn remove_replaced<'a, I, J>(&self, bucket: &str, before: I, after: J)
    where
        I: IntoIterator<Item = &'a str>,
        J: IntoIterator<Item = &'a str>,
    {
        let kept: Vec<&str> = after.into_iter().collect();
        for url in before {
            if !kept.contains(&url) {
                self.remove_by_url(bucket, url).await;
            }
        }
    }

    /// Resolve the public URL for an already-stored object.
    #[must_use]
    pub fn public_url(&self, bucket: &str, path: &str) -> String {
        self.store.public_url(bucket, path)
    }
}

/// Random object name preserving the (sanitized) original extension.
fn generated_name(original_name: &str) -> String {
    let id = uuid::Uuid::new_v4();
    match std::path::Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
    {
        Some(ext) => format!("{id}.{}", ext.to_ascii_lowercase()),
        None => id.to_string(),
    }
}
