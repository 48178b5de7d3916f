//! Media port — object storage for uploaded images.

use std::future::Future;

use atelier_domain::error::AtelierError;

/// Object storage keyed by bucket name and object path.
///
/// Buckets and object paths are opaque strings; the store decides how they
/// map onto its backend (filesystem directories, cloud buckets, …).
pub trait MediaStore {
    /// Write an object, overwriting any existing one with the same path
    /// (upsert semantics). Returns the public URL of the stored object.
    fn store(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
    ) -> impl Future<Output = Result<String, AtelierError>> + Send;

    /// Remove an object. Removing a missing object is an error the caller
    /// may choose to swallow.
    fn remove(
        &self,
        bucket: &str,
        path: &str,
    ) -> impl Future<Output = Result<(), AtelierError>> + Send;

    /// Resolve the public URL an object is served under.
    fn public_url(&self, bucket: &str, path: &str) -> String;
}
