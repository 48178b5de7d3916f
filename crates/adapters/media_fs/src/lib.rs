//! # atelier-adapter-media-fs
//!
//! Filesystem implementation of the [`MediaStore`](atelier_app::ports::MediaStore)
//! port.
//!
//! ## Responsibilities
//! - Store objects under `<root>/<bucket>/<name>` with upsert semantics
//! - Remove objects
//! - Resolve the public URL an object is served under (percent-encoded,
//!   relative to a configured base URL)
//!
//! The HTTP adapter serves `<root>` statically so the resolved URLs work
//! without any extra plumbing.

pub mod error;
pub mod store;

pub use error::MediaError;
pub use store::FsMediaStore;
