//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`AtelierError`] via `#[from]` or an explicit `From` impl. Adapter
//! errors (storage, media, mail) are boxed so the domain stays free of
//! adapter crate types.

/// Top-level error type shared across the workspace.
#[derive(Debug, thiserror::Error)]
pub enum AtelierError {
    /// A domain invariant was violated.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A requested record does not exist.
    #[error("{0}")]
    NotFound(#[from] NotFoundError),

    /// Admin credentials or session token were rejected.
    #[error("unauthorized")]
    Unauthorized,

    /// The persistence layer failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The media store failed.
    #[error("media error")]
    Media(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The mail relay failed.
    #[error("mail error")]
    Mail(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Violations of domain invariants, raised before any write.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The slug is empty.
    #[error("slug must not be empty")]
    EmptySlug,

    /// The slug contains characters outside `[a-z0-9-]`.
    #[error("slug `{0}` must contain only lowercase letters, digits and dashes")]
    InvalidSlug(String),

    /// The slug is already taken by another record.
    #[error("slug `{0}` is already in use")]
    DuplicateSlug(String),

    /// The English title/name is empty.
    #[error("English {0} must not be empty")]
    EmptyText(&'static str),

    /// The system load value exceeds the displayable range.
    #[error("system load {0} is out of range (0-100)")]
    SystemLoadOutOfRange(u8),

    /// The icon name does not match any known icon.
    #[error("unknown icon `{0}`")]
    UnknownIcon(String),

    /// An identifier failed to parse.
    #[error("invalid identifier `{0}`")]
    InvalidId(String),

    /// A required field is missing or blank.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
}

/// A record lookup that yielded nothing.
#[derive(Debug, thiserror::Error)]
#[error("{entity} `{id}` not found")]
pub struct NotFoundError {
    /// Human-readable kind of the missing record.
    pub entity: &'static str,
    /// The identifier or slug that was looked up.
    pub id: String,
}
