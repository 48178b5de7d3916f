//! Slug — URL-safe unique identifier for services and projects.

use crate::error::ValidationError;

/// Check that a slug is non-empty and contains only `[a-z0-9-]`.
///
/// # Errors
///
/// Returns [`ValidationError::EmptySlug`] or [`ValidationError::InvalidSlug`].
pub fn validate(slug: &str) -> Result<(), ValidationError> {
    if slug.is_empty() {
        return Err(ValidationError::EmptySlug);
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(ValidationError::InvalidSlug(slug.to_string()));
    }
    Ok(())
}
