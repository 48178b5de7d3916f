//! Service — a top-level offering shown on the marketing site, grouping projects.

use serde::{Deserialize, Serialize};

use crate::error::{AtelierError, ValidationError};
use crate::icon::Icon;
use crate::id::ServiceId;
use crate::lang::LocalizedText;
use crate::time::Timestamp;
use crate::{slug, time};

/// Highest value the presentational "system load" gauge can display.
pub const MAX_SYSTEM_LOAD: u8 = 100;

/// A top-level offering such as "Web platforms" or "Cloud infrastructure".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    /// URL-safe unique identifier, distinct from the primary key.
    pub slug: String,
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub tags: Vec<String>,
    pub icon: Icon,
    /// Presentational gauge value in `0..=100`.
    pub system_load: u8,
    pub created_at: Timestamp,
}

impl Service {
    /// Create a builder for constructing a [`Service`].
    #[must_use]
    pub fn builder() -> ServiceBuilder {
        ServiceBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AtelierError::Validation`] when the slug is malformed,
    /// the English title is empty, or `system_load` exceeds 100.
    pub fn validate(&self) -> Result<(), AtelierError> {
        slug::validate(&self.slug)?;
        if self.title.en.is_empty() {
            return Err(ValidationError::EmptyText("title").into());
        }
        if self.system_load > MAX_SYSTEM_LOAD {
            return Err(ValidationError::SystemLoadOutOfRange(self.system_load).into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Service`].
#[derive(Debug, Default)]
pub struct ServiceBuilder {
    id: Option<ServiceId>,
    slug: Option<String>,
    title: LocalizedText,
    description: LocalizedText,
    tags: Vec<String>,
    icon: Icon,
    system_load: u8,
    created_at: Option<Timestamp>,
}

impl ServiceBuilder {
    #[must_use]
    pub fn id(mut self, id: ServiceId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    #[must_use]
    pub fn title(mut self, title: LocalizedText) -> Self {
        self.title = title;
        self
    }

    #[must_use]
    pub fn description(mut self, description: LocalizedText) -> Self {
        self.description = description;
        self
    }

    #[must_use]
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = icon;
        self
    }

    #[must_use]
    pub fn system_load(mut self, system_load: u8) -> Self {
        self.system_load = system_load;
        self
    }

    #[must_use]
    pub fn created_at(mut self, created_at: Timestamp) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Consume the builder, validate, and return a [`Service`].
    ///
    /// # Errors
    ///
    /// Returns [`AtelierError::Validation`] if any invariant fails.
    pub fn build(self) -> Result<Service, AtelierError> {
        let service = Service {
            id: self.id.unwrap_or_default(),
            slug: self.slug.unwrap_or_default(),
            title: self.title,
            description: self.description,
            tags: self.tags,
            icon: self.icon,
            system_load: self.system_load,
            created_at: self.created_at.unwrap_or_else(time::now),
        };
        service.validate()?;
        Ok(service)
    }
}
