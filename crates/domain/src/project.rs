//! Project — a portfolio case study belonging to a [`Service`](crate::service::Service).

use serde::{Deserialize, Serialize};

use crate::error::{AtelierError, ValidationError};
use crate::id::{ProjectId, ServiceId};
use crate::lang::LocalizedText;
use crate::time::Timestamp;
use crate::{slug, time};

/// A portfolio case study with imagery, links, and bilingual copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    /// URL-safe unique identifier, distinct from the primary key.
    pub slug: String,
    pub name: LocalizedText,
    pub description: LocalizedText,
    pub long_description: LocalizedText,
    /// Public URL of the primary image.
    pub image_url: String,
    /// Public URLs of additional gallery images.
    pub gallery: Vec<String>,
    pub video_url: Option<String>,
    pub demo_url: Option<String>,
    pub repo_url: Option<String>,
    pub tags: Vec<String>,
    /// Owning service. `None` for projects not yet categorized.
    pub service_id: Option<ServiceId>,
    pub created_at: Timestamp,
    /// Explicit ordering override. Lower values rank first.
    pub sort_order: Option<i64>,
}

impl Project {
    /// Create a builder for constructing a [`Project`].
    #[must_use]
    pub fn builder() -> ProjectBuilder {
        ProjectBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AtelierError::Validation`] when the slug is malformed or
    /// the English name is empty.
    pub fn validate(&self) -> Result<(), AtelierError> {
        slug::validate(&self.slug)?;
        if self.name.en.is_empty() {
            return Err(ValidationError::EmptyText("name").into());
        }
        Ok(())
    }

    /// Every image URL attached to this project (primary + gallery).
    pub fn image_urls(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.image_url.as_str()).chain(self.gallery.iter().map(String::as_str))
    }
}

/// Step-by-step builder for [`Project`].
#[derive(Debug, Default)]
pub struct ProjectBuilder {
    id: Option<ProjectId>,
    slug: Option<String>,
    name: LocalizedText,
    description: LocalizedText,
    long_description: LocalizedText,
    image_url: String,
    gallery: Vec<String>,
    video_url: Option<String>,
    demo_url: Option<String>,
    repo_url: Option<String>,
    tags: Vec<String>,
    service_id: Option<ServiceId>,
    created_at: Option<Timestamp>,
    sort_order: Option<i64>,
}

impl ProjectBuilder {
    #[must_use]
    pub fn id(mut self, id: ProjectId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: LocalizedText) -> Self {
        self.name = name;
        self
    }

    #[must_use]
    pub fn description(mut self, description: LocalizedText) -> Self {
        self.description = description;
        self
    }

    #[must_use]
    pub fn long_description(mut self, long_description: LocalizedText) -> Self {
        self.long_description = long_description;
        self
    }

    #[must_use]
    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    #[must_use]
    pub fn gallery(mut self, gallery: Vec<String>) -> Self {
        self.gallery = gallery;
        self
    }

    #[must_use]
    pub fn video_url(mut self, video_url: impl Into<String>) -> Self {
        self.video_url = Some(video_url.into());
        self
    }

    #[must_use]
    pub fn demo_url(mut self, demo_url: impl Into<String>) -> Self {
        self.demo_url = Some(demo_url.into());
        self
    }

    #[must_use]
    pub fn repo_url(mut self, repo_url: impl Into<String>) -> Self {
        self.repo_url = Some(repo_url.into());
        self
    }

    #[must_use]
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    #[must_use]
    pub fn service_id(mut self, service_id: ServiceId) -> Self {
        self.service_id = Some(service_id);
        self
    }

    #[must_use]
    pub fn created_at(mut self, created_at: Timestamp) -> Self {
        self.created_at = Some(created_at);
        self
    }

    #[must_use]
    pub fn sort_order(mut self, sort_order: i64) -> Self {
        self.sort_order = Some(sort_order);
        self
    }

    /// Consume the builder, validate, and return a [`Project`].
    ///
    /// # Errors
    ///
    /// Returns [`AtelierError::Validation`] if any invariant fails.
    pub fn build(self) -> Result<Project, AtelierError> {
        let project = Project {
            id: self.id.unwrap_or_default(),
            slug: self.slug.unwrap_or_default(),
            name: self.name,
            description: self.description,
            long_description: self.long_description,
            image_url: self.image_url,
            gallery: self.gallery,
            video_url: self.video_url,
            demo_url: self.demo_url,
            repo_url: self.repo_url,
            tags: self.tags,
            service_id: self.service_id,
            created_at: self.created_at.unwrap_or_else(time::now),
            sort_order: self.sort_order,
        };
        project.validate()?;
        Ok(project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> ProjectBuilder {
        Project::builder()
            .slug("atlas")
            .name(LocalizedText::new("Atlas", "Atlas"))
    }

    #[test]
    fn should_build_valid_project() {
        let service_id = ServiceId::new();
        let project = builder()
            .image_url("https://cdn.example.com/media/projects/atlas.png")
            .service_id(service_id)
            .build()
            .unwrap();
        assert_eq!(project.slug, "atlas");
        assert_eq!(project.service_id, Some(service_id));
        assert!(project.sort_order.is_none());
    }

    #[test]
    fn should_reject_empty_slug() {
        let result = Project::builder()
            .name(LocalizedText::english("Atlas"))
            .build();
        assert!(matches!(
            result,
            Err(AtelierError::Validation(ValidationError::EmptySlug))
        ));
    }

    #[test]
    fn should_reject_empty_english_name() {
        let result = Project::builder().slug("atlas").build();
        assert!(matches!(
            result,
            Err(AtelierError::Validation(ValidationError::EmptyText("name")))
        ));
    }

    #[test]
    fn should_list_primary_and_gallery_image_urls() {
        let project = builder()
            .image_url("a.png")
            .gallery(vec!["b.png".to_string(), "c.png".to_string()])
            .build()
            .unwrap();
        let urls: Vec<&str> = project.image_urls().collect();
        assert_eq!(urls, vec!["a.png", "b.png", "c.png"]);
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let project = builder()
            .tags(vec!["rust".to_string(), "go".to_string()])
            .sort_order(3)
            .build()
            .unwrap();
        let json = serde_json::to_string(&project).unwrap();
        let parsed: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, project.id);
        assert_eq!(parsed.tags, project.tags);
        assert_eq!(parsed.sort_order, Some(3));
    }
}
