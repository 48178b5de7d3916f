//! Project service — use-cases for managing portfolio projects.

use atelier_domain::error::{AtelierError, NotFoundError, ValidationError};
use atelier_domain::id::ProjectId;
use atelier_domain::project::Project;

use crate::ports::{MediaStore, ProjectRepository};
use crate::services::media_service::MediaService;

/// Application service for project CRUD operations.
///
/// Mutations that drop image URLs (updates replacing an image, deletes)
/// trigger best-effort cleanup through the media service; cleanup failures
/// never fail the mutation itself.
pub struct ProjectService<PR, MS> {
    projects: PR,
    media: MediaService<MS>,
    bucket: String,
}

impl<PR: ProjectRepository, MS: MediaStore> ProjectService<PR, MS> {
    /// Create a new service backed by the given repository and media store.
    pub fn new(projects: PR, media: MediaService<MS>, bucket: impl Into<String>) -> Self {
        Self {
            projects,
            media,
            bucket: bucket.into(),
        }
    }

    /// Create a new project after validating invariants and slug uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`AtelierError::Validation`] if invariants fail or the slug
    /// is taken, or a storage error propagated from the repository.
    pub async fn create_project(&self, project: Project) -> Result<Project, AtelierError> {
        project.validate()?;
        if self.projects.get_by_slug(&project.slug).await?.is_some() {
            return Err(ValidationError::DuplicateSlug(project.slug).into());
        }
        self.projects.create(project).await
    }

    /// Look up a project by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`AtelierError::NotFound`] when no project with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_project(&self, id: ProjectId) -> Result<Project, AtelierError> {
        self.projects.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Project",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Look up a project by slug, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`AtelierError::NotFound`] when no project with `slug` exists,
    /// or a storage error from the repository.
    pub async fn get_project_by_slug(&self, slug: &str) -> Result<Project, AtelierError> {
        self.projects.get_by_slug(slug).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Project",
                id: slug.to_string(),
            }
            .into()
        })
    }

    /// List all projects.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_projects(&self) -> Result<Vec<Project>, AtelierError> {
        self.projects.get_all().await
    }

    /// Update an existing project, then clean up any image the update
    /// stopped referencing.
    ///
    /// # Errors
    ///
    /// Returns [`AtelierError::Validation`] if invariants fail or the new
    /// slug belongs to another project, [`AtelierError::NotFound`] if the
    /// project does not exist, or a storage error from the repository.
    /// Cleanup failures are swallowed.
    pub async fn update_project(&self, project: Project) -> Result<Project, AtelierError> {
        project.validate()?;
        if self
            .projects
            .get_by_slug(&project.slug)
            .await?
            .is_some_and(|existing| existing.id != project.id)
        {
            return Err(ValidationError::DuplicateSlug(project.slug).into());
        }
        let before = self.get_project(project.id).await?;
        let updated = self.projects.update(project).await?;

        let old: Vec<String> = before.image_urls().map(ToString::to_string).collect();
        let new: Vec<String> = updated.image_urls().map(ToString::to_string).collect();
        self.media
            .remove_replaced(
                &self.bucket,
                old.iter().map(String::as_str),
                new.iter().map(String::as_str),
            )
            .await;

        Ok(updated)
    }

    /// Delete a project and best-effort remove its images.
    ///
    /// # Errors
    ///
    /// Returns [`AtelierError::NotFound`] if the project does not exist,
    /// or a storage error from the repository.
    pub async fn delete_project(&self, id: ProjectId) -> Result<(), AtelierError> {
        let project = self.get_project(id).await?;
        self.projects.delete(id).await?;

        for url in project.image_urls() {
            self.media.remove_by_url(&self.bucket, url).await;
        }
        Ok(())
    }
}
