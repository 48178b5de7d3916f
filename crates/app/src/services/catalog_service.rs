//! Catalog service — use-cases for managing services (offerings).

use atelier_domain::error::{AtelierError, NotFoundError, ValidationError};
use atelier_domain::id::ServiceId;
use atelier_domain::service::Service;

use crate::ports::{ProjectRepository, ServiceRepository};

/// Application service for service CRUD operations.
pub struct CatalogService<SR, PR> {
    services: SR,
    projects: PR,
}

impl<SR: ServiceRepository, PR: ProjectRepository> CatalogService<SR, PR> {
    /// Create a new service backed by the given repositories.
    pub fn new(services: SR, projects: PR) -> Self {
        Self { services, projects }
    }

    /// Create a new service after validating invariants and slug uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`AtelierError::Validation`] if invariants fail or the slug
    /// is taken, or a storage error propagated from the repository.
    pub async fn create_service(&self, service: Service) -> Result<Service, AtelierError> {
        service.validate()?;
        if self.services.get_by_slug(&service.slug).await?.is_some() {
            return Err(ValidationError::DuplicateSlug(service.slug).into());
        }
        self.services.create(service).await
    }

    /// Look up a service by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`AtelierError::NotFound`] when no service with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_service(&self, id: ServiceId) -> Result<Service, AtelierError> {
        self.services.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Service",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Look up a service by slug, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`AtelierError::NotFound`] when no service with `slug` exists,
    /// or a storage error from the repository.
    pub async fn get_service_by_slug(&self, slug: &str) -> Result<Service, AtelierError> {
        self.services.get_by_slug(slug).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Service",
                id: slug.to_string(),
            }
            .into()
        })
    }

    /// List all services.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_services(&self) -> Result<Vec<Service>, AtelierError> {
        self.services.get_all().await
    }

    /// Update an existing service.
    ///
    /// # Errors
    ///
    /// Returns [`AtelierError::Validation`] if invariants fail or the new
    /// slug belongs to another service, or a storage error from the
    /// repository.
    pub async fn update_service(&self, service: Service) -> Result<Service, AtelierError> {
        service.validate()?;
        if self
            .services
            .get_by_slug(&service.slug)
            .await?
            .is_some_and(|existing| existing.id != service.id)
        {
            return Err(ValidationError::DuplicateSlug(service.slug).into());
        }
        self.services.update(service).await
    }

    /// Delete a service by id.
    ///
    /// Dependent projects are neither blocked nor cascaded: the product has
    /// not decided what should happen to them, so the delete proceeds and a
    /// warning records the orphan count.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repositories.
    pub async fn delete_service(&self, id: ServiceId) -> Result<(), AtelierError> {
        let dependents = self.projects.find_by_service_id(id).await?;
        if !dependents.is_empty() {
            tracing::warn!(
                service_id = %id,
                dependents = dependents.len(),
                "deleting service that still has projects attached"
            );
        }
        self.services.delete(id).await
    }
}
