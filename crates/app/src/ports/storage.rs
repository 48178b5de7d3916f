//! Storage port — repository traits for catalog persistence.

use std::future::Future;

use atelier_domain::error::AtelierError;
use atelier_domain::id::{ProjectId, ServiceId};
use atelier_domain::project::Project;
use atelier_domain::service::Service;

/// Persistence operations for [`Service`] records.
pub trait ServiceRepository {
    fn create(&self, service: Service) -> impl Future<Output = Result<Service, AtelierError>> + Send;

    fn get_by_id(
        &self,
        id: ServiceId,
    ) -> impl Future<Output = Result<Option<Service>, AtelierError>> + Send;

    fn get_by_slug(
        &self,
        slug: &str,
    ) -> impl Future<Output = Result<Option<Service>, AtelierError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Service>, AtelierError>> + Send;

    fn update(&self, service: Service) -> impl Future<Output = Result<Service, AtelierError>> + Send;

    fn delete(&self, id: ServiceId) -> impl Future<Output = Result<(), AtelierError>> + Send;
}

/// Persistence operations for [`Project`] records.
pub trait ProjectRepository {
    fn create(&self, project: Project) -> impl Future<Output = Result<Project, AtelierError>> + Send;

    fn get_by_id(
        &self,
        id: ProjectId,
    ) -> impl Future<Output = Result<Option<Project>, AtelierError>> + Send;

    fn get_by_slug(
        &self,
        slug: &str,
    ) -> impl Future<Output = Result<Option<Project>, AtelierError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Project>, AtelierError>> + Send;

    /// Projects owned by the given service.
    fn find_by_service_id(
        &self,
        service_id: ServiceId,
    ) -> impl Future<Output = Result<Vec<Project>, AtelierError>> + Send;

    fn update(&self, project: Project) -> impl Future<Output = Result<Project, AtelierError>> + Send;

    fn delete(&self, id: ProjectId) -> impl Future<Output = Result<(), AtelierError>> + Send;
}
