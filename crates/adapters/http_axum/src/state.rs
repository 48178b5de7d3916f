//! Shared application state for axum handlers.

use std::sync::Arc;

use atelier_app::ports::{
    ContactMailer, MediaStore, ProjectRepository, ServiceRepository, SessionStore,
};
use atelier_app::services::catalog_service::CatalogService;
use atelier_app::services::contact_service::ContactService;
use atelier_app::services::listing_service::ListingService;
use atelier_app::services::media_service::MediaService;
use atelier_app::services::project_service::ProjectService;
use atelier_app::services::session_service::SessionService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository, media store, mailer, and session store
/// types to avoid dynamic dispatch. `Clone` is implemented manually so the
/// underlying types themselves do not need to be `Clone` — only the `Arc`
/// wrappers are cloned.
pub struct AppState<SR, PR, MS, M, S> {
    /// Service (offering) CRUD use-cases.
    pub catalog: Arc<CatalogService<SR, PR>>,
    /// Project CRUD use-cases, including image cleanup.
    pub projects: Arc<ProjectService<PR, MS>>,
    /// The public filtered/sorted portfolio view.
    pub listing: Arc<ListingService<SR, PR>>,
    /// Image upload/removal use-cases for the admin media endpoints.
    pub media: Arc<MediaService<MS>>,
    /// Contact-form validation and relay.
    pub contact: Arc<ContactService<M>>,
    /// The admin authentication gate.
    pub sessions: Arc<SessionService<S>>,
}

impl<SR, PR, MS, M, S> Clone for AppState<SR, PR, MS, M, S> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            projects: Arc::clone(&self.projects),
            listing: Arc::clone(&self.listing),
            media: Arc::clone(&self.media),
            contact: Arc::clone(&self.contact),
            sessions: Arc::clone(&self.sessions),
        }
    }
}

impl<SR, PR, MS, M, S> AppState<SR, PR, MS, M, S>
where
    SR: ServiceRepository + Send + Sync + 'static,
    PR: ProjectRepository + Send + Sync + 'static,
    MS: MediaStore + Send + Sync + 'static,
    M: ContactMailer + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        catalog: CatalogService<SR, PR>,
        projects: ProjectService<PR, MS>,
        listing: ListingService<SR, PR>,
        media: MediaService<MS>,
        contact: ContactService<M>,
        sessions: SessionService<S>,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            projects: Arc::new(projects),
            listing: Arc::new(listing),
            media: Arc::new(media),
            contact: Arc::new(contact),
            sessions: Arc::new(sessions),
        }
    }
}
