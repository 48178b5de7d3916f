//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod admin;
#[allow(clippy::missing_errors_doc)]
pub mod contact;
#[allow(clippy::missing_errors_doc)]
pub mod projects;
#[allow(clippy::missing_errors_doc)]
pub mod services;

use axum::Router;
use axum::routing::{get, post};

use atelier_app::ports::{
    ContactMailer, MediaStore, ProjectRepository, ServiceRepository, SessionStore,
};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<SR, PR, MS, M, S>() -> Router<AppState<SR, PR, MS, M, S>>
where
    SR: ServiceRepository + Send + Sync + 'static,
    PR: ProjectRepository + Send + Sync + 'static,
    MS: MediaStore + Send + Sync + 'static,
    M: ContactMailer + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    Router::new()
        // Public content
        .route("/services", get(services::list::<SR, PR, MS, M, S>))
        .route("/services/{slug}", get(services::get::<SR, PR, MS, M, S>))
        .route("/projects", get(projects::list::<SR, PR, MS, M, S>))
        .route("/projects/{slug}", get(projects::get::<SR, PR, MS, M, S>))
        // Contact relay
        .route("/contact", post(contact::submit::<SR, PR, MS, M, S>))
        // Admin surface (session-gated per handler)
        .nest("/admin", admin::routes())
}
