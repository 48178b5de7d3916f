//! The session-gated admin surface.
//!
//! Every handler except `login` takes an [`AdminSession`](crate::auth::AdminSession)
//! extractor, so an invalid or missing bearer token rejects the request
//! before the handler body runs.

pub mod media;
pub mod projects;
pub mod services;
pub mod session;

use axum::Router;
use axum::routing::{get, post, put};

use atelier_app::ports::{
    ContactMailer, MediaStore, ProjectRepository, ServiceRepository, SessionStore,
};

use crate::state::AppState;

/// Build the `/api/admin` sub-router.
pub fn routes<SR, PR, MS, M, S>() -> Router<AppState<SR, PR, MS, M, S>>
where
    SR: ServiceRepository + Send + Sync + 'static,
    PR: ProjectRepository + Send + Sync + 'static,
    MS: MediaStore + Send + Sync + 'static,
    M: ContactMailer + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    Router::new()
        .route("/login", post(session::login::<SR, PR, MS, M, S>))
        .route("/logout", post(session::logout::<SR, PR, MS, M, S>))
        .route(
            "/services",
            get(services::list::<SR, PR, MS, M, S>).post(services::create::<SR, PR, MS, M, S>),
        )
        .route(
            "/services/{id}",
            put(services::update::<SR, PR, MS, M, S>)
                .delete(services::remove::<SR, PR, MS, M, S>),
        )
        .route(
            "/projects",
            get(projects::list::<SR, PR, MS, M, S>).post(projects::create::<SR, PR, MS, M, S>),
        )
        .route(
            "/projects/{id}",
            put(projects::update::<SR, PR, MS, M, S>)
                .delete(projects::remove::<SR, PR, MS, M, S>),
        )
        .route(
            "/media/{bucket}",
            post(media::upload::<SR, PR, MS, M, S>).delete(media::remove::<SR, PR, MS, M, S>),
        )
}
