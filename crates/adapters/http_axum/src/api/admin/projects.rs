//! Admin CRUD handlers for projects.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use atelier_app::ports::{
    ContactMailer, MediaStore, ProjectRepository, ServiceRepository, SessionStore,
};
use atelier_domain::error::ValidationError;
use atelier_domain::id::{ProjectId, ServiceId};
use atelier_domain::lang::LocalizedText;
use atelier_domain::project::{Project, ProjectBuilder};

use crate::auth::AdminSession;
use crate::error::ApiError;
use crate::state::AppState;

/// Write payload for a project.
///
/// `service_id` is a string so the admin form can submit an empty value
/// for "no service"; anything non-empty must parse as a UUID.
#[derive(Deserialize)]
pub struct ProjectPayload {
    pub slug: String,
    pub name: LocalizedText,
    #[serde(default)]
    pub description: LocalizedText,
    #[serde(default)]
    pub long_description: LocalizedText,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub repo_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub service_id: Option<String>,
    #[serde(default)]
    pub sort_order: Option<i64>,
}

impl ProjectPayload {
    fn service_id(&self) -> Result<Option<ServiceId>, ValidationError> {
        match self.service_id.as_deref() {
            None | Some("") => Ok(None),
            Some(raw) => raw
                .parse()
                .map(Some)
                .map_err(|_| ValidationError::InvalidId(raw.to_string())),
        }
    }

    fn into_builder(self) -> ProjectBuilder {
        let mut builder = Project::builder()
            .slug(self.slug)
            .name(self.name)
            .description(self.description)
            .long_description(self.long_description)
            .image_url(self.image_url)
            .gallery(self.gallery)
            .tags(self.tags);
        if let Some(url) = self.video_url {
            builder = builder.video_url(url);
        }
        if let Some(url) = self.demo_url {
            builder = builder.demo_url(url);
        }
        if let Some(url) = self.repo_url {
            builder = builder.repo_url(url);
        }
        if let Some(order) = self.sort_order {
            builder = builder.sort_order(order);
        }
        builder
    }
}

fn parse_id(raw: &str) -> Result<ProjectId, ValidationError> {
    raw.parse()
        .map_err(|_| ValidationError::InvalidId(raw.to_string()))
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Project>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /api/admin/projects`
pub async fn list<SR, PR, MS, M, S>(
    State(state): State<AppState<SR, PR, MS, M, S>>,
    _session: AdminSession,
) -> Result<Json<Vec<Project>>, ApiError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    PR: ProjectRepository + Send + Sync + 'static,
    MS: MediaStore + Send + Sync + 'static,
    M: ContactMailer + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let projects = state.projects.list_projects().await?;
    Ok(Json(projects))
}

/// `POST /api/admin/projects`
pub async fn create<SR, PR, MS, M, S>(
    State(state): State<AppState<SR, PR, MS, M, S>>,
    _session: AdminSession,
    Json(payload): Json<ProjectPayload>,
) -> Result<CreateResponse, ApiError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    PR: ProjectRepository + Send + Sync + 'static,
    MS: MediaStore + Send + Sync + 'static,
    M: ContactMailer + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let service_id = payload.service_id()?;
    let mut builder = payload.into_builder();
    if let Some(service_id) = service_id {
        builder = builder.service_id(service_id);
    }
    let project = builder.build()?;
    let created = state.projects.create_project(project).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/admin/projects/{id}`
///
/// The creation timestamp of the existing row is preserved; everything
/// else is replaced by the payload. Images the update stops referencing
/// are cleaned up by the project service.
pub async fn update<SR, PR, MS, M, S>(
    State(state): State<AppState<SR, PR, MS, M, S>>,
    _session: AdminSession,
    Path(id): Path<String>,
    Json(payload): Json<ProjectPayload>,
) -> Result<Json<Project>, ApiError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    PR: ProjectRepository + Send + Sync + 'static,
    MS: MediaStore + Send + Sync + 'static,
    M: ContactMailer + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    let service_id = payload.service_id()?;
    let existing = state.projects.get_project(id).await?;
    let mut builder = payload
        .into_builder()
        .id(id)
        .created_at(existing.created_at);
    if let Some(service_id) = service_id {
        builder = builder.service_id(service_id);
    }
    let project = builder.build()?;
    let updated = state.projects.update_project(project).await?;
    Ok(Json(updated))
}

/// `DELETE /api/admin/projects/{id}`
pub async fn remove<SR, PR, MS, M, S>(
    State(state): State<AppState<SR, PR, MS, M, S>>,
    _session: AdminSession,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    PR: ProjectRepository + Send + Sync + 'static,
    MS: MediaStore + Send + Sync + 'static,
    M: ContactMailer + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    state.projects.delete_project(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
