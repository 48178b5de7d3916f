//! Admin CRUD handlers for services.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use atelier_app::ports::{
    ContactMailer, MediaStore, ProjectRepository, ServiceRepository, SessionStore,
};
use atelier_domain::error::ValidationError;
use atelier_domain::icon::Icon;
use atelier_domain::id::ServiceId;
use atelier_domain::lang::LocalizedText;
use atelier_domain::service::Service;

use crate::auth::AdminSession;
use crate::error::ApiError;
use crate::state::AppState;

/// Write payload for a service. The icon arrives as its stable name and
/// is parsed strictly, so a typo fails the request instead of degrading
/// silently.
#[derive(Deserialize)]
pub struct ServicePayload {
    pub slug: String,
    pub title: LocalizedText,
    #[serde(default)]
    pub description: LocalizedText,
    #[serde(default)]
    pub tags: Vec<String>,
    pub icon: String,
    #[serde(default)]
    pub system_load: u8,
}

impl ServicePayload {
    fn icon(&self) -> Result<Icon, ValidationError> {
        Icon::parse(&self.icon)
    }
}

fn parse_id(raw: &str) -> Result<ServiceId, ValidationError> {
    raw.parse()
        .map_err(|_| ValidationError::InvalidId(raw.to_string()))
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Service>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /api/admin/services`
pub async fn list<SR, PR, MS, M, S>(
    State(state): State<AppState<SR, PR, MS, M, S>>,
    _session: AdminSession,
) -> Result<Json<Vec<Service>>, ApiError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    PR: ProjectRepository + Send + Sync + 'static,
    MS: MediaStore + Send + Sync + 'static,
    M: ContactMailer + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let services = state.catalog.list_services().await?;
    Ok(Json(services))
}

/// `POST /api/admin/services`
pub async fn create<SR, PR, MS, M, S>(
    State(state): State<AppState<SR, PR, MS, M, S>>,
    _session: AdminSession,
    Json(payload): Json<ServicePayload>,
) -> Result<CreateResponse, ApiError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    PR: ProjectRepository + Send + Sync + 'static,
    MS: MediaStore + Send + Sync + 'static,
    M: ContactMailer + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let icon = payload.icon()?;
    let service = Service::builder()
        .slug(payload.slug)
        .title(payload.title)
        .description(payload.description)
        .tags(payload.tags)
        .icon(icon)
        .system_load(payload.system_load)
        .build()?;
    let created = state.catalog.create_service(service).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/admin/services/{id}`
///
/// The creation timestamp of the existing row is preserved; everything
/// else is replaced by the payload.
pub async fn update<SR, PR, MS, M, S>(
    State(state): State<AppState<SR, PR, MS, M, S>>,
    _session: AdminSession,
    Path(id): Path<String>,
    Json(payload): Json<ServicePayload>,
) -> Result<Json<Service>, ApiError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    PR: ProjectRepository + Send + Sync + 'static,
    MS: MediaStore + Send + Sync + 'static,
    M: ContactMailer + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    let icon = payload.icon()?;
    let existing = state.catalog.get_service(id).await?;
    let service = Service::builder()
        .id(id)
        .slug(payload.slug)
        .title(payload.title)
        .description(payload.description)
        .tags(payload.tags)
        .icon(icon)
        .system_load(payload.system_load)
        .created_at(existing.created_at)
        .build()?;
    let updated = state.catalog.update_service(service).await?;
    Ok(Json(updated))
}

/// `DELETE /api/admin/services/{id}`
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
    state.catalog.delete_service(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
