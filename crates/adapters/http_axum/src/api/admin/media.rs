//! Admin handlers for image upload and removal.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use atelier_app::ports::{
    ContactMailer, MediaStore, ProjectRepository, ServiceRepository, SessionStore,
};

use crate::auth::AdminSession;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct UploadQuery {
    /// Original file name, used only to keep the extension. The stored
    /// object gets a random name.
    pub filename: String,
}

#[derive(Serialize)]
pub struct UploadBody {
    pub url: String,
}

#[derive(Deserialize)]
pub struct RemovePayload {
    pub url: String,
}

/// Possible responses from the upload endpoint.
pub enum UploadResponse {
    Created(Json<UploadBody>),
}

impl IntoResponse for UploadResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `POST /api/admin/media/{bucket}?filename=…`
///
/// The raw request body is the image bytes.
pub async fn upload<SR, PR, MS, M, S>(
    State(state): State<AppState<SR, PR, MS, M, S>>,
    _session: AdminSession,
    Path(bucket): Path<String>,
    Query(query): Query<UploadQuery>,
    body: Bytes,
) -> Result<UploadResponse, ApiError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    PR: ProjectRepository + Send + Sync + 'static,
    MS: MediaStore + Send + Sync + 'static,
    M: ContactMailer + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let url = state
        .media
        .upload(&bucket, &query.filename, body.to_vec())
        .await?;
    Ok(UploadResponse::Created(Json(UploadBody { url })))
}

/// `DELETE /api/admin/media/{bucket}`
///
/// Removal is best-effort: a URL pointing outside the bucket or a store
/// failure is logged and the response is still `204`.
pub async fn remove<SR, PR, MS, M, S>(
    State(state): State<AppState<SR, PR, MS, M, S>>,
    _session: AdminSession,
    Path(bucket): Path<String>,
    Json(payload): Json<RemovePayload>,
) -> StatusCode
where
    SR: ServiceRepository + Send + Sync + 'static,
    PR: ProjectRepository + Send + Sync + 'static,
    MS: MediaStore + Send + Sync + 'static,
    M: ContactMailer + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    state.media.remove_by_url(&bucket, &payload.url).await;
    StatusCode::NO_CONTENT
}
