//! Admin session handlers: login and logout.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use atelier_app::ports::{
    ContactMailer, MediaStore, ProjectRepository, ServiceRepository, SessionStore,
};
use atelier_domain::time::Timestamp;

use crate::auth::AdminSession;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct LoginPayload {
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginBody {
    pub token: String,
    pub expires_at: Timestamp,
}

/// Possible responses from the login endpoint.
pub enum LoginResponse {
    Ok(Json<LoginBody>),
}

impl IntoResponse for LoginResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /api/admin/login`
pub async fn login<SR, PR, MS, M, S>(
    State(state): State<AppState<SR, PR, MS, M, S>>,
    Json(payload): Json<LoginPayload>,
) -> Result<LoginResponse, ApiError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    PR: ProjectRepository + Send + Sync + 'static,
    MS: MediaStore + Send + Sync + 'static,
    M: ContactMailer + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let session = state.sessions.login(&payload.password)?;
    Ok(LoginResponse::Ok(Json(LoginBody {
        token: session.token,
        expires_at: session.expires_at,
    })))
}

/// `POST /api/admin/logout`
pub async fn logout<SR, PR, MS, M, S>(
    State(state): State<AppState<SR, PR, MS, M, S>>,
    AdminSession(session): AdminSession,
) -> StatusCode
where
    SR: ServiceRepository + Send + Sync + 'static,
    PR: ProjectRepository + Send + Sync + 'static,
    MS: MediaStore + Send + Sync + 'static,
    M: ContactMailer + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    state.sessions.logout(&session.token);
    StatusCode::NO_CONTENT
}
