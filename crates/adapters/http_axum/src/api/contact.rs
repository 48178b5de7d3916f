//! JSON handler for the public contact form.

use axum::Json;
use axum::response::{IntoResponse, Response};
use axum::extract::State;
use serde::Serialize;

use atelier_app::ports::{
    ContactMailer, ContactMessage, MediaStore, ProjectRepository, ServiceRepository, SessionStore,
};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct SubmitBody {
    pub success: bool,
    /// Relay payload. The SMTP transport returns nothing useful, so this
    /// stays `null`; the field exists for response-shape stability.
    pub data: Option<serde_json::Value>,
}

/// Possible responses from the submit endpoint.
pub enum SubmitResponse {
    Ok(Json<SubmitBody>),
}

impl IntoResponse for SubmitResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /api/contact`
pub async fn submit<SR, PR, MS, M, S>(
    State(state): State<AppState<SR, PR, MS, M, S>>,
    Json(message): Json<ContactMessage>,
) -> Result<SubmitResponse, ApiError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    PR: ProjectRepository + Send + Sync + 'static,
    MS: MediaStore + Send + Sync + 'static,
    M: ContactMailer + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    state.contact.submit(message).await?;
    Ok(SubmitResponse::Ok(Json(SubmitBody {
        success: true,
        data: None,
    })))
}
