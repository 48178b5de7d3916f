//! The admin session gate.
//!
//! Admin handlers take an [`AdminSession`] argument; extraction checks the
//! `Authorization: Bearer` token against the session service and rejects
//! the request with `401` (plus a hint at the login route) when the
//! session is missing, unknown, or expired.

use axum::Json;
use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use atelier_app::ports::{
    ContactMailer, MediaStore, ProjectRepository, ServiceRepository, Session, SessionStore,
};
use atelier_app::services::session_service::AuthStatus;

use crate::state::AppState;

/// Route unauthenticated admin requests are pointed at.
pub const LOGIN_ROUTE: &str = "/api/admin/login";

/// A proven admin session, extracted from the bearer token.
pub struct AdminSession(pub Session);

/// `401` response carrying the login route, the JSON counterpart of a
/// browser redirect to the login page.
pub struct GateRejection;

#[derive(Serialize)]
struct RejectionBody {
    error: &'static str,
    login_url: &'static str,
}

impl IntoResponse for GateRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(RejectionBody {
                error: "unauthorized",
                login_url: LOGIN_ROUTE,
            }),
        )
            .into_response()
    }
}

impl<SR, PR, MS, M, S> FromRequestParts<AppState<SR, PR, MS, M, S>> for AdminSession
where
    SR: ServiceRepository + Send + Sync + 'static,
    PR: ProjectRepository + Send + Sync + 'static,
    MS: MediaStore + Send + Sync + 'static,
    M: ContactMailer + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    type Rejection = GateRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<SR, PR, MS, M, S>,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        let Some(token) = token else {
            return Err(GateRejection);
        };

        match state.sessions.authenticate(token) {
            AuthStatus::Authenticated(session) => Ok(Self(session)),
            AuthStatus::Expired | AuthStatus::Unauthenticated => Err(GateRejection),
        }
    }
}
