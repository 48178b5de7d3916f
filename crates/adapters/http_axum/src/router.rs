//! Axum router assembly.

use std::path::Path;

use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use atelier_app::ports::{
    ContactMailer, MediaStore, ProjectRepository, ServiceRepository, SessionStore,
};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api` and serves uploaded images from
/// `media_root` under `/media`. Includes a [`TraceLayer`] that logs each
/// HTTP request/response at the `DEBUG` level using the `tracing`
/// ecosystem.
pub fn build<SR, PR, MS, M, S>(
    state: AppState<SR, PR, MS, M, S>,
    media_root: impl AsRef<Path>,
) -> Router
where
    SR: ServiceRepository + Send + Sync + 'static,
    PR: ProjectRepository + Send + Sync + 'static,
    MS: MediaStore + Send + Sync + 'static,
    M: ContactMailer + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .nest_service("/media", ServeDir::new(media_root))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use atelier_app::ports::ContactMessage;
    use atelier_app::services::catalog_service::CatalogService;
    use atelier_app::services::contact_service::ContactService;
    use atelier_app::services::listing_service::ListingService;
    use atelier_app::services::media_service::MediaService;
    use atelier_app::services::project_service::ProjectService;
    use atelier_app::services::session_service::SessionService;
    use atelier_app::session_store::InMemorySessionStore;
    use atelier_domain::error::AtelierError;
    use atelier_domain::id::{ProjectId, ServiceId};
    use atelier_domain::project::Project;
    use atelier_domain::service::Service;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use chrono::Duration;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    struct StubServiceRepo;
    struct StubProjectRepo;
    struct StubMediaStore;
    struct StubMailer;

    impl atelier_app::ports::ServiceRepository for StubServiceRepo {
        async fn create(&self, service: Service) -> Result<Service, AtelierError> {
            Ok(service)
        }
        async fn get_by_id(&self, _id: ServiceId) -> Result<Option<Service>, AtelierError> {
            Ok(None)
        }
        async fn get_by_slug(&self, _slug: &str) -> Result<Option<Service>, AtelierError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<Service>, AtelierError> {
            Ok(vec![])
        }
        async fn update(&self, service: Service) -> Result<Service, AtelierError> {
            Ok(service)
        }
        async fn delete(&self, _id: ServiceId) -> Result<(), AtelierError> {
            Ok(())
        }
    }

    impl atelier_app::ports::ProjectRepository for StubProjectRepo {
        async fn create(&self, project: Project) -> Result<Project, AtelierError> {
            Ok(project)
        }
        async fn get_by_id(&self, _id: ProjectId) -> Result<Option<Project>, AtelierError> {
            Ok(None)
        }
        async fn get_by_slug(&self, _slug: &str) -> Result<Option<Project>, AtelierError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<Project>, AtelierError> {
            Ok(vec![])
        }
        async fn find_by_service_id(
            &self,
            _service_id: ServiceId,
        ) -> Result<Vec<Project>, AtelierError> {
            Ok(vec![])
        }
        async fn update(&self, project: Project) -> Result<Project, AtelierError> {
            Ok(project)
        }
        async fn delete(&self, _id: ProjectId) -> Result<(), AtelierError> {
            Ok(())
        }
    }

    impl atelier_app::ports::MediaStore for StubMediaStore {
        async fn store(
            &self,
            bucket: &str,
            path: &str,
            _bytes: Vec<u8>,
        ) -> Result<String, AtelierError> {
            Ok(self.public_url(bucket, path))
        }
        async fn remove(&self, _bucket: &str, _path: &str) -> Result<(), AtelierError> {
            Ok(())
        }
        fn public_url(&self, bucket: &str, path: &str) -> String {
            format!("http://localhost/media/{bucket}/{path}")
        }
    }

    impl atelier_app::ports::ContactMailer for StubMailer {
        async fn send(&self, _message: &ContactMessage) -> Result<(), AtelierError> {
            Ok(())
        }
    }

    struct FailingMailer;

    impl atelier_app::ports::ContactMailer for FailingMailer {
        async fn send(&self, _message: &ContactMessage) -> Result<(), AtelierError> {
            Err(AtelierError::Mail("connection refused".into()))
        }
    }

    fn test_state() -> AppState<
        StubServiceRepo,
        StubProjectRepo,
        StubMediaStore,
        StubMailer,
        InMemorySessionStore,
    > {
        AppState::new(
            CatalogService::new(StubServiceRepo, StubProjectRepo),
            ProjectService::new(StubProjectRepo, MediaService::new(StubMediaStore), "projects"),
            ListingService::new(StubServiceRepo, StubProjectRepo),
            MediaService::new(StubMediaStore),
            ContactService::new(StubMailer),
            SessionService::new(InMemorySessionStore::new(), "hunter2", Duration::hours(8)),
        )
    }

    fn app() -> Router {
        build(test_state(), std::env::temp_dir())
    }

    async fn body_json(body: Body) -> serde_json::Value {
        let bytes = body.collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_list_empty_services() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/services")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response.into_body()).await;
        assert_eq!(json, serde_json::json!([]));
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_project_slug() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/projects/nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_return_listing_with_vocabularies() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/projects?sort=alpha&lang=fr")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response.into_body()).await;
        assert_eq!(
            json,
            serde_json::json!({ "projects": [], "categories": [], "tags": [] })
        );
    }

    #[tokio::test]
    async fn should_reject_contact_message_without_name() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/contact")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"name":"","email":"ada@example.com","message":"hi"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_relay_valid_contact_message() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/contact")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"name":"Ada","email":"ada@example.com","type":"project","message":"hi"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response.into_body()).await;
        assert_eq!(json, serde_json::json!({ "success": true, "data": null }));
    }

    #[tokio::test]
    async fn should_report_server_error_when_relay_fails() {
        let state = AppState::new(
            CatalogService::new(StubServiceRepo, StubProjectRepo),
            ProjectService::new(StubProjectRepo, MediaService::new(StubMediaStore), "projects"),
            ListingService::new(StubServiceRepo, StubProjectRepo),
            MediaService::new(StubMediaStore),
            ContactService::new(FailingMailer),
            SessionService::new(InMemorySessionStore::new(), "hunter2", Duration::hours(8)),
        );

        let response = build(state, std::env::temp_dir())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/contact")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"name":"Ada","email":"ada@example.com","type":"project","message":"hi"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response.into_body()).await;
        assert_eq!(json["error"], "failed to relay message");
    }

    #[tokio::test]
    async fn should_reject_admin_request_without_token() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/admin/services")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let json = body_json(response.into_body()).await;
        assert_eq!(json["login_url"], "/api/admin/login");
    }

    #[tokio::test]
    async fn should_reject_login_with_wrong_password() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/admin/login")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"password":"letmein"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn should_admit_admin_with_fresh_session() {
        let app = app();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/admin/login")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"password":"hunter2"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response.into_body()).await;
        let token = json["token"].as_str().unwrap().to_string();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/admin/services")
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_revoke_session_on_logout() {
        let app = app();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/admin/login")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"password":"hunter2"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        let json = body_json(response.into_body()).await;
        let token = json["token"].as_str().unwrap().to_string();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/admin/logout")
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/admin/projects")
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn should_reject_service_payload_with_unknown_icon() {
        let app = app();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/admin/login")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"password":"hunter2"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        let json = body_json(response.into_body()).await;
        let token = json["token"].as_str().unwrap().to_string();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/admin/services")
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"slug":"web","title":{"en":"Web","fr":""},"icon":"sparkles"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_upload_image_and_return_public_url() {
        let app = app();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/admin/login")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"password":"hunter2"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        let json = body_json(response.into_body()).await;
        let token = json["token"].as_str().unwrap().to_string();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/admin/media/projects?filename=shot.png")
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .body(Body::from(vec![0u8, 1, 2]))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response.into_body()).await;
        let url = json["url"].as_str().unwrap();
        assert!(url.starts_with("http://localhost/media/projects/"));
        assert!(url.ends_with(".png"));
    }
}
