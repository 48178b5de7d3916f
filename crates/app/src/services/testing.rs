//! In-memory port implementations shared by the service unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use atelier_domain::error::AtelierError;
use atelier_domain::id::{ProjectId, ServiceId};
use atelier_domain::project::Project;
use atelier_domain::service::Service;

use crate::ports::{MediaStore, ProjectRepository, ServiceRepository};

#[derive(Default)]
pub(crate) struct InMemoryServiceRepo {
    store: Mutex<HashMap<ServiceId, Service>>,
}

impl ServiceRepository for InMemoryServiceRepo {
    async fn create(&self, service: Service) -> Result<Service, AtelierError> {
        self.store.lock().unwrap().insert(service.id, service.clone());
        Ok(service)
    }

    async fn get_by_id(&self, id: ServiceId) -> Result<Option<Service>, AtelierError> {
        Ok(self.store.lock().unwrap().get(&id).cloned())
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Option<Service>, AtelierError> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .values()
            .find(|s| s.slug == slug)
            .cloned())
    }

    async fn get_all(&self) -> Result<Vec<Service>, AtelierError> {
        Ok(self.store.lock().unwrap().values().cloned().collect())
    }

    async fn update(&self, service: Service) -> Result<Service, AtelierError> {
        self.store.lock().unwrap().insert(service.id, service.clone());
        Ok(service)
    }

    async fn delete(&self, id: ServiceId) -> Result<(), AtelierError> {
        self.store.lock().unwrap().remove(&id);
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct InMemoryProjectRepo {
    store: Mutex<HashMap<ProjectId, Project>>,
}

impl InMemoryProjectRepo {
    /// Insert a project directly, bypassing the use-case layer.
    pub(crate) fn seed(&self, project: Project) {
        self.store.lock().unwrap().insert(project.id, project);
    }
}

impl ProjectRepository for InMemoryProjectRepo {
    async fn create(&self, project: Project) -> Result<Project, AtelierError> {
        self.store.lock().unwrap().insert(project.id, project.clone());
        Ok(project)
    }

    async fn get_by_id(&self, id: ProjectId) -> Result<Option<Project>, AtelierError> {
        Ok(self.store.lock().unwrap().get(&id).cloned())
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Option<Project>, AtelierError> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .values()
            .find(|p| p.slug == slug)
            .cloned())
    }

    async fn get_all(&self) -> Result<Vec<Project>, AtelierError> {
        Ok(self.store.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_service_id(&self, service_id: ServiceId) -> Result<Vec<Project>, AtelierError> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .values()
            .filter(|p| p.service_id == Some(service_id))
            .cloned()
            .collect())
    }

    async fn update(&self, project: Project) -> Result<Project, AtelierError> {
        self.store.lock().unwrap().insert(project.id, project.clone());
        Ok(project)
    }

    async fn delete(&self, id: ProjectId) -> Result<(), AtelierError> {
        self.store.lock().unwrap().remove(&id);
        Ok(())
    }
}

/// Media store recording every call, serving URLs under a fixed base.
#[derive(Default)]
pub(crate) struct RecordingMediaStore {
    pub(crate) stored: Mutex<Vec<(String, String)>>,
    pub(crate) removed: Mutex<Vec<(String, String)>>,
    /// When true, `remove` fails — used to check cleanup stays best-effort.
    pub(crate) fail_removals: bool,
}

impl MediaStore for RecordingMediaStore {
    async fn store(
        &self,
        bucket: &str,
        path: &str,
        _bytes: Vec<u8>,
    ) -> Result<String, AtelierError> {
        self.stored
            .lock()
            .unwrap()
            .push((bucket.to_string(), path.to_string()));
        Ok(self.public_url(bucket, path))
    }

    async fn remove(&self, bucket: &str, path: &str) -> Result<(), AtelierError> {
        if self.fail_removals {
            return Err(AtelierError::Media("removal disabled".into()));
        }
        self.removed
            .lock()
            .unwrap()
            .push((bucket.to_string(), path.to_string()));
        Ok(())
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        format!("https://cdn.test/media/{bucket}/{}", urlencoding::encode(path))
    }
}
