//! `SQLite` implementation of [`ServiceRepository`].

use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use atelier_app::ports::ServiceRepository;
use atelier_domain::error::AtelierError;
use atelier_domain::icon::Icon;
use atelier_domain::id::ServiceId;
use atelier_domain::lang::LocalizedText;
use atelier_domain::service::Service;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Service`] without
/// polluting domain structs with database concerns.
struct Wrapper(Service);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Service> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let slug: String = row.try_get("slug")?;
        let title_en: String = row.try_get("title_en")?;
        let title_fr: String = row.try_get("title_fr")?;
        let description_en: String = row.try_get("description_en")?;
        let description_fr: String = row.try_get("description_fr")?;
        let tags_json: String = row.try_get("tags")?;
        let icon: String = row.try_get("icon")?;
        let system_load: i64 = row.try_get("system_load")?;
        let created_at_str: String = row.try_get("created_at")?;

        let id = ServiceId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let tags: Vec<String> = serde_json::from_str(&tags_json)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let created_at = chrono::DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?
            .to_utc();
        let system_load =
            u8::try_from(system_load).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Service {
            id,
            slug,
            title: LocalizedText::new(title_en, title_fr),
            description: LocalizedText::new(description_en, description_fr),
            tags,
            // Stored names that no longer parse degrade to Unknown instead
            // of failing the whole read.
            icon: Icon::from_stored(&icon),
            system_load,
            created_at,
        }))
    }
}

const INSERT: &str = "INSERT INTO services (id, slug, title_en, title_fr, description_en, description_fr, tags, icon, system_load, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM services WHERE id = ?";
const SELECT_BY_SLUG: &str = "SELECT * FROM services WHERE slug = ?";
const SELECT_ALL: &str = "SELECT * FROM services ORDER BY created_at";
const UPDATE: &str = "UPDATE services SET slug = ?, title_en = ?, title_fr = ?, description_en = ?, description_fr = ?, tags = ?, icon = ?, system_load = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM services WHERE id = ?";

/// `SQLite`-backed service repository.
pub struct SqliteServiceRepository {
    pool: SqlitePool,
}

impl SqliteServiceRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ServiceRepository for SqliteServiceRepository {
    async fn create(&self, service: Service) -> Result<Service, AtelierError> {
        let tags = serde_json::to_string(&service.tags).map_err(StorageError::from)?;
        sqlx::query(INSERT)
            .bind(service.id.to_string())
            .bind(&service.slug)
            .bind(&service.title.en)
            .bind(&service.title.fr)
            .bind(&service.description.en)
            .bind(&service.description.fr)
            .bind(tags)
            .bind(service.icon.as_str())
            .bind(i64::from(service.system_load))
            .bind(service.created_at.to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(service)
    }

    async fn get_by_id(&self, id: ServiceId) -> Result<Option<Service>, AtelierError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Option<Service>, AtelierError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_SLUG)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn get_all(&self) -> Result<Vec<Service>, AtelierError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn update(&self, service: Service) -> Result<Service, AtelierError> {
        let tags = serde_json::to_string(&service.tags).map_err(StorageError::from)?;
        sqlx::query(UPDATE)
            .bind(&service.slug)
            .bind(&service.title.en)
            .bind(&service.title.fr)
            .bind(&service.description.en)
            .bind(&service.description.fr)
            .bind(tags)
            .bind(service.icon.as_str())
            .bind(i64::from(service.system_load))
            .bind(service.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(service)
    }

    async fn delete(&self, id: ServiceId) -> Result<(), AtelierError> {
        sqlx::query(DELETE_BY_ID)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteServiceRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteServiceRepository::new(db.pool().clone())
    }

    fn test_service(slug: &str) -> Service {
        Service::builder()
            .slug(slug)
            .title(LocalizedText::new("Web platforms", "Plateformes web"))
            .tags(vec!["rust".to_string(), "react".to_string()])
            .icon(Icon::Code)
            .system_load(42)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_and_retrieve_service_when_valid() {
        let repo = setup().await;
        let service = test_service("web");
        let id = service.id;

        repo.create(service).await.unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.id, id);
        assert_eq!(fetched.slug, "web");
        assert_eq!(fetched.title.fr, "Plateformes web");
        assert_eq!(fetched.tags, vec!["rust".to_string(), "react".to_string()]);
        assert_eq!(fetched.icon, Icon::Code);
        assert_eq!(fetched.system_load, 42);
    }

    #[tokio::test]
    async fn should_return_none_when_service_not_found() {
        let repo = setup().await;
        let result = repo.get_by_id(ServiceId::new()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_find_service_by_slug() {
        let repo = setup().await;
        repo.create(test_service("cloud")).await.unwrap();

        let fetched = repo.get_by_slug("cloud").await.unwrap().unwrap();
        assert_eq!(fetched.slug, "cloud");
        assert!(repo.get_by_slug("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_reject_duplicate_slug_at_the_database() {
        let repo = setup().await;
        repo.create(test_service("web")).await.unwrap();

        let result = repo.create(test_service("web")).await;
        assert!(matches!(result, Err(AtelierError::Storage(_))));
    }

    #[tokio::test]
    async fn should_list_all_services() {
        let repo = setup().await;
        repo.create(test_service("web")).await.unwrap();
        repo.create(test_service("cloud")).await.unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn should_update_service_when_exists() {
        let repo = setup().await;
        let mut service = test_service("web");
        let id = service.id;
        repo.create(service.clone()).await.unwrap();

        service.system_load = 90;
        service.icon = Icon::Cloud;
        repo.update(service).await.unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.system_load, 90);
        assert_eq!(fetched.icon, Icon::Cloud);
    }

    #[tokio::test]
    async fn should_delete_service_when_exists() {
        let repo = setup().await;
        let service = test_service("web");
        let id = service.id;
        repo.create(service).await.unwrap();

        repo.delete(id).await.unwrap();

        let result = repo.get_by_id(id).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_degrade_unknown_stored_icon_to_fallback() {
        let repo = setup().await;
        let service = test_service("web");
        let id = service.id;
        repo.create(service).await.unwrap();

        sqlx::query("UPDATE services SET icon = 'sparkles' WHERE id = ?")
            .bind(id.to_string())
            .execute(&repo.pool)
            .await
            .unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.icon, Icon::Unknown);
    }
}
