//! `SQLite` implementation of [`ProjectRepository`].

use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use atelier_app::ports::ProjectRepository;
use atelier_domain::error::AtelierError;
use atelier_domain::id::{ProjectId, ServiceId};
use atelier_domain::lang::LocalizedText;
use atelier_domain::project::Project;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Project`].
struct Wrapper(Project);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Project> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let slug: String = row.try_get("slug")?;
        let name_en: String = row.try_get("name_en")?;
        let name_fr: String = row.try_get("name_fr")?;
        let description_en: String = row.try_get("description_en")?;
        let description_fr: String = row.try_get("description_fr")?;
        let long_description_en: String = row.try_get("long_description_en")?;
        let long_description_fr: String = row.try_get("long_description_fr")?;
        let image_url: String = row.try_get("image_url")?;
        let gallery_json: String = row.try_get("gallery")?;
        let video_url: Option<String> = row.try_get("video_url")?;
        let demo_url: Option<String> = row.try_get("demo_url")?;
        let repo_url: Option<String> = row.try_get("repo_url")?;
        let tags_json: String = row.try_get("tags")?;
        let service_id: Option<String> = row.try_get("service_id")?;
        let created_at_str: String = row.try_get("created_at")?;
        let sort_order: Option<i64> = row.try_get("sort_order")?;

        let id = ProjectId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let service_id = service_id
            .map(|s| ServiceId::from_str(&s))
            .transpose()
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let gallery: Vec<String> = serde_json::from_str(&gallery_json)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let tags: Vec<String> = serde_json::from_str(&tags_json)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let created_at = chrono::DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?
            .to_utc();

        Ok(Self(Project {
            id,
            slug,
            name: LocalizedText::new(name_en, name_fr),
            description: LocalizedText::new(description_en, description_fr),
            long_description: LocalizedText::new(long_description_en, long_description_fr),
            image_url,
            gallery,
            video_url,
            demo_url,
            repo_url,
            tags,
            service_id,
            created_at,
            sort_order,
        }))
    }
}

const INSERT: &str = "INSERT INTO projects (id, slug, name_en, name_fr, description_en, description_fr, long_description_en, long_description_fr, image_url, gallery, video_url, demo_url, repo_url, tags, service_id, created_at, sort_order) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM projects WHERE id = ?";
const SELECT_BY_SLUG: &str = "SELECT * FROM projects WHERE slug = ?";
const SELECT_ALL: &str = "SELECT * FROM projects ORDER BY created_at";
const SELECT_BY_SERVICE: &str = "SELECT * FROM projects WHERE service_id = ?";
const UPDATE: &str = "UPDATE projects SET slug = ?, name_en = ?, name_fr = ?, description_en = ?, description_fr = ?, long_description_en = ?, long_description_fr = ?, image_url = ?, gallery = ?, video_url = ?, demo_url = ?, repo_url = ?, tags = ?, service_id = ?, sort_order = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM projects WHERE id = ?";

/// `SQLite`-backed project repository.
pub struct SqliteProjectRepository {
    pool: SqlitePool,
}

impl SqliteProjectRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ProjectRepository for SqliteProjectRepository {
    async fn create(&self, project: Project) -> Result<Project, AtelierError> {
        let gallery = serde_json::to_string(&project.gallery).map_err(StorageError::from)?;
        let tags = serde_json::to_string(&project.tags).map_err(StorageError::from)?;
        sqlx::query(INSERT)
            .bind(project.id.to_string())
            .bind(&project.slug)
            .bind(&project.name.en)
            .bind(&project.name.fr)
            .bind(&project.description.en)
            .bind(&project.description.fr)
            .bind(&project.long_description.en)
            .bind(&project.long_description.fr)
            .bind(&project.image_url)
            .bind(gallery)
            .bind(project.video_url.as_deref())
            .bind(project.demo_url.as_deref())
            .bind(project.repo_url.as_deref())
            .bind(tags)
            .bind(project.service_id.map(|id| id.to_string()))
            .bind(project.created_at.to_rfc3339())
            .bind(project.sort_order)
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(project)
    }

    async fn get_by_id(&self, id: ProjectId) -> Result<Option<Project>, AtelierError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Option<Project>, AtelierError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_SLUG)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn get_all(&self) -> Result<Vec<Project>, AtelierError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn find_by_service_id(&self, service_id: ServiceId) -> Result<Vec<Project>, AtelierError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_SERVICE)
            .bind(service_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn update(&self, project: Project) -> Result<Project, AtelierError> {
        let gallery = serde_json::to_string(&project.gallery).map_err(StorageError::from)?;
        let tags = serde_json::to_string(&project.tags).map_err(StorageError::from)?;
        sqlx::query(UPDATE)
            .bind(&project.slug)
            .bind(&project.name.en)
            .bind(&project.name.fr)
            .bind(&project.description.en)
            .bind(&project.description.fr)
            .bind(&project.long_description.en)
            .bind(&project.long_description.fr)
            .bind(&project.image_url)
            .bind(gallery)
            .bind(project.video_url.as_deref())
            .bind(project.demo_url.as_deref())
            .bind(project.repo_url.as_deref())
            .bind(tags)
            .bind(project.service_id.map(|id| id.to_string()))
            .bind(project.sort_order)
            .bind(project.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(project)
    }

    async fn delete(&self, id: ProjectId) -> Result<(), AtelierError> {
        sqlx::query(DELETE_BY_ID)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(())
    }
}
