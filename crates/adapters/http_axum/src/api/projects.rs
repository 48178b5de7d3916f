//! JSON handlers for the public projects endpoints.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use atelier_app::ports::{
    ContactMailer, MediaStore, ProjectRepository, ServiceRepository, SessionStore,
};
use atelier_domain::lang::Language;
use atelier_domain::listing::{ListingFilter, ProjectCard, SortMode};

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters of the listing endpoint.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListingQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    /// Comma-separated tag selection.
    pub tags: Option<String>,
    pub sort: Option<String>,
    pub lang: Option<String>,
}

impl ListingQuery {
    fn into_filter(self) -> ListingFilter {
        ListingFilter {
            search: self.search,
            category: self.category,
            tags: self
                .tags
                .map(|tags| {
                    tags.split(',')
                        .map(str::trim)
                        .filter(|tag| !tag.is_empty())
                        .map(ToString::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            sort: self.sort.as_deref().map(SortMode::from_tag).unwrap_or_default(),
            lang: self.lang.as_deref().map(Language::from_tag).unwrap_or_default(),
        }
    }
}

/// Body of the listing response: the filtered view plus the vocabularies
/// the filter bar offers.
#[derive(Serialize)]
pub struct ListingBody {
    pub projects: Vec<ProjectCard>,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<ListingBody>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<atelier_domain::project::Project>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/projects`
pub async fn list<SR, PR, MS, M, S>(
    State(state): State<AppState<SR, PR, MS, M, S>>,
    Query(query): Query<ListingQuery>,
) -> Result<ListResponse, ApiError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    PR: ProjectRepository + Send + Sync + 'static,
    MS: MediaStore + Send + Sync + 'static,
    M: ContactMailer + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let filter = query.into_filter();
    let view = state.listing.view(&filter).await?;
    Ok(ListResponse::Ok(Json(ListingBody {
        projects: view.cards,
        categories: view.categories,
        tags: view.tags,
    })))
}

/// `GET /api/projects/{slug}`
pub async fn get<SR, PR, MS, M, S>(
    State(state): State<AppState<SR, PR, MS, M, S>>,
    Path(slug): Path<String>,
) -> Result<GetResponse, ApiError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    PR: ProjectRepository + Send + Sync + 'static,
    MS: MediaStore + Send + Sync + 'static,
    M: ContactMailer + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let project = state.projects.get_project_by_slug(&slug).await?;
    Ok(GetResponse::Ok(Json(project)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_split_comma_separated_tags() {
        let query = ListingQuery {
            tags: Some("Rust, Go,,Postgres".to_string()),
            ..ListingQuery::default()
        };
        let filter = query.into_filter();
        assert_eq!(filter.tags, vec!["Rust", "Go", "Postgres"]);
    }

    #[test]
    fn should_default_sort_and_language() {
        let filter = ListingQuery::default().into_filter();
        assert_eq!(filter.sort, SortMode::Newest);
        assert_eq!(filter.lang, Language::En);
    }

    #[test]
    fn should_parse_sort_and_language_tags() {
        let query = ListingQuery {
            sort: Some("alpha".to_string()),
            lang: Some("fr".to_string()),
            ..ListingQuery::default()
        };
        let filter = query.into_filter();
        assert_eq!(filter.sort, SortMode::Alpha);
        assert_eq!(filter.lang, Language::Fr);
    }
}
