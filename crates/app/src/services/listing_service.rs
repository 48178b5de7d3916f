//! Listing service — the public portfolio view.
//!
//! Joins projects with their owning service and applies the pure listing
//! projection from the domain crate.

use std::collections::HashMap;

use atelier_domain::error::AtelierError;
use atelier_domain::lang::Language;
use atelier_domain::listing::{self, ListingFilter, ProjectCard};

use crate::ports::{ProjectRepository, ServiceRepository};

/// The filtered view plus the vocabularies the filter bar is built from.
#[derive(Debug, Clone)]
pub struct ListingView {
    pub cards: Vec<ProjectCard>,
    /// Distinct service titles across the *full* set, not just the view.
    pub categories: Vec<String>,
    /// Distinct tags across the full set.
    pub tags: Vec<String>,
}

/// Application service computing the public project listing.
pub struct ListingService<SR, PR> {
    services: SR,
    projects: PR,
}

impl<SR: ServiceRepository, PR: ProjectRepository> ListingService<SR, PR> {
    /// Create a new service backed by the given repositories.
    pub fn new(services: SR, projects: PR) -> Self {
        Self { services, projects }
    }

    /// Join every project with its service title.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repositories.
    pub async fn cards(&self) -> Result<Vec<ProjectCard>, AtelierError> {
        let services = self.services.get_all().await?;
        let titles: HashMap<_, _> = services
            .into_iter()
            .map(|service| (service.id, service.title))
            .collect();

        let projects = self.projects.get_all().await?;
        Ok(projects
            .into_iter()
            .map(|project| {
                let category = project.service_id.and_then(|id| titles.get(&id).cloned());
                ProjectCard { project, category }
            })
            .collect())
    }

    /// Compute the filtered, sorted view plus filter-bar vocabularies.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repositories.
    pub async fn view(&self, filter: &ListingFilter) -> Result<ListingView, AtelierError> {
        let cards = self.cards().await?;
        Ok(ListingView {
            categories: listing::categories(&cards, filter.lang),
            tags: listing::tag_vocabulary(&cards),
            cards: listing::apply(&cards, filter),
        })
    }

    /// Vocabulary of categories for a language, independent of any filter.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repositories.
    pub async fn categories(&self, lang: Language) -> Result<Vec<String>, AtelierError> {
        Ok(listing::categories(&self.cards().await?, lang))
    }
}
