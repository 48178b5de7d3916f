//! Listing projection — pure filtering and sorting over joined project records.
//!
//! The public portfolio page drives three independent facets (free-text
//! search, category, tag selection) plus a sort mode. Everything here is a
//! pure function of the full record set and the current filter; views are
//! re-derived on every call instead of cached (N stays small).

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::lang::{Language, LocalizedText};
use crate::project::Project;

/// A project joined with the title of its owning service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectCard {
    pub project: Project,
    /// Title of the owning service, when the project has one.
    pub category: Option<LocalizedText>,
}

impl ProjectCard {
    /// Case-insensitive substring match against name, description, or any tag.
    #[must_use]
    pub fn matches_search(&self, needle: &str, lang: Language) -> bool {
        let needle = needle.to_lowercase();
        self.project
            .name
            .get(lang)
            .to_lowercase()
            .contains(&needle)
            || self
                .project
                .description
                .get(lang)
                .to_lowercase()
                .contains(&needle)
            || self
                .project
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
    }

    /// Exact match against the joined service title for `lang`.
    #[must_use]
    pub fn matches_category(&self, category: &str, lang: Language) -> bool {
        self.category
            .as_ref()
            .is_some_and(|title| title.get(lang) == category)
    }

    /// OR semantics: true when the project carries at least one selected tag.
    /// An empty selection is a no-op and passes everything.
    #[must_use]
    pub fn matches_tags(&self, selected: &[String]) -> bool {
        selected.is_empty() || self.project.tags.iter().any(|tag| selected.contains(tag))
    }
}

/// Ordering applied to the filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Most recent first. Explicit `sort_order` overrides rank first.
    #[default]
    Newest,
    /// Exact reverse of [`SortMode::Newest`].
    Oldest,
    /// Case-insensitive alphabetical by localized name.
    Alpha,
}

impl SortMode {
    /// Parse a query-string value, defaulting to newest-first.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "oldest" => Self::Oldest,
            "alpha" => Self::Alpha,
            _ => Self::Newest,
        }
    }
}

/// The full filter state of the listing page.
#[derive(Debug, Clone, Default)]
pub struct ListingFilter {
    /// Free-text search; empty or absent is a no-op.
    pub search: Option<String>,
    /// Category selection; absent or `"All"` passes everything.
    pub category: Option<String>,
    /// Selected tags (OR semantics); empty is a no-op.
    pub tags: Vec<String>,
    pub sort: SortMode,
    pub lang: Language,
}

impl ListingFilter {
    fn accepts(&self, card: &ProjectCard) -> bool {
        if let Some(search) = self.search.as_deref()
            && !search.is_empty()
            && !card.matches_search(search, self.lang)
        {
            return false;
        }
        if let Some(category) = self.category.as_deref()
            && category != "All"
            && !card.matches_category(category, self.lang)
        {
            return false;
        }
        card.matches_tags(&self.tags)
    }
}

/// Compute the filtered, sorted view for the current filter state.
#[must_use]
pub fn apply(cards: &[ProjectCard], filter: &ListingFilter) -> Vec<ProjectCard> {
    let mut view: Vec<ProjectCard> = cards
        .iter()
        .filter(|card| filter.accepts(card))
        .cloned()
        .collect();

    match filter.sort {
        SortMode::Newest => view.sort_by(compare_newest),
        SortMode::Oldest => view.sort_by(|a, b| compare_newest(a, b).reverse()),
        SortMode::Alpha => {
            let lang = filter.lang;
            view.sort_by(|a, b| compare_alpha(a, b, lang));
        }
    }
    view
}

/// Newest-first ordering. Records with an explicit `sort_order` rank ahead
/// of timestamp-ordered records, lower values first. The slug breaks ties
/// so the ordering is total.
fn compare_newest(a: &ProjectCard, b: &ProjectCard) -> Ordering {
    let rank = |card: &ProjectCard| card.project.sort_order.unwrap_or(i64::MAX);
    rank(a)
        .cmp(&rank(b))
        .then_with(|| b.project.created_at.cmp(&a.project.created_at))
        .then_with(|| a.project.slug.cmp(&b.project.slug))
}

/// Case-insensitive alphabetical ordering by localized name, made total by
/// falling back to the raw name and then the slug.
///
/// Comparison is a lowercase fold over Unicode code points, not a locale
/// collation: names starting with an accented letter ("École") sort after
/// the ASCII range ("Zebra"). Proper French collation would need an ICU
/// collator; current catalog names make that not worth the dependency.
fn compare_alpha(a: &ProjectCard, b: &ProjectCard, lang: Language) -> Ordering {
    let left = a.project.name.get(lang);
    let right = b.project.name.get(lang);
    left.to_lowercase()
        .cmp(&right.to_lowercase())
        .then_with(|| left.cmp(right))
        .then_with(|| a.project.slug.cmp(&b.project.slug))
}

/// Distinct category titles (service titles) present in the full set,
/// sorted for stable display.
#[must_use]
pub fn categories(cards: &[ProjectCard], lang: Language) -> Vec<String> {
    let mut titles: Vec<String> = cards
        .iter()
        .filter_map(|card| card.category.as_ref())
        .map(|title| title.get(lang).to_string())
        .collect();
    titles.sort();
    titles.dedup();
    titles
}

/// The full tag vocabulary across the set, sorted and de-duplicated.
#[must_use]
pub fn tag_vocabulary(cards: &[ProjectCard]) -> Vec<String> {
    let mut tags: Vec<String> = cards
        .iter()
        .flat_map(|card| card.project.tags.iter().cloned())
        .collect();
    tags.sort();
    tags.dedup();
    tags
}
