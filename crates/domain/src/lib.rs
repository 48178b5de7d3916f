//! # atelier-domain
//!
//! Pure domain model for the atelier agency content system.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Services** (top-level offerings shown on the marketing site)
//! - Define **Projects** (portfolio case studies belonging to a service)
//! - Bilingual text handling (English/French with English fallback)
//! - The **listing projection**: pure search/category/tag filtering and
//!   sorting over joined project records
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod icon;
pub mod lang;
pub mod listing;
pub mod project;
pub mod service;
pub mod slug;
