//! # atelier-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **public JSON API** the marketing site renders from
//!   (`/api/services`, `/api/projects`, `/api/contact`)
//! - Serve the **admin JSON API** behind the session gate
//!   (`/api/admin/…`)
//! - Serve uploaded media statically under `/media`
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `atelier-app` (for port traits and services) and
//! `atelier-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod auth;
pub mod error;
pub mod router;
pub mod state;
