//! # atelier-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ServiceRepository` / `ProjectRepository` — catalog persistence
//!   - `MediaStore` — object storage for uploaded images
//!   - `ContactMailer` — contact-form relay
//!   - `SessionStore` — admin session persistence
//! - Define **use-case services**:
//!   - `CatalogService` / `ProjectService` — admin CRUD over the catalog
//!   - `MediaService` — upload naming and best-effort cleanup
//!   - `ListingService` — the public filtered/sorted portfolio view
//!   - `ContactService` — contact-form validation and relay
//!   - `SessionService` — the admin authentication gate
//! - Provide **in-process infrastructure** (the in-memory session store)
//!   that doesn't need IO
//!
//! ## Dependency rule
//! Depends on `atelier-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
pub mod session_store;
