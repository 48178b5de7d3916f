//! # atelier-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `atelier-app::ports::storage`
//! - Manage the `SQLite` connection pool lifecycle
//! - Run database migrations (sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `atelier-app` (for port traits) and `atelier-domain` (for domain
//! types). The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod pool;
pub mod project_repo;
pub mod service_repo;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use project_repo::SqliteProjectRepository;
pub use service_repo::SqliteServiceRepository;
