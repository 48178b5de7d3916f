//! Application services — use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod catalog_service;
pub mod contact_service;
pub mod listing_service;
pub mod media_service;
pub mod project_service;
pub mod session_service;

#[cfg(test)]
pub(crate) mod testing;
