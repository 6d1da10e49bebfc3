//! Domain layer containing business entities and data contracts.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`role`] - Organizational roles and the permissions they grant
//!
//! Entities derive `sqlx::FromRow` so persistence can map rows directly;
//! nothing here depends on the web or application layers.

pub mod entities;
pub mod repositories;
pub mod role;

pub use role::{GERENCIA_CAMPUS, Role};
