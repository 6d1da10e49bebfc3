//! Operational HTTP surface shared by all pages.
//!
//! # Modules
//!
//! - [`dto`] - JSON response bodies
//! - [`handlers`] - Health check handler
//! - [`middleware`] - Rate limiting and request tracing

pub mod dto;
pub mod handlers;
pub mod middleware;
