//! Web layer for browser-based pages.
//!
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`middleware`] - Login guard
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod middleware;
pub mod routes;
