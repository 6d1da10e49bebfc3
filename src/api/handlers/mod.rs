//! JSON handlers for operational endpoints.

pub mod health;

pub use health::health_handler;
