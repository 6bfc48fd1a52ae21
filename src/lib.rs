#![forbid(unsafe_code)]

//! `runway-views` — view assembly and validation for job-template resources.
//!
//! Projects persisted job-template state into the mappings an API response
//! carries: related-resource links, nested summary fields, and a validated
//! extra-variables blob. Persistence, routing, and permission evaluation
//! are reached through injected collaborator traits and never
//! reimplemented here; every computation is request-scoped and read-only.

pub mod access;
pub mod config;
pub mod errors;
pub mod models;
pub mod query;
pub mod routing;
pub mod serializers;

pub use config::ViewConfig;
pub use errors::{AppError, Result};
