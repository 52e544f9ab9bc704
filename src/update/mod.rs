//! Update step configuration and source matching.
//!
//! `UpdateConfig` is the operator document; `AppUpdate::match_source` decides
//! which declaration governs a declared source and which origin it may read.

pub mod config;
pub mod matcher;
pub mod schema;

pub use config::{AppUpdate, SourceUpdate, UpdateConfig};
pub use matcher::{OriginScope, SourceMatch};
pub use schema::validate_update_config;
