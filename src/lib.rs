//! Desired-revision resolution for GitOps promotions.
//!
//! Given an application's declared sources, the operator's update
//! configuration and the freight selected for a promotion step, the crate
//! decides which git commit or chart version each source should run. The
//! computation is pure: no I/O happens outside the config loader and the
//! `desired-revisions` binary.
//!
//! Identity comparison lives in [`SourceKey`]; freight lookup in
//! [`ArtifactIndex`]; declaration matching in [`AppUpdate::match_source`];
//! orchestration in [`desired_revisions`].

pub mod application;
pub mod freight;
pub mod request;
pub mod revisions;
pub mod source_key;
pub mod update;

pub use application::{Application, ApplicationSource, ApplicationSpec};
pub use freight::{
    ArtifactIndex, Chart, FreightCollection, FreightOrigin, FreightReference, GitCommit,
    OriginKind,
};
pub use request::{AppRevisions, ResolutionRequest};
pub use revisions::{desired_revisions, resolve_sources};
pub use source_key::SourceKey;
pub use update::{
    AppUpdate, OriginScope, SourceMatch, SourceUpdate, UpdateConfig, validate_update_config,
};
