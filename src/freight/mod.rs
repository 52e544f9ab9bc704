//! Freight artifacts and the per-step collection they are looked up in.
//!
//! Types here mirror the controller's freight references. `FreightCollection`
//! holds the step's selection keyed by origin; `ArtifactIndex` is the lookup
//! view the resolver queries with canonical source keys.

pub mod collection;
pub mod identity;
pub mod index;
pub mod model;

pub use collection::FreightCollection;
pub use identity::{FreightOrigin, OriginKind};
pub use index::ArtifactIndex;
pub use model::{Chart, FreightReference, GitCommit};
