//! Indexed view of a freight collection keyed by canonical repository identity.
//!
//! The index is built once per resolution from an immutable collection and
//! answers "which revision does this origin (or any origin) carry for this
//! repository?". Misses are `None`, never errors.

use crate::freight::collection::FreightCollection;
use crate::freight::identity::FreightOrigin;
use crate::source_key::SourceKey;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

#[derive(Debug)]
struct OriginArtifacts<'a> {
    origin: &'a FreightOrigin,
    charts: BTreeMap<SourceKey, &'a str>,
    commits: BTreeMap<SourceKey, &'a str>,
}

#[derive(Debug)]
/// Chart versions and commit ids of every origin, in collection order.
pub struct ArtifactIndex<'a> {
    origins: Vec<OriginArtifacts<'a>>,
}

impl<'a> ArtifactIndex<'a> {
    /// Index every reference in the collection.
    ///
    /// Artifacts without a usable repository coordinate are skipped. When a
    /// reference repeats a key, the first artifact in its list wins.
    pub fn build(collection: &'a FreightCollection) -> Self {
        let origins = collection
            .references()
            .map(|reference| {
                let mut charts = BTreeMap::new();
                for chart in &reference.charts {
                    if let Some(key) = SourceKey::for_chart(chart) {
                        insert_first(&mut charts, key, chart.version.as_str());
                    }
                }
                let mut commits = BTreeMap::new();
                for commit in &reference.commits {
                    if let Some(key) = SourceKey::for_commit(commit) {
                        insert_first(&mut commits, key, commit.id.as_str());
                    }
                }
                OriginArtifacts {
                    origin: &reference.origin,
                    charts,
                    commits,
                }
            })
            .collect();
        Self { origins }
    }

    /// Find the revision for `key`.
    ///
    /// With an origin only that origin's reference is consulted; an origin
    /// missing from the collection is a miss. Without one every origin is
    /// scanned in collection order and the first hit wins, even if a later
    /// origin carries a different revision for the same repository.
    pub fn lookup(&self, origin: Option<&FreightOrigin>, key: &SourceKey) -> Option<&'a str> {
        match origin {
            Some(origin) => self
                .origins
                .iter()
                .find(|entry| entry.origin == origin)
                .and_then(|entry| entry.revision(key)),
            None => self.origins.iter().find_map(|entry| entry.revision(key)),
        }
    }
}

impl<'a> OriginArtifacts<'a> {
    fn revision(&self, key: &SourceKey) -> Option<&'a str> {
        let artifacts = if key.is_chart() {
            &self.charts
        } else {
            &self.commits
        };
        artifacts.get(key).copied()
    }
}

fn insert_first<'a>(map: &mut BTreeMap<SourceKey, &'a str>, key: SourceKey, revision: &'a str) {
    if let Entry::Vacant(slot) = map.entry(key) {
        slot.insert(revision);
    }
}
