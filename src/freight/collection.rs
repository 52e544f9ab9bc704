//! Per-step aggregation of freight references keyed by origin.
//!
//! The collection keeps at most one reference per origin. It is built once
//! from the upstream freight selection and then only read while revisions are
//! resolved.

use crate::freight::identity::FreightOrigin;
use crate::freight::model::FreightReference;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<FreightReference>", into = "Vec<FreightReference>")]
/// Freight references keyed by `Kind/name` of their origin.
///
/// Iteration order is the sorted key order, not push order.
pub struct FreightCollection {
    freight: BTreeMap<String, FreightReference>,
}

impl FreightCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a reference, replacing any earlier one from the same origin.
    pub fn update_or_push(&mut self, reference: FreightReference) {
        self.freight.insert(reference.origin.key(), reference);
    }

    /// Fetch the reference for an origin, if present.
    pub fn get(&self, origin: &FreightOrigin) -> Option<&FreightReference> {
        self.freight.get(&origin.key())
    }

    /// All references in stable origin-key order.
    pub fn references(&self) -> impl Iterator<Item = &FreightReference> {
        self.freight.values()
    }

    pub fn len(&self) -> usize {
        self.freight.len()
    }

    pub fn is_empty(&self) -> bool {
        self.freight.is_empty()
    }
}

impl FromIterator<FreightReference> for FreightCollection {
    fn from_iter<I: IntoIterator<Item = FreightReference>>(iter: I) -> Self {
        let mut collection = Self::new();
        for reference in iter {
            collection.update_or_push(reference);
        }
        collection
    }
}

impl From<Vec<FreightReference>> for FreightCollection {
    fn from(references: Vec<FreightReference>) -> Self {
        references.into_iter().collect()
    }
}

impl From<FreightCollection> for Vec<FreightReference> {
    fn from(collection: FreightCollection) -> Self {
        collection.freight.into_values().collect()
    }
}
