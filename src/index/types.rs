//! Core types for the resource index.
//!
//! - `ResourceTriple` - one (API group, API version, resource) combination
//! - `ResourceTripleSet` - the de-duplicated triples collected from rules
//! - `ResourceSet` - resolved GVK identifiers that must be fetched
//! - `ControlIndex` - GVK identifier to the control IDs that consume it

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// One (group, version, resource) combination taken from a match entry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ResourceTriple {
    pub group: String,
    pub version: String,
    pub resource: String,
}

impl ResourceTriple {
    pub fn new(
        group: impl Into<String>,
        version: impl Into<String>,
        resource: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            version: version.into(),
            resource: resource.into(),
        }
    }
}

impl fmt::Display for ResourceTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.group, self.version, self.resource)
    }
}

/// Set of resource triples. Presence is the only information kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceTripleSet {
    triples: BTreeSet<ResourceTriple>,
}

impl ResourceTripleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a triple. Returns `false` if it was already present.
    pub fn insert(&mut self, group: &str, version: &str, resource: &str) -> bool {
        self.triples
            .insert(ResourceTriple::new(group, version, resource))
    }

    pub fn contains(&self, group: &str, version: &str, resource: &str) -> bool {
        self.triples
            .contains(&ResourceTriple::new(group, version, resource))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResourceTriple> {
        self.triples.iter()
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }
}

/// Resolved GVK identifiers that must be fetched from a resource source.
///
/// Every identifier carries a list of entries that a downstream fetcher
/// fills in (for example the IDs of objects it retrieved). The builders
/// leave every list empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceSet {
    resources: BTreeMap<String, Vec<String>>,
}

impl ResourceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an identifier with no entries. Existing entries are kept.
    pub fn insert(&mut self, gvk: impl Into<String>) {
        self.resources.entry(gvk.into()).or_default();
    }

    pub fn contains(&self, gvk: &str) -> bool {
        self.resources.contains_key(gvk)
    }

    /// Entries recorded for an identifier, `None` if it is not in the set.
    pub fn entries(&self, gvk: &str) -> Option<&[String]> {
        self.resources.get(gvk).map(Vec::as_slice)
    }

    /// Record a downstream entry against an identifier, adding the
    /// identifier if needed.
    pub fn record(&mut self, gvk: impl Into<String>, entry: impl Into<String>) {
        self.resources
            .entry(gvk.into())
            .or_default()
            .push(entry.into());
    }

    /// Identifiers in sorted order.
    pub fn gvks(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(String::as_str)
    }

    /// Identifiers with their entries, in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.resources
            .iter()
            .map(|(gvk, entries)| (gvk.as_str(), entries.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ResourceSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for gvk in iter {
            set.insert(gvk);
        }
        set
    }
}

/// Mapping from GVK identifier to the controls that inspect it.
///
/// Control IDs keep the order in which they were first linked and never
/// repeat within one identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ControlIndex {
    controls: BTreeMap<String, Vec<String>>,
}

impl ControlIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `control_id` to the identifier's list unless already there.
    /// Returns `true` if it was appended.
    pub fn link(&mut self, gvk: impl Into<String>, control_id: &str) -> bool {
        let ids = self.controls.entry(gvk.into()).or_default();
        if crate::index::gvk::contains_string(ids, control_id) {
            return false;
        }
        ids.push(control_id.to_string());
        true
    }

    /// Control IDs linked to an identifier.
    pub fn controls_for(&self, gvk: &str) -> Option<&[String]> {
        self.controls.get(gvk).map(Vec::as_slice)
    }

    /// Identifiers a control is linked to, in sorted order.
    pub fn resources_for_control<'a>(&'a self, control_id: &'a str) -> impl Iterator<Item = &'a str> {
        self.controls
            .iter()
            .filter(move |(_, ids)| ids.iter().any(|id| id == control_id))
            .map(|(gvk, _)| gvk.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.controls
            .iter()
            .map(|(gvk, ids)| (gvk.as_str(), ids.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}
