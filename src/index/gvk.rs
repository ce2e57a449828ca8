//! GVK identifier helpers and the resource resolver contract.
//!
//! A GVK identifier is the string `"{group}/{version}/{resource}"`; the
//! core API group is the empty string, so pods are `"/v1/pods"`.

use crate::index::aliases;
use crate::index::builtin::{self, BuiltinResource};

/// Match-list value meaning "any".
pub const WILDCARD: &str = "*";

/// Resolves rule triples to concrete GVK identifiers.
///
/// The index builders only depend on this trait, so callers with their
/// own discovery data (for example a live cluster's API resource list)
/// can supply it.
pub trait ResourceResolver {
    /// Resolve a (group, version, resource) triple from a match entry
    /// into zero or more concrete GVK identifiers.
    fn resource_group_to_string(&self, group: &str, version: &str, resource: &str) -> Vec<String>;

    /// Build the canonical identifier for a concrete triple.
    fn join_resource_triplets(&self, group: &str, version: &str, resource: &str) -> String {
        join_resource_triplets(group, version, resource)
    }
}

/// Default resolver backed by the built-in Kubernetes resource table.
///
/// - `*` in any position matches anything
/// - kinds and plural names of built-in resources are normalized to the
///   plural path name (`Deployment` -> `deployments`)
/// - other resource names are kept verbatim
/// - a fully concrete triple yields exactly one identifier
/// - an aliased resource with a wildcard group or version expands over
///   its alias group/versions that match the concrete positions
/// - anything else yields one identifier per matching built-in resource
#[derive(Debug, Clone, Copy, Default)]
pub struct KubeResourceResolver;

impl KubeResourceResolver {
    pub fn new() -> Self {
        Self
    }
}

impl ResourceResolver for KubeResourceResolver {
    fn resource_group_to_string(&self, group: &str, version: &str, resource: &str) -> Vec<String> {
        let group = concrete(group);
        let version = concrete(version);
        let resource = concrete(resource).map(|r| builtin::normalize_resource(r).unwrap_or(r));

        if let (Some(g), Some(v), Some(r)) = (group, version, resource) {
            return vec![join_resource_triplets(g, v, r)];
        }

        if let Some(r) = resource {
            let aliased = aliases::resolve_aliases(r);
            if !aliased.is_empty() {
                return aliased
                    .into_iter()
                    .map(split_api_version)
                    .filter(|(g, v)| {
                        group.is_none_or(|want| want == *g)
                            && version.is_none_or(|want| want == *v)
                    })
                    .map(|(g, v)| join_resource_triplets(g, v, r))
                    .collect();
            }
        }

        let matches = |b: &&BuiltinResource| {
            group.is_none_or(|g| b.group == g)
                && version.is_none_or(|v| b.version == v)
                && resource.is_none_or(|r| b.resource == r)
        };
        builtin::builtin_resources()
            .iter()
            .filter(matches)
            .map(|b| join_resource_triplets(b.group, b.version, b.resource))
            .collect()
    }
}

fn concrete(value: &str) -> Option<&str> {
    (value != WILDCARD).then_some(value)
}

/// Join a concrete triple into a GVK identifier.
pub fn join_resource_triplets(group: &str, version: &str, resource: &str) -> String {
    format!("{}/{}/{}", group, version, resource)
}

/// Split an `apiVersion` string into (group, version).
///
/// Splits once on `/`. Without a separator the whole string is the group.
/// Never fails: `""` gives `("", "")`.
pub fn split_api_version(api_version: &str) -> (&str, &str) {
    api_version.split_once('/').unwrap_or((api_version, ""))
}

/// Split a GVK identifier into (group, version, resource).
///
/// Returns `None` if the identifier does not have three components.
pub fn split_gvk(gvk: &str) -> Option<(&str, &str, &str)> {
    let (group, rest) = gvk.split_once('/')?;
    let (version, resource) = rest.split_once('/')?;
    Some((group, version, resource))
}

/// Membership test used for control-ID de-duplication.
pub fn contains_string(list: &[String], value: &str) -> bool {
    list.iter().any(|item| item == value)
}
