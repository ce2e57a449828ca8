//! Resource collection from static match lists.

use crate::framework::{Framework, RuleMatchObjects};
use crate::index::gvk::{KubeResourceResolver, ResourceResolver};
use crate::index::types::{ResourceSet, ResourceTripleSet};

/// Build the set of resources referenced by every rule's static `match`
/// list, resolved with the default resolver.
pub fn build_resource_set(frameworks: &[Framework]) -> ResourceSet {
    build_resource_set_with(frameworks, &KubeResourceResolver)
}

/// Same as [`build_resource_set`] with a caller-supplied resolver.
pub fn build_resource_set_with<R>(frameworks: &[Framework], resolver: &R) -> ResourceSet
where
    R: ResourceResolver + ?Sized,
{
    let triples = collect_static_triples(frameworks);
    let resources = flatten(&triples, resolver);
    log::debug!(
        "Collected {} static triple(s) into {} resource(s) from {} framework(s)",
        triples.len(),
        resources.len(),
        frameworks.len()
    );
    resources
}

/// Walk frameworks, controls, rules and static match entries and collect
/// every (group, version, resource) combination.
pub fn collect_static_triples(frameworks: &[Framework]) -> ResourceTripleSet {
    let mut triples = ResourceTripleSet::new();
    for framework in frameworks {
        for control in &framework.controls {
            for rule in &control.rules {
                for entry in &rule.static_match {
                    insert_resources(&mut triples, entry);
                }
            }
        }
    }
    triples
}

/// Insert the cartesian product of a match entry. An empty list in any
/// position contributes nothing.
pub(crate) fn insert_resources(triples: &mut ResourceTripleSet, entry: &RuleMatchObjects) {
    for_each_triple(entry, |group, version, resource| {
        if triples.insert(group, version, resource) {
            log::trace!("Collected {}/{}/{}", group, version, resource);
        }
    });
}

/// Visit every (group, version, resource) combination of a match entry.
pub(crate) fn for_each_triple<F>(entry: &RuleMatchObjects, mut visit: F)
where
    F: FnMut(&str, &str, &str),
{
    for group in &entry.api_groups {
        for version in &entry.api_versions {
            for resource in &entry.resources {
                visit(group, version, resource);
            }
        }
    }
}

/// Resolve every collected triple to its GVK identifiers.
pub fn flatten<R>(triples: &ResourceTripleSet, resolver: &R) -> ResourceSet
where
    R: ResourceResolver + ?Sized,
{
    let mut resources = ResourceSet::new();
    for triple in triples.iter() {
        for gvk in resolver.resource_group_to_string(&triple.group, &triple.version, &triple.resource)
        {
            resources.insert(gvk);
        }
    }
    resources
}
