//! Control indexing from dynamic match lists.
//!
//! Walks every rule's `dynamicMatch` list, collecting the resources to
//! fetch exactly like the static collector, and links each resource's
//! alias-resolved identifiers back to the owning control.

use std::collections::BTreeSet;

use crate::framework::{Control, Framework};
use crate::index::aliases::resolve_aliases;
use crate::index::collector::{flatten, for_each_triple};
use crate::index::gvk::{KubeResourceResolver, ResourceResolver, split_api_version};
use crate::index::types::{ControlIndex, ResourceSet, ResourceTripleSet};

/// Options for control indexing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexOptions {
    /// Log a warning for every distinct dynamic resource name that has no
    /// alias entry. Such names are skipped either way.
    pub warn_unmapped: bool,
}

/// Build the dynamic resource set and the control index with the default
/// resolver.
pub fn build_control_index(frameworks: &[Framework]) -> (ResourceSet, ControlIndex) {
    build_control_index_with(frameworks, &KubeResourceResolver, IndexOptions::default())
}

/// Same as [`build_control_index`] with a caller-supplied resolver.
pub fn build_control_index_with<R>(
    frameworks: &[Framework],
    resolver: &R,
    options: IndexOptions,
) -> (ResourceSet, ControlIndex)
where
    R: ResourceResolver + ?Sized,
{
    let mut triples = ResourceTripleSet::new();
    let mut index = ControlIndex::new();
    let mut unmapped = BTreeSet::new();

    for framework in frameworks {
        for control in &framework.controls {
            for rule in &control.rules {
                for entry in &rule.dynamic_match {
                    for_each_triple(entry, |group, version, resource| {
                        if triples.insert(group, version, resource) {
                            log::trace!("Collected dynamic {}/{}/{}", group, version, resource);
                        }
                        if !insert_controls(resource, control, resolver, &mut index) {
                            unmapped.insert(resource.to_string());
                        }
                    });
                }
            }
        }
    }

    for resource in &unmapped {
        if options.warn_unmapped {
            log::warn!("Resource '{}' has no known API group mapping; no controls linked", resource);
        } else {
            log::debug!("Resource '{}' has no known API group mapping", resource);
        }
    }

    let resources = flatten(&triples, resolver);
    log::debug!(
        "Indexed {} dynamic resource(s) linked to {} identifier(s) from {} framework(s)",
        resources.len(),
        index.len(),
        frameworks.len()
    );
    (resources, index)
}

/// Link `control` to every alias-resolved identifier of `resource`.
///
/// Returns `false` when the resource has no alias entry.
fn insert_controls<R>(resource: &str, control: &Control, resolver: &R, index: &mut ControlIndex) -> bool
where
    R: ResourceResolver + ?Sized,
{
    let api_versions = resolve_aliases(resource);
    for api_version in &api_versions {
        let (group, version) = split_api_version(api_version);
        let gvk = resolver.join_resource_triplets(group, version, resource);
        if index.link(gvk.as_str(), &control.control_id) {
            log::trace!("Linked {} to {}", control.control_id, gvk);
        }
    }
    !api_versions.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::{Rule, RuleMatchObjects};
    use crate::index::aliases::is_empty_image_vulns;

    fn dynamic_control(id: &str, groups: &[&str], versions: &[&str], resources: &[&str]) -> Control {
        Control::new(id).with_rule(
            Rule::new(format!("{}-rule", id))
                .with_dynamic_match(RuleMatchObjects::new(groups, versions, resources)),
        )
    }

    const HOSTDATA: &str = "hostdata.kubescape.cloud";

    #[test]
    fn test_two_controls_share_hostdata_resource() {
        let frameworks = vec![
            Framework::new("fw")
                .with_control(dynamic_control("C-1", &[HOSTDATA], &["v1beta0"], &["KernelVersion"]))
                .with_control(dynamic_control("C-2", &[HOSTDATA], &["v1beta0"], &["KernelVersion"])),
        ];
        let (resources, index) = build_control_index(&frameworks);
        let gvk = "hostdata.kubescape.cloud/v1beta0/KernelVersion";
        assert!(resources.contains(gvk));
        assert_eq!(
            index.controls_for(gvk).unwrap(),
            &["C-1".to_string(), "C-2".to_string()]
        );
    }

    #[test]
    fn test_same_control_in_many_rules_linked_once() {
        let entry = RuleMatchObjects::new(&[HOSTDATA], &["v1beta0"], &["OpenPortsList"]);
        let control = Control::new("C-7")
            .with_rule(Rule::new("a").with_dynamic_match(entry.clone()))
            .with_rule(Rule::new("b").with_dynamic_match(entry.clone()));
        let frameworks = vec![
            Framework::new("one").with_control(control.clone()),
            Framework::new("two").with_control(control),
        ];
        let (_, index) = build_control_index(&frameworks);
        assert_eq!(
            index
                .controls_for("hostdata.kubescape.cloud/v1beta0/OpenPortsList")
                .unwrap(),
            &["C-7".to_string()]
        );
    }

    #[test]
    fn test_cluster_describe_links_every_provider() {
        let groups = ["container.googleapis.com", "eks.amazonaws.com", "management.azure.com"];
        let frameworks = vec![
            Framework::new("fw").with_control(dynamic_control("C-3", &groups, &["v1"], &["ClusterDescribe"])),
        ];
        let (resources, index) = build_control_index(&frameworks);
        let expected = [
            "container.googleapis.com/v1/ClusterDescribe",
            "eks.amazonaws.com/v1/ClusterDescribe",
            "management.azure.com/v1/ClusterDescribe",
        ];
        assert_eq!(resources.gvks().collect::<Vec<_>>(), expected);
        for gvk in expected {
            assert_eq!(index.controls_for(gvk).unwrap(), &["C-3".to_string()]);
        }
    }

    #[test]
    fn test_linkage_uses_alias_groups_not_match_groups() {
        // Control linkage follows the alias table even when the match entry
        // names a different group.
        let frameworks = vec![
            Framework::new("fw").with_control(dynamic_control("C-4", &["other.io"], &["v9"], &["KernelVersion"])),
        ];
        let (resources, index) = build_control_index(&frameworks);
        assert!(resources.contains("other.io/v9/KernelVersion"));
        assert!(index.controls_for("other.io/v9/KernelVersion").is_none());
        assert!(
            index
                .controls_for("hostdata.kubescape.cloud/v1beta0/KernelVersion")
                .is_some()
        );
    }

    #[test]
    fn test_wildcard_group_reaches_alias_identifier() {
        let frameworks = vec![
            Framework::new("fw").with_control(dynamic_control("C-8", &["*"], &["v1beta0"], &["KernelVersion"])),
        ];
        let (resources, index) = build_control_index(&frameworks);
        let gvk = "hostdata.kubescape.cloud/v1beta0/KernelVersion";
        assert_eq!(resources.gvks().collect::<Vec<_>>(), vec![gvk]);
        assert_eq!(index.controls_for(gvk).unwrap(), &["C-8".to_string()]);
    }

    #[test]
    fn test_unmapped_resource_fetched_but_not_linked() {
        let frameworks = vec![
            Framework::new("fw").with_control(dynamic_control("C-5", &["custom.io"], &["v1"], &["Widget"])),
        ];
        let options = IndexOptions { warn_unmapped: true };
        let (resources, index) = build_control_index_with(&frameworks, &KubeResourceResolver, options);
        assert!(resources.contains("custom.io/v1/Widget"));
        assert!(index.is_empty());
    }

    #[test]
    fn test_static_match_ignored() {
        let rule = Rule::new("r").with_match(RuleMatchObjects::new(&["apps"], &["v1"], &["deployments"]));
        let frameworks = vec![Framework::new("fw").with_control(Control::new("C-1").with_rule(rule))];
        let (resources, index) = build_control_index(&frameworks);
        assert!(resources.is_empty());
        assert!(index.is_empty());
    }

    #[test]
    fn test_image_vulnerabilities_without_scan_entries() {
        let frameworks = vec![Framework::new("fw").with_control(dynamic_control(
            "C-6",
            &["armo.vuln.images", "image.vulnscan.com"],
            &["v1"],
            &["ImageVulnerabilities"],
        ))];
        let (resources, index) = build_control_index(&frameworks);
        assert_eq!(resources.len(), 2);
        assert_eq!(index.len(), 2);
        assert!(is_empty_image_vulns(resources.iter()));
    }

    #[test]
    fn test_empty_input() {
        let (resources, index) = build_control_index(&[]);
        assert!(resources.is_empty());
        assert!(index.is_empty());
    }
}
