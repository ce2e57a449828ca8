//! Static alias tables for special resources.
//!
//! Dynamic Match rules reference resources that are not served by the
//! Kubernetes API server: host sensor data, cloud provider cluster
//! descriptions and image vulnerability scans. These tables map each
//! such resource name to the API group/version strings it is published
//! under. A name lives in at most one table.

use serde::Serialize;
use std::fmt;

use crate::index::gvk::split_gvk;

pub const CLUSTER_DESCRIBE: &str = "ClusterDescribe";
pub const KUBELET_CONFIGURATION: &str = "KubeletConfiguration";
pub const OS_RELEASE_FILE: &str = "OsReleaseFile";
pub const KERNEL_VERSION: &str = "KernelVersion";
pub const LINUX_SECURITY_HARDENING_STATUS: &str = "LinuxSecurityHardeningStatus";
pub const OPEN_PORTS_LIST: &str = "OpenPortsList";
pub const LINUX_KERNEL_VARIABLES: &str = "LinuxKernelVariables";
pub const KUBELET_COMMAND_LINE: &str = "KubeletCommandLine";
pub const IMAGE_VULNERABILITIES: &str = "ImageVulnerabilities";

const HOST_DATA_GROUP: &str = "hostdata.kubescape.cloud/v1beta0";

/// Resources published under exactly one group/version.
static SINGLE_GROUP_TABLE: &[(&str, &str)] = &[
    (KUBELET_CONFIGURATION, HOST_DATA_GROUP),
    (OS_RELEASE_FILE, HOST_DATA_GROUP),
    (KUBELET_COMMAND_LINE, HOST_DATA_GROUP),
    (KERNEL_VERSION, HOST_DATA_GROUP),
    (LINUX_SECURITY_HARDENING_STATUS, HOST_DATA_GROUP),
    (OPEN_PORTS_LIST, HOST_DATA_GROUP),
    (LINUX_KERNEL_VARIABLES, HOST_DATA_GROUP),
];

/// Cluster provider metadata. Order is GKE, EKS, AKS.
static CLOUD_GROUP_TABLE: &[(&str, &[&str])] = &[(
    CLUSTER_DESCRIBE,
    &[
        "container.googleapis.com/v1",
        "eks.amazonaws.com/v1",
        "management.azure.com/v1",
    ],
)];

/// Image vulnerability scan results.
static VULNERABILITY_GROUP_TABLE: &[(&str, &[&str])] = &[(
    IMAGE_VULNERABILITIES,
    &["armo.vuln.images/v1", "image.vulnscan.com/v1"],
)];

/// Which alias table a resource name belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AliasClass {
    /// Host sensor data (single-group table)
    HostData,
    /// Cloud provider cluster metadata
    Cloud,
    /// Image vulnerability scans
    Vulnerability,
}

impl AliasClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HostData => "host-data",
            Self::Cloud => "cloud",
            Self::Vulnerability => "vulnerability",
        }
    }
}

impl fmt::Display for AliasClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

type SingleTable = &'static [(&'static str, &'static str)];
type ManyTable = &'static [(&'static str, &'static [&'static str])];

/// The three alias tables, consulted in declaration order.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AliasTables {
    single: SingleTable,
    cloud: ManyTable,
    vulnerability: ManyTable,
}

static ALIAS_TABLES: AliasTables = AliasTables {
    single: SINGLE_GROUP_TABLE,
    cloud: CLOUD_GROUP_TABLE,
    vulnerability: VULNERABILITY_GROUP_TABLE,
};

fn lookup_many(table: ManyTable, resource: &str) -> Option<&'static [&'static str]> {
    table
        .iter()
        .find(|(name, _)| *name == resource)
        .map(|(_, groups)| *groups)
}

impl AliasTables {
    fn lookup_single(&self, resource: &str) -> Option<&'static str> {
        self.single
            .iter()
            .find(|(name, _)| *name == resource)
            .map(|(_, group)| *group)
    }

    /// Table class and group/version strings of the first table holding
    /// `resource`.
    fn lookup(&self, resource: &str) -> Option<(AliasClass, Vec<&'static str>)> {
        if let Some(group) = self.lookup_single(resource) {
            return Some((AliasClass::HostData, vec![group]));
        }
        if let Some(groups) = lookup_many(self.cloud, resource) {
            return Some((AliasClass::Cloud, groups.to_vec()));
        }
        lookup_many(self.vulnerability, resource)
            .map(|groups| (AliasClass::Vulnerability, groups.to_vec()))
    }

    pub(crate) fn resolve(&self, resource: &str) -> Vec<&'static str> {
        self.lookup(resource)
            .map(|(_, groups)| groups)
            .unwrap_or_default()
    }

    pub(crate) fn class(&self, resource: &str) -> Option<AliasClass> {
        self.lookup(resource).map(|(class, _)| class)
    }
}

/// Classify a resource name by the alias table it belongs to.
pub fn alias_class(resource: &str) -> Option<AliasClass> {
    ALIAS_TABLES.class(resource)
}

/// Resolve a resource name to the group/version strings it is served
/// under.
///
/// Tables are consulted single-group, then cloud, then vulnerability; the
/// first hit wins and keeps its declared order. Unknown names resolve to
/// an empty list.
pub fn resolve_aliases(resource: &str) -> Vec<&'static str> {
    ALIAS_TABLES.resolve(resource)
}

/// Whether a GVK identifier names an image vulnerability resource.
pub fn is_vulnerability_gvk(gvk: &str) -> bool {
    split_gvk(gvk)
        .is_some_and(|(_, _, resource)| alias_class(resource) == Some(AliasClass::Vulnerability))
}

/// True when no vulnerability resource has any recorded entry.
///
/// Takes any (identifier, entries) view, such as `ResourceSet::iter()`.
/// Absent vulnerability resources and empty entry lists both count as
/// empty; the first vulnerability resource with an entry returns false.
pub fn is_empty_image_vulns<'a, I>(resources: I) -> bool
where
    I: IntoIterator<Item = (&'a str, &'a [String])>,
{
    !resources
        .into_iter()
        .any(|(gvk, entries)| is_vulnerability_gvk(gvk) && !entries.is_empty())
}
