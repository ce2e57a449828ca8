//! Framework-to-resource indexing.
//!
//! Connects a set of security frameworks to the Kubernetes API resources
//! their rules inspect, and each inspected resource back to the controls
//! that consume it.
//!
//! # Outputs
//!
//! - **Resource set** - GVK identifiers referenced by static `match`
//!   lists, to be fetched from a cluster or other resource source
//! - **Dynamic resource set** - the same for `dynamicMatch` lists
//! - **Control index** - GVK identifier to the ordered, de-duplicated
//!   control IDs that inspect it
//!
//! # Example
//!
//! ```rust
//! use resource_index::framework::{Control, Framework, Rule, RuleMatchObjects};
//! use resource_index::index::{build_control_index, build_resource_set};
//!
//! let rule = Rule::new("deployments")
//!     .with_match(RuleMatchObjects::new(&["apps"], &["v1"], &["deployments"]));
//! let frameworks = vec![Framework::new("demo").with_control(Control::new("C-1").with_rule(rule))];
//!
//! let resources = build_resource_set(&frameworks);
//! assert!(resources.contains("apps/v1/deployments"));
//!
//! let (_dynamic, index) = build_control_index(&frameworks);
//! assert!(index.is_empty());
//! ```

pub mod aliases;
pub mod builtin;
pub mod collector;
pub mod formatter;
pub mod gvk;
pub mod indexer;
pub mod types;

pub use aliases::{AliasClass, alias_class, is_empty_image_vulns, resolve_aliases};
pub use collector::{build_resource_set, build_resource_set_with};
pub use gvk::{KubeResourceResolver, ResourceResolver, join_resource_triplets, split_api_version};
pub use indexer::{IndexOptions, build_control_index, build_control_index_with};
pub use types::{ControlIndex, ResourceSet, ResourceTriple, ResourceTripleSet};

use crate::framework::Framework;

/// Both build outputs for one set of frameworks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexReport {
    /// Resources referenced by static match lists.
    pub resources: ResourceSet,
    /// Resources referenced by dynamic match lists.
    pub dynamic_resources: ResourceSet,
    pub control_index: ControlIndex,
    /// Number of frameworks the report was built from.
    pub frameworks: usize,
}

impl IndexReport {
    /// True when no vulnerability resource has recorded scan entries.
    pub fn is_empty_image_vulns(&self) -> bool {
        is_empty_image_vulns(self.dynamic_resources.iter())
    }
}

/// Builds index reports with a fixed resolver and options.
pub struct ResourceIndexer<R: ResourceResolver = KubeResourceResolver> {
    resolver: R,
    options: IndexOptions,
}

impl<R: ResourceResolver> ResourceIndexer<R> {
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            options: IndexOptions::default(),
        }
    }

    /// Set the indexing options.
    pub fn with_options(mut self, options: IndexOptions) -> Self {
        self.options = options;
        self
    }

    /// Static resource set only.
    pub fn resource_set(&self, frameworks: &[Framework]) -> ResourceSet {
        build_resource_set_with(frameworks, &self.resolver)
    }

    /// Dynamic resource set and control index.
    pub fn control_index(&self, frameworks: &[Framework]) -> (ResourceSet, ControlIndex) {
        build_control_index_with(frameworks, &self.resolver, self.options)
    }

    /// Build every output.
    pub fn build(&self, frameworks: &[Framework]) -> IndexReport {
        let resources = self.resource_set(frameworks);
        let (dynamic_resources, control_index) = self.control_index(frameworks);
        log::info!(
            "Indexed {} framework(s): {} resource(s), {} dynamic resource(s), {} linked identifier(s)",
            frameworks.len(),
            resources.len(),
            dynamic_resources.len(),
            control_index.len()
        );
        IndexReport {
            resources,
            dynamic_resources,
            control_index,
            frameworks: frameworks.len(),
        }
    }
}
