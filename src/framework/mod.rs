//! Security framework data model.
//!
//! A framework is a named collection of controls; each control carries
//! rules, and each rule declares the Kubernetes resources it inspects
//! through two match lists:
//!
//! - `match` - static references, only fetched
//! - `dynamicMatch` - special resources (host data, image vulnerabilities,
//!   cloud metadata) whose owning control is also recorded in the
//!   control index
//!
//! Field names follow the upstream rule schema so framework documents can
//! be deserialized directly. Absent or `null` collections become empty.

pub mod parser;

use serde::{Deserialize, Deserializer, Serialize};

/// A named collection of controls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Framework {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub controls: Vec<Control>,
}

/// A single security check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Control {
    #[serde(rename = "controlID", alias = "id", default, deserialize_with = "null_as_default")]
    pub control_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rules: Vec<Rule>,
}

/// A check definition referencing resource kinds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "match", default, deserialize_with = "null_as_default")]
    pub static_match: Vec<RuleMatchObjects>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dynamic_match: Vec<RuleMatchObjects>,
}

/// One match entry. Its resources are the cartesian product
/// `api_groups x api_versions x resources`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleMatchObjects {
    #[serde(default, deserialize_with = "null_as_default")]
    pub api_groups: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub api_versions: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub resources: Vec<String>,
}

impl Framework {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            controls: Vec::new(),
        }
    }

    /// Add a control.
    pub fn with_control(mut self, control: Control) -> Self {
        self.controls.push(control);
        self
    }
}

impl Control {
    pub fn new(control_id: impl Into<String>) -> Self {
        Self {
            control_id: control_id.into(),
            name: String::new(),
            rules: Vec::new(),
        }
    }

    /// Set the human-readable name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Add a rule.
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }
}

impl Rule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            static_match: Vec::new(),
            dynamic_match: Vec::new(),
        }
    }

    /// Add a static match entry.
    pub fn with_match(mut self, entry: RuleMatchObjects) -> Self {
        self.static_match.push(entry);
        self
    }

    /// Add a dynamic match entry.
    pub fn with_dynamic_match(mut self, entry: RuleMatchObjects) -> Self {
        self.dynamic_match.push(entry);
        self
    }
}

impl RuleMatchObjects {
    /// Build a match entry from string slices.
    pub fn new(api_groups: &[&str], api_versions: &[&str], resources: &[&str]) -> Self {
        fn owned(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }
        Self {
            api_groups: owned(api_groups),
            api_versions: owned(api_versions),
            resources: owned(resources),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
