//! JSON formatter.

use crate::index::IndexReport;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Format a report as JSON.
pub fn format(report: &IndexReport) -> String {
    let output = JsonOutput::from(report);
    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    resources: Vec<&'a str>,
    dynamic_resources: Vec<&'a str>,
    control_index: BTreeMap<&'a str, &'a [String]>,
    summary: JsonSummary,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSummary {
    frameworks: usize,
    total_resources: usize,
    linked_resources: usize,
    empty_image_vulns: bool,
}

impl<'a> From<&'a IndexReport> for JsonOutput<'a> {
    fn from(report: &'a IndexReport) -> Self {
        let distinct: BTreeSet<&str> = report
            .resources
            .gvks()
            .chain(report.dynamic_resources.gvks())
            .collect();
        Self {
            resources: report.resources.gvks().collect(),
            dynamic_resources: report.dynamic_resources.gvks().collect(),
            control_index: report.control_index.iter().collect(),
            summary: JsonSummary {
                frameworks: report.frameworks,
                total_resources: distinct.len(),
                linked_resources: report.control_index.len(),
                empty_image_vulns: report.is_empty_image_vulns(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{ControlIndex, ResourceSet};

    #[test]
    fn test_json_shape() {
        let mut control_index = ControlIndex::new();
        control_index.link("eks.amazonaws.com/v1/ClusterDescribe", "C-0067");
        let report = IndexReport {
            resources: ["/v1/pods"].into_iter().collect::<ResourceSet>(),
            dynamic_resources: ["eks.amazonaws.com/v1/ClusterDescribe"].into_iter().collect(),
            control_index,
            frameworks: 2,
        };

        let value: serde_json::Value = serde_json::from_str(&format(&report)).unwrap();
        assert_eq!(value["resources"][0], "/v1/pods");
        assert_eq!(value["dynamicResources"][0], "eks.amazonaws.com/v1/ClusterDescribe");
        assert_eq!(
            value["controlIndex"]["eks.amazonaws.com/v1/ClusterDescribe"][0],
            "C-0067"
        );
        assert_eq!(value["summary"]["totalResources"], 2);
        assert_eq!(value["summary"]["emptyImageVulns"], true);
    }

    #[test]
    fn test_total_counts_shared_identifier_once() {
        let report = IndexReport {
            resources: ["/v1/pods", "apps/v1/deployments"].into_iter().collect::<ResourceSet>(),
            dynamic_resources: ["/v1/pods"].into_iter().collect(),
            control_index: ControlIndex::new(),
            frameworks: 1,
        };

        let value: serde_json::Value = serde_json::from_str(&format(&report)).unwrap();
        assert_eq!(value["summary"]["totalResources"], 2);
    }
}
