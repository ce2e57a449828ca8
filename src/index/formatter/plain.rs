//! Plain text formatter.

use crate::index::{IndexReport, ResourceSet};

/// Format a report as plain text.
pub fn format(report: &IndexReport) -> String {
    let mut output = String::new();

    push_resources(&mut output, "Resources", &report.resources);
    output.push('\n');
    push_resources(&mut output, "Dynamic resources", &report.dynamic_resources);
    output.push('\n');

    output.push_str(&format!("Control index ({}):\n", report.control_index.len()));
    for (gvk, controls) in report.control_index.iter() {
        output.push_str(&format!("  {} -> {}\n", gvk, controls.join(", ")));
    }

    output.push_str(&format!(
        "\nIndexed {} framework(s).\n",
        report.frameworks
    ));
    output
}

fn push_resources(output: &mut String, title: &str, resources: &ResourceSet) {
    output.push_str(&format!("{} ({}):\n", title, resources.len()));
    for gvk in resources.gvks() {
        output.push_str(&format!("  {}\n", gvk));
    }
}
