use crate::index::{alias_class, resolve_aliases};

/// Render the alias resolution of each resource name, one per line.
pub fn handle_aliases(names: &[String]) -> String {
    let mut output = String::new();
    for name in names {
        match alias_class(name) {
            Some(class) => {
                let groups = resolve_aliases(name);
                output.push_str(&format!("{} [{}]: {}\n", name, class, groups.join(", ")));
            }
            None => output.push_str(&format!("{}: <unmapped>\n", name)),
        }
    }
    output
}
