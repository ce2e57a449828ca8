//! Framework document loading.
//!
//! A document holds either one framework object or an array of them, in
//! JSON (`.json`) or YAML (`.yaml` / `.yml`).

use crate::error::{IndexError, Result};
use crate::framework::Framework;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Framework document encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Some(Self::Json),
            Some("yaml") | Some("yml") => Some(Self::Yaml),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Many(Vec<Framework>),
    One(Box<Framework>),
}

impl From<Document> for Vec<Framework> {
    fn from(doc: Document) -> Self {
        match doc {
            Document::Many(frameworks) => frameworks,
            Document::One(framework) => vec![*framework],
        }
    }
}

/// Parse framework content. `origin` is only used for error messages.
pub fn parse_frameworks(
    content: &str,
    format: DocumentFormat,
    origin: &Path,
) -> Result<Vec<Framework>> {
    let doc: Document = match format {
        DocumentFormat::Json => {
            serde_json::from_str(content).map_err(|source| IndexError::Json {
                path: origin.to_path_buf(),
                source,
            })?
        }
        DocumentFormat::Yaml => {
            // An empty YAML document is a valid "nothing here".
            if content.trim().is_empty() {
                return Ok(Vec::new());
            }
            serde_yaml::from_str(content).map_err(|source| IndexError::Yaml {
                path: origin.to_path_buf(),
                source,
            })?
        }
    };
    Ok(doc.into())
}

/// Load the frameworks held by a single file.
pub fn load_framework_file(path: &Path) -> Result<Vec<Framework>> {
    let format = DocumentFormat::from_path(path)
        .ok_or_else(|| IndexError::UnsupportedFormat(path.to_path_buf()))?;
    let content = std::fs::read_to_string(path)?;
    let frameworks = parse_frameworks(&content, format, path)?;
    log::debug!(
        "Loaded {} framework(s) from {}",
        frameworks.len(),
        path.display()
    );
    Ok(frameworks)
}

/// Load all framework documents in a directory (recursively).
///
/// Files are visited in sorted order. Files with other extensions are
/// ignored and unparsable files are skipped with a warning.
pub fn load_framework_dir(path: &Path) -> Result<Vec<Framework>> {
    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(path)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| p.is_file() && DocumentFormat::from_path(p).is_some())
        .collect();
    files.sort();

    let mut frameworks = Vec::new();
    for file in files {
        match load_framework_file(&file) {
            Ok(mut loaded) => frameworks.append(&mut loaded),
            Err(e) => log::warn!("Skipping {}: {}", file.display(), e),
        }
    }
    Ok(frameworks)
}

/// Load frameworks from a list of files and/or directories, in order.
pub fn load_frameworks<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Framework>> {
    let mut frameworks = Vec::new();
    for path in paths {
        let path = path.as_ref();
        let mut loaded = if path.is_dir() {
            load_framework_dir(path)?
        } else {
            load_framework_file(path)?
        };
        frameworks.append(&mut loaded);
    }
    log::info!("Loaded {} framework(s)", frameworks.len());
    Ok(frameworks)
}
