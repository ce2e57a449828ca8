//! # Resource Index
//!
//! Connects security-framework rule definitions to the concrete Kubernetes
//! API resources they target, and each such resource back to the controls
//! that inspect it.
//!
//! ## Features
//!
//! - **Resource Collection**: Resolves every static `match` entry into the
//!   GVK identifiers a scanner must fetch
//! - **Control Indexing**: Links host-data, cloud and vulnerability
//!   resources from `dynamicMatch` entries to the controls that consume them
//! - **Alias Resolution**: Maps special resource names to the API groups
//!   they are published under
//! - **Framework Loading**: Reads frameworks from JSON or YAML documents
//!
//! ## Example
//!
//! ```rust,no_run
//! use resource_index::framework::parser::load_frameworks;
//! use resource_index::index::{KubeResourceResolver, ResourceIndexer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let frameworks = load_frameworks(&["./frameworks"])?;
//! let report = ResourceIndexer::new(KubeResourceResolver).build(&frameworks);
//! for gvk in report.resources.gvks() {
//!     println!("{}", gvk);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod framework;
pub mod handlers;
pub mod index;

// Re-export commonly used types and functions
pub use error::{IndexError, Result};
pub use framework::{Control, Framework, Rule, RuleMatchObjects};
pub use index::{
    ControlIndex, IndexReport, ResourceIndexer, ResourceSet, build_control_index,
    build_resource_set,
};

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
