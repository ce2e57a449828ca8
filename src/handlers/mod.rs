// Handler modules
pub mod aliases;
pub mod build;

// Re-export all handler functions
pub use aliases::handle_aliases;
pub use build::{BuildOptions, handle_build};
