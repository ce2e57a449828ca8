use crate::config::types::Config;
use crate::framework::parser::load_frameworks;
use crate::index::formatter::{OutputFormat, format_report};
use crate::index::{IndexOptions, KubeResourceResolver, ResourceIndexer};
use std::path::PathBuf;

/// Command-line options for `rindex build`.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub paths: Vec<PathBuf>,
    pub format: Option<OutputFormat>,
    pub warn_unmapped: bool,
    pub output: Option<PathBuf>,
}

/// Load frameworks, build the index report and render it.
///
/// Command-line flags take precedence over the configuration file. The
/// rendered report is written to `output` when given and also returned.
pub fn handle_build(options: BuildOptions, config: &Config) -> crate::Result<String> {
    let frameworks = load_frameworks(&options.paths)?;

    let mut index_options = IndexOptions::from(&config.index);
    index_options.warn_unmapped |= options.warn_unmapped;
    let report = ResourceIndexer::new(KubeResourceResolver)
        .with_options(index_options)
        .build(&frameworks);

    let format = options.format.unwrap_or(config.output.format);
    let rendered = format_report(&report, format);

    if let Some(path) = &options.output {
        std::fs::write(path, &rendered)?;
        log::info!("Report saved to: {}", path.display());
    }

    Ok(rendered)
}
