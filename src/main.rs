use clap::Parser;
use resource_index::{
    cli::{Cli, Commands},
    config,
    handlers::{self, BuildOptions},
};
use std::path::Path;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> resource_index::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    cli.init_logging();

    // Load configuration
    let config = config::load_config(cli.config.as_deref(), Path::new("."))?;

    match cli.command {
        Commands::Build {
            paths,
            format,
            warn_unmapped,
            output,
        } => {
            let to_stdout = output.is_none();
            let options = BuildOptions {
                paths,
                format,
                warn_unmapped,
                output,
            };
            let rendered = handlers::handle_build(options, &config)?;
            if to_stdout {
                print!("{}", rendered);
            }
        }
        Commands::Aliases { names } => {
            print!("{}", handlers::handle_aliases(&names));
        }
    }

    Ok(())
}
