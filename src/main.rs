//! Fprgraph - Package Statement Knowledge Graph Converter

use std::path::PathBuf;

use clap::Parser;

use fprgraph::config::Config;
use fprgraph::convert::convert_file;

/// Convert a package statement document into an FPR knowledge graph.
#[derive(Parser)]
#[command(name = "fprgraph")]
#[command(about = "Package statement to FPR knowledge graph converter")]
#[command(version)]
struct Cli {
    /// Input package statement document (YAML)
    input: PathBuf,

    /// Output Turtle file
    output: PathBuf,

    /// Run in verbose mode
    #[arg(short, long)]
    verbose: bool,

    /// Fail on references to undeclared record ids
    #[arg(long)]
    strict: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Load configuration
    let mut config = Config::load()?;
    if cli.strict {
        config.conversion.strict_references = true;
    }

    convert_file(&cli.input, &cli.output, &config.conversion)?;

    Ok(())
}
