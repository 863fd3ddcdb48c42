//! Write publications.json from the publication sheet.

use std::path::PathBuf;

use clap::Parser;
use pubs_tools::{init_logging, CommonArgs};

#[derive(Debug, Parser)]
#[command(name = "generate-publications-json", version, about)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Output JSON file
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let cli = Cli::parse();

    let config = cli.common.load_config_with(|config| {
        if let Some(output) = cli.output {
            config.paths.json_output = output;
        }
    })?;

    let summary = pubs_core::generate_json(&config)?;
    println!("{}", summary);
    Ok(())
}
