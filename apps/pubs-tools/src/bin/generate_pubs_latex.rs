//! Write the full and selected LaTeX publication lists.

use std::path::PathBuf;

use clap::Parser;
use pubs_tools::{init_logging, CommonArgs};

#[derive(Debug, Parser)]
#[command(name = "generate-pubs-latex", version, about)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Output file for the full list
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output file for the selected list
    #[arg(long, value_name = "FILE")]
    selected_output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let cli = Cli::parse();

    let config = cli.common.load_config_with(|config| {
        if let Some(output) = cli.output {
            config.paths.latex_output = output;
        }
        if let Some(output) = cli.selected_output {
            config.paths.selected_latex_output = output;
        }
    })?;

    for summary in pubs_core::generate_latex(&config)? {
        println!("{}", summary);
    }
    Ok(())
}
