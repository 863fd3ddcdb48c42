//! Write the HTML blocks of the selected publications.

use std::path::PathBuf;

use clap::Parser;
use pubs_tools::{init_logging, CommonArgs};

#[derive(Debug, Parser)]
#[command(name = "generate-selected-pubs-html", version, about)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Output HTML file
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Append each publication's BibTeX citation to its block
    #[arg(long)]
    embed_bibtex: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let cli = Cli::parse();

    let config = cli.common.load_config_with(|config| {
        if let Some(output) = cli.output {
            config.paths.html_output = output;
        }
        if cli.embed_bibtex {
            config.html.embed_bibtex = true;
        }
    })?;

    let summary = pubs_core::generate_selected_html(&config)?;
    println!("{}", summary);
    Ok(())
}
