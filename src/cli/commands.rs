use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;

use crate::pipeline::process_file;
use crate::render::HtmlRenderer;

#[derive(Parser)]
#[command(name = "export-formatter")]
#[command(version = "0.1.0")]
#[command(
    about = "Extract JSON records from a noisy export dump and format each as a document",
    long_about = None
)]
pub struct Cli {
    /// Path to the exported text dump
    pub input: PathBuf,

    /// Directory where formatted documents are written (created if absent)
    pub output_dir: PathBuf,

    /// Branding image included at the top of each document
    #[arg(long)]
    pub logo: Option<PathBuf>,

    /// Print the run summary as JSON instead of plain text
    #[arg(long)]
    pub json: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if !cli.input.exists() {
        bail!("File {} does not exist", cli.input.display());
    }

    let renderer = HtmlRenderer::new(cli.logo);
    let summary = process_file(&cli.input, &cli.output_dir, &renderer)?;

    if cli.json {
        println!("{}", serde_json::to_string(&summary)?);
    } else {
        println!("{summary}");
    }
    Ok(())
}
