pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "researchmap2md")]
#[command(about = "Convert a researchmap CSV export of presentations or published papers to Markdown")]
pub struct CliConfig {
    /// researchmap export (first line: presentations or published_papers)
    pub input_file: PathBuf,

    /// Write the Markdown here instead of standard output
    #[arg(short = 'o', long = "output_file")]
    pub output_file: Option<PathBuf>,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_file", &self.input_file.to_string_lossy())?;
        if let Some(output) = &self.output_file {
            validate_path("output_file", &output.to_string_lossy())?;
        }
        Ok(())
    }
}
