use crate::utils::error::Result;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Where the rendered document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkdownOutput {
    Stdout,
    File(PathBuf),
}

impl MarkdownOutput {
    pub fn new(output_file: Option<PathBuf>) -> Self {
        match output_file {
            Some(path) => MarkdownOutput::File(path),
            None => MarkdownOutput::Stdout,
        }
    }

    /// Files are overwritten as-is; standard output gets a trailing newline.
    pub fn write(&self, markdown: &str) -> Result<()> {
        match self {
            MarkdownOutput::Stdout => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                writeln!(handle, "{}", markdown)?;
                handle.flush()?;
            }
            MarkdownOutput::File(path) => {
                fs::write(path, markdown)?;
            }
        }
        Ok(())
    }
}
