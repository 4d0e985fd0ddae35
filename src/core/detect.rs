use crate::domain::model::RecordKind;
use crate::utils::error::Result;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

const BOM: char = '\u{feff}';

/// Reads only the marker line of `path` and classifies the export.
pub fn detect_kind(path: impl AsRef<Path>) -> Result<RecordKind> {
    let mut reader = BufReader::new(File::open(path.as_ref())?);
    let mut line = String::new();
    reader.read_line(&mut line)?;
    classify_marker(&line)
}

pub(crate) fn classify_marker(line: &str) -> Result<RecordKind> {
    line.trim_start_matches(BOM).trim().parse()
}
