use crate::domain::model::{Record, URL, URL2};
use crate::domain::ports::Reporter;
use crate::utils::validation::validate_link;

pub const DEFAULT_URL_INDENT: usize = 4;

/// Renders the `URL` and `URL2` links of a record as an indented bullet list.
///
/// Returns an empty string when neither link is present; otherwise a leading
/// newline followed by one `- <link>` line per link, without a trailing newline.
pub fn display_urls(record: &Record, indent: usize) -> String {
    let bullets: Vec<String> = [URL, URL2]
        .iter()
        .filter_map(|field| record.link(field))
        .map(|link| format!("{}- <{}>", " ".repeat(indent), link))
        .collect();

    if bullets.is_empty() {
        String::new()
    } else {
        format!("\n{}", bullets.join("\n"))
    }
}

/// Warns about links that are not absolute http(s) URLs. They are still rendered.
pub(crate) fn report_invalid_links(record: &Record, row: usize, reporter: &dyn Reporter) {
    for field in [URL, URL2] {
        if let Some(link) = record.link(field) {
            if let Err(e) = validate_link(field, &link) {
                reporter.warn(&format!("row {}: {}", row, e));
            }
        }
    }
}
