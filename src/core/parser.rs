use crate::domain::model::{Record, RecordKind};
use crate::utils::error::{ConvertError, Result};
use serde_json::{Number, Value};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Parses the rows of an export whose kind has already been detected.
///
/// The marker line is skipped; the next line is the header.
pub fn parse_records(path: impl AsRef<Path>, kind: RecordKind) -> Result<Vec<Record>> {
    let mut reader = BufReader::new(File::open(path.as_ref())?);
    let mut marker = String::new();
    reader.read_line(&mut marker)?;
    parse_records_from_reader(reader, kind)
}

/// Parses header and rows from a reader positioned just after the marker line.
pub fn parse_records_from_reader<R: Read>(mut reader: R, kind: RecordKind) -> Result<Vec<Record>> {
    let mut body = String::new();
    reader.read_to_string(&mut body)?;
    check_quotes(&body)?;

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(body.as_bytes());

    let headers: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();
    for column in kind.required_columns() {
        if !headers.iter().any(|h| h == column) {
            return Err(ConvertError::MissingColumn {
                kind,
                column: column.to_string(),
            });
        }
    }

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        let mut data = HashMap::new();
        let mut raw = HashMap::new();
        for (header, cell) in headers.iter().zip(row.iter()) {
            data.insert(header.clone(), infer_value(cell));
            raw.insert(header.clone(), cell.to_string());
        }
        records.push(Record::with_raw(data, raw));
    }

    Ok(records)
}

/// Fails when a quoted field is still open at end of input.
///
/// `csv` accepts an unclosed quote and reads to EOF, which only surfaces as an
/// error when the cell count changes. Line numbers count the marker line as 1.
fn check_quotes(body: &str) -> Result<()> {
    let mut chars = body.chars().peekable();
    let mut line = 2;
    let mut field_start = true;
    let mut open_line = None;

    while let Some(c) = chars.next() {
        match (open_line, c) {
            (Some(_), '"') => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                } else {
                    open_line = None;
                    field_start = false;
                }
            }
            (None, '"') if field_start => {
                open_line = Some(line);
                field_start = false;
            }
            (None, ',') => field_start = true,
            (None, '\n') => field_start = true,
            (None, '\r') => {}
            (None, _) => field_start = false,
            (Some(_), _) => {}
        }
        if c == '\n' {
            line += 1;
        }
    }

    match open_line {
        Some(line) => Err(ConvertError::UnterminatedQuote { line }),
        None => Ok(()),
    }
}

/// Types a raw cell. `null` is the export's marker for an absent value.
pub(crate) fn infer_value(raw: &str) -> Value {
    if raw == "null" {
        return Value::Null;
    }
    if let Ok(i) = raw.parse::<i64>() {
        return Value::from(i);
    }
    if let Some(n) = raw
        .parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .and_then(Number::from_f64)
    {
        return Value::Number(n);
    }
    if raw.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if raw.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    Value::String(raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const PAPER_HEADER: &str =
        "著者(英語),タイトル(英語),誌名(英語),巻,号,開始ページ,終了ページ,出版年月,掲載種別,URL,URL2";

    #[test]
    fn test_infer_value() {
        assert_eq!(infer_value("null"), Value::Null);
        assert_eq!(infer_value("12"), json!(12));
        assert_eq!(infer_value("1.5"), json!(1.5));
        assert_eq!(infer_value("true"), json!(true));
        assert_eq!(infer_value("False"), json!(false));
        assert_eq!(infer_value("2023-04"), json!("2023-04"));
        assert_eq!(infer_value(""), json!(""));
        assert_eq!(infer_value("NaN"), json!("NaN"));
        assert_eq!(infer_value("Null"), json!("Null"));
    }

    #[test]
    fn test_parse_skips_marker_and_keeps_order() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "\u{feff}published_papers\n{}\n\
             A,First,J,1,2,10,20,2023-01,scientific_journal,https://a.example,null\n\
             B,Second,P,3,null,30,40,2022-05,international_conference_proceedings,null,null\n",
            PAPER_HEADER
        )
        .unwrap();

        let records = parse_records(file.path(), RecordKind::PublishedPapers).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("タイトル(英語)"), Some(&json!("First")));
        assert_eq!(records[0].get("巻"), Some(&json!(1)));
        assert_eq!(records[0].get("URL2"), Some(&Value::Null));
        assert_eq!(records[1].get("号"), Some(&Value::Null));
        assert_eq!(
            records[1].get("掲載種別"),
            Some(&json!("international_conference_proceedings"))
        );
    }

    #[test]
    fn test_parse_quoted_cells() {
        let input = format!(
            "{}\n\"Doe, J. and Roe, R.\",\"A \"\"quoted\"\" title\",J,1,1,1,2,2020-01,scientific_journal,null,null\n",
            PAPER_HEADER
        );
        let records =
            parse_records_from_reader(input.as_bytes(), RecordKind::PublishedPapers).unwrap();
        assert_eq!(records[0].text("著者(英語)"), "Doe, J. and Roe, R.");
        assert_eq!(records[0].text("タイトル(英語)"), "A \"quoted\" title");
    }

    #[test]
    fn test_parse_header_only_yields_no_rows() {
        let input = format!("{}\n", PAPER_HEADER);
        let records =
            parse_records_from_reader(input.as_bytes(), RecordKind::PublishedPapers).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_rejects_inconsistent_column_count() {
        let input = format!(
            "{}\nA,First,J,1,2,10,20,2023-01,scientific_journal,null,null,extra\n",
            PAPER_HEADER
        );
        assert!(matches!(
            parse_records_from_reader(input.as_bytes(), RecordKind::PublishedPapers),
            Err(ConvertError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_parse_rejects_unclosed_quote_in_last_field() {
        let input = format!(
            "{}\nA,T,J,1,2,3,4,2020-01,scientific_journal,null,\"https://x\n",
            PAPER_HEADER
        );
        match parse_records_from_reader(input.as_bytes(), RecordKind::PublishedPapers) {
            Err(ConvertError::UnterminatedQuote { line }) => assert_eq!(line, 3),
            other => panic!("expected UnterminatedQuote, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_accepts_escaped_and_multiline_quotes() {
        let input = format!(
            "{}\n\"Doe, J.\",\"Two\nlines \"\"quoted\"\"\",J,1,1,1,2,2020-01,scientific_journal,null,null\n",
            PAPER_HEADER
        );
        let records =
            parse_records_from_reader(input.as_bytes(), RecordKind::PublishedPapers).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].text("タイトル(英語)"), "Two\nlines \"quoted\"");
    }

    #[test]
    fn test_check_quotes_ignores_quote_inside_unquoted_field() {
        assert!(check_quotes("a,b\n5\" disk,x\n").is_ok());
        assert!(matches!(
            check_quotes("a,b\nx,y\n\"open,z\n"),
            Err(ConvertError::UnterminatedQuote { line: 4 })
        ));
    }

    #[test]
    fn test_parse_keeps_numeric_looking_text_verbatim() {
        let input = format!(
            "{}\nA,1E3,J,012,1.50,3,4,2020-01,scientific_journal,null,null\n",
            PAPER_HEADER
        );
        let records =
            parse_records_from_reader(input.as_bytes(), RecordKind::PublishedPapers).unwrap();
        assert_eq!(records[0].text("タイトル(英語)"), "1E3");
        assert_eq!(records[0].text("巻"), "012");
        assert_eq!(records[0].text("号"), "1.50");
        assert_eq!(records[0].get("巻"), Some(&json!(12)));
    }

    #[test]
    fn test_parse_rejects_missing_required_column() {
        let input = "著者(英語),タイトル(英語)\nA,B\n";
        match parse_records_from_reader(input.as_bytes(), RecordKind::PublishedPapers) {
            Err(ConvertError::MissingColumn { kind, column }) => {
                assert_eq!(kind, RecordKind::PublishedPapers);
                assert_eq!(column, "誌名(英語)");
            }
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }
}
