use crate::domain::model::RecordKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Unsupported record kind: {found:?} (expected presentations or published_papers)")]
    UnsupportedKind { found: String },

    #[error("Malformed input: {0}")]
    MalformedInput(#[from] csv::Error),

    #[error("Malformed input: quote opened on line {line} is never closed")]
    UnterminatedQuote { line: usize },

    #[error("Missing column {column:?} required for {kind}")]
    MissingColumn { kind: RecordKind, column: String },

    #[error("Unknown presentation style: {value:?}")]
    UnknownStyle { value: String },

    #[error("Unknown paper category: {value:?}")]
    UnknownCategory { value: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Invalid value for {field}: {value:?} ({reason})")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Render,
    System,
    Config,
}

impl ConvertError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ConvertError::UnsupportedKind { .. }
            | ConvertError::MalformedInput(_)
            | ConvertError::UnterminatedQuote { .. }
            | ConvertError::MissingColumn { .. } => ErrorCategory::Input,
            ConvertError::UnknownStyle { .. } | ConvertError::UnknownCategory { .. } => {
                ErrorCategory::Render
            }
            ConvertError::IoError(_) => ErrorCategory::System,
            ConvertError::ConfigParseError(_) | ConvertError::ValidationError { .. } => {
                ErrorCategory::Config
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input => 1,
            ErrorCategory::Render => 2,
            ErrorCategory::System | ErrorCategory::Config => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ConvertError::UnsupportedKind { .. } => {
                "presentations と published_papers にのみ対応しています。".to_string()
            }
            ConvertError::MalformedInput(e) => format!("CSV の形式が正しくありません: {}", e),
            ConvertError::UnterminatedQuote { line } => {
                format!("CSV の {} 行目で開いた引用符が閉じられていません。", line)
            }
            ConvertError::MissingColumn { column, .. } => {
                format!("必須の列 \"{}\" が見つかりません。", column)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ConvertError::UnsupportedKind { .. } => {
                "Export the records again; the first line must be `presentations` or `published_papers`"
            }
            ConvertError::MalformedInput(_) | ConvertError::UnterminatedQuote { .. } => {
                "Check the file for unbalanced quotes or rows with a different number of cells than the header"
            }
            ConvertError::MissingColumn { .. } => {
                "Export with the default column set; renamed or removed columns are not supported"
            }
            ConvertError::UnknownStyle { .. } => {
                "Use poster_presentation or oral_presentation in the 会議種別 column"
            }
            ConvertError::UnknownCategory { .. } => {
                "Use one of the researchmap 掲載種別 values such as scientific_journal"
            }
            ConvertError::IoError(_) => "Check that the input exists and the output path is writable",
            ConvertError::ConfigParseError(_) | ConvertError::ValidationError { .. } => {
                "Fix the configuration file named by RESEARCHMAP2MD_CONFIG or unset the variable"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_follow_category() {
        let unsupported = ConvertError::UnsupportedKind {
            found: "awards".to_string(),
        };
        assert_eq!(unsupported.category(), ErrorCategory::Input);
        assert_eq!(unsupported.exit_code(), 1);

        let style = ConvertError::UnknownStyle {
            value: "keynote".to_string(),
        };
        assert_eq!(style.category(), ErrorCategory::Render);
        assert_eq!(style.exit_code(), 2);

        let io = ConvertError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(io.exit_code(), 3);
    }

    #[test]
    fn test_config_failures_share_config_category() {
        let parse = toml::from_str::<toml::Table>("url_indent = ").unwrap_err();
        let parse = ConvertError::from(parse);
        let invalid = ConvertError::ValidationError {
            field: "url_indent".to_string(),
            value: "40".to_string(),
            reason: "Value must be between 0 and 16".to_string(),
        };
        for err in [parse, invalid] {
            assert_eq!(err.category(), ErrorCategory::Config);
            assert_eq!(err.exit_code(), 3);
            assert!(err.recovery_suggestion().contains("RESEARCHMAP2MD_CONFIG"));
        }
    }

    #[test]
    fn test_unterminated_quote_is_input_error() {
        let err = ConvertError::UnterminatedQuote { line: 7 };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("line 7"));
    }

    #[test]
    fn test_missing_column_message_names_column() {
        let err = ConvertError::MissingColumn {
            kind: RecordKind::PublishedPapers,
            column: "URL2".to_string(),
        };
        assert!(err.to_string().contains("URL2"));
        assert!(err.to_string().contains("published_papers"));
        assert!(err.user_friendly_message().contains("URL2"));
    }
}
