use crate::utils::error::{ConvertError, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

pub const URL: &str = "URL";
pub const URL2: &str = "URL2";

pub const PAPER_COLUMNS: &[&str] = &[
    "著者(英語)",
    "タイトル(英語)",
    "誌名(英語)",
    "巻",
    "号",
    "開始ページ",
    "終了ページ",
    "出版年月",
    "掲載種別",
    URL,
    URL2,
];

pub const PRESENTATION_COLUMNS: &[&str] = &[
    "会議名(英語)",
    "会議名(日本語)",
    "タイトル(英語)",
    "タイトル(日本語)",
    "開催地(英語)",
    "開催地(日本語)",
    "国・地域",
    "会議種別",
    "講演者(英語)",
    "講演者(日本語)",
    "国際・国内会議",
    URL,
    URL2,
];

/// The kind declared on the first line of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Presentations,
    PublishedPapers,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Presentations => "presentations",
            RecordKind::PublishedPapers => "published_papers",
        }
    }

    pub fn required_columns(&self) -> &'static [&'static str] {
        match self {
            RecordKind::Presentations => PRESENTATION_COLUMNS,
            RecordKind::PublishedPapers => PAPER_COLUMNS,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "presentations" => Ok(RecordKind::Presentations),
            "published_papers" => Ok(RecordKind::PublishedPapers),
            other => Err(ConvertError::UnsupportedKind {
                found: other.to_string(),
            }),
        }
    }
}

/// 掲載種別 of a published paper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaperCategory {
    ScientificJournal,
    InternationalConferenceProceedings,
    ResearchInstitution,
    Symposium,
    ResearchSociety,
    InBook,
    MasterThesis,
    DoctoralThesis,
}

impl PaperCategory {
    pub fn label(&self) -> &'static str {
        match self {
            PaperCategory::ScientificJournal => "研究論文（学術雑誌）",
            PaperCategory::InternationalConferenceProceedings => {
                "研究論文（国際会議プロシーディングス）"
            }
            PaperCategory::ResearchInstitution => "研究論文（大学，研究機関等紀要）",
            PaperCategory::Symposium => "研究論文（研究会，シンポジウム資料等）",
            PaperCategory::ResearchSociety => "研究論文（その他学術会議資料等）",
            PaperCategory::InBook => "論文集(書籍)内論文",
            PaperCategory::MasterThesis => "学位論文（修士）",
            PaperCategory::DoctoralThesis => "学位論文（博士）",
        }
    }
}

impl FromStr for PaperCategory {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "scientific_journal" => Ok(PaperCategory::ScientificJournal),
            "international_conference_proceedings" => {
                Ok(PaperCategory::InternationalConferenceProceedings)
            }
            "research_institution" => Ok(PaperCategory::ResearchInstitution),
            "symposium" => Ok(PaperCategory::Symposium),
            "research_society" => Ok(PaperCategory::ResearchSociety),
            "in_book" => Ok(PaperCategory::InBook),
            "master_thesis" => Ok(PaperCategory::MasterThesis),
            "doctoral_thesis" => Ok(PaperCategory::DoctoralThesis),
            other => Err(ConvertError::UnknownCategory {
                value: other.to_string(),
            }),
        }
    }
}

/// 会議種別 of a presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationStyle {
    Poster,
    Oral,
}

impl PresentationStyle {
    pub fn label(&self) -> &'static str {
        match self {
            PresentationStyle::Poster => "ポスター発表",
            PresentationStyle::Oral => "口頭発表",
        }
    }
}

impl FromStr for PresentationStyle {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "poster_presentation" => Ok(PresentationStyle::Poster),
            "oral_presentation" => Ok(PresentationStyle::Oral),
            other => Err(ConvertError::UnknownStyle {
                value: other.to_string(),
            }),
        }
    }
}

/// One data row of an export, keyed by header column.
///
/// Absent cells (the export's `null`) are stored as `Value::Null`. The cell
/// text as exported is kept alongside so typed cells print unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    pub data: HashMap<String, Value>,
    raw: HashMap<String, String>,
}

impl Record {
    pub fn new(data: HashMap<String, Value>) -> Self {
        Self {
            data,
            raw: HashMap::new(),
        }
    }

    pub fn with_raw(data: HashMap<String, Value>, raw: HashMap<String, String>) -> Self {
        Self { data, raw }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.data.get(field)
    }

    /// Cell rendered for a citation line.
    pub fn text(&self, field: &str) -> String {
        match self.data.get(field) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => "null".to_string(),
            Some(other) => self
                .raw
                .get(field)
                .cloned()
                .unwrap_or_else(|| other.to_string()),
        }
    }

    /// Present link in `field`, if any.
    pub fn link(&self, field: &str) -> Option<String> {
        match self.data.get(field) {
            Some(Value::Null) | None => None,
            Some(_) => Some(self.text(field)),
        }
    }

    pub fn flag(&self, field: &str) -> Option<bool> {
        self.data.get(field).and_then(Value::as_bool)
    }
}
