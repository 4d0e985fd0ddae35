use crate::core::urls::DEFAULT_URL_INDENT;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::Path;

/// 設定ファイルのパスを指定する環境変数
pub const CONFIG_ENV: &str = "RESEARCHMAP2MD_CONFIG";

const MAX_URL_INDENT: usize = 16;

/// How the paper renderer picks the rows of a subsection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaperScan {
    /// Scan from the first row and stop at the first row of another category.
    /// Relies on the export being grouped by 掲載種別.
    #[default]
    EarlyExit,
    /// Render every row of the category wherever it appears.
    Filter,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub url_indent: usize,
    pub paper_scan: PaperScan,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            url_indent: DEFAULT_URL_INDENT,
            paper_scan: PaperScan::default(),
        }
    }
}

impl RenderConfig {
    /// TOML ファイルから設定を読み込む
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// TOML 文字列から設定を解析する
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: RenderConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// `RESEARCHMAP2MD_CONFIG` が指すファイルを読む。未設定なら既定値。
    pub fn from_env() -> Result<Self> {
        Self::from_optional_path(std::env::var_os(CONFIG_ENV))
    }

    fn from_optional_path(path: Option<OsString>) -> Result<Self> {
        match path {
            Some(path) if !path.is_empty() => {
                tracing::debug!("Loading render config from {:?}", path);
                Self::from_file(path)
            }
            _ => Ok(Self::default()),
        }
    }
}

impl Validate for RenderConfig {
    fn validate(&self) -> Result<()> {
        validate_range("url_indent", self.url_indent, 0, MAX_URL_INDENT)
    }
}
