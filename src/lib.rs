pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::MarkdownOutput, toml_config::PaperScan, toml_config::RenderConfig, CliConfig};
pub use crate::core::convert::{researchmap2md, Converter};
pub use crate::core::urls::{display_urls, DEFAULT_URL_INDENT};
pub use domain::model::{Record, RecordKind};
pub use domain::ports::{Reporter, TracingReporter};
pub use utils::error::{ConvertError, Result};
