use crate::config::toml_config::RenderConfig;
use crate::core::detect::detect_kind;
use crate::core::paper::PaperRenderer;
use crate::core::parser::parse_records;
use crate::core::presentation::PresentationRenderer;
use crate::domain::model::RecordKind;
use crate::domain::ports::{Renderer, Reporter};
use crate::utils::error::Result;
use std::path::Path;

/// Runs detect → parse → render for one export file.
pub struct Converter<'a> {
    config: RenderConfig,
    reporter: &'a dyn Reporter,
}

impl<'a> Converter<'a> {
    pub fn new(config: RenderConfig, reporter: &'a dyn Reporter) -> Self {
        Self { config, reporter }
    }

    pub fn convert(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();

        let kind = detect_kind(path)?;
        self.reporter
            .info(&format!("Detected {} in {}", kind, path.display()));

        let records = parse_records(path, kind)?;
        self.reporter.info(&format!("Parsed {} rows", records.len()));

        self.renderer(kind).render(&records, self.reporter)
    }

    fn renderer(&self, kind: RecordKind) -> Box<dyn Renderer> {
        match kind {
            RecordKind::Presentations => Box::new(PresentationRenderer::new(self.config.clone())),
            RecordKind::PublishedPapers => Box::new(PaperRenderer::new(self.config.clone())),
        }
    }
}

/// Converts `path` with the default render settings.
pub fn researchmap2md(path: impl AsRef<Path>, reporter: &dyn Reporter) -> Result<String> {
    Converter::new(RenderConfig::default(), reporter).convert(path)
}
