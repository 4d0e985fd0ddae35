use crate::config::toml_config::{PaperScan, RenderConfig};
use crate::core::urls::{display_urls, report_invalid_links};
use crate::domain::model::{PaperCategory, Record};
use crate::domain::ports::{Renderer, Reporter};
use crate::utils::error::Result;

const CATEGORY_FIELD: &str = "掲載種別";

/// Subsections in output order. Other categories have no subsection yet.
const SECTIONS: &[(&str, PaperCategory)] = &[
    ("投稿論文", PaperCategory::ScientificJournal),
    ("プロシーディングス", PaperCategory::InternationalConferenceProceedings),
];

pub struct PaperRenderer {
    config: RenderConfig,
}

impl PaperRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Row indices rendered under `category`. Every subsection scans from row 0.
    fn select(&self, categories: &[PaperCategory], category: PaperCategory) -> Vec<usize> {
        match self.config.paper_scan {
            PaperScan::EarlyExit => (0..categories.len())
                .take_while(|&i| categories[i] == category)
                .collect(),
            PaperScan::Filter => (0..categories.len())
                .filter(|&i| categories[i] == category)
                .collect(),
        }
    }

    fn citation(&self, record: &Record) -> String {
        format!(
            "1. {}, {}, *{}*, {}, {}, pp{}-{} ({}).  {}\n",
            record.text("著者(英語)"),
            record.text("タイトル(英語)"),
            record.text("誌名(英語)"),
            record.text("巻"),
            record.text("号"),
            record.text("開始ページ"),
            record.text("終了ページ"),
            record.text("出版年月"),
            display_urls(record, self.config.url_indent),
        )
    }
}

impl Default for PaperRenderer {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

impl Renderer for PaperRenderer {
    fn render(&self, records: &[Record], reporter: &dyn Reporter) -> Result<String> {
        let categories = records
            .iter()
            .map(|record| record.text(CATEGORY_FIELD).parse())
            .collect::<Result<Vec<PaperCategory>>>()?;

        let mut out = String::from("\n## 論文\n");
        let mut rendered = vec![false; records.len()];

        for (heading, category) in SECTIONS {
            out.push_str(&format!("\n### {}\n\n", heading));
            let selected = self.select(&categories, *category);
            reporter.debug(&format!("{}: {} rows", heading, selected.len()));
            for i in selected {
                report_invalid_links(&records[i], i + 1, reporter);
                out.push_str(&self.citation(&records[i]));
                rendered[i] = true;
            }
        }

        for (i, category) in categories.iter().enumerate() {
            if !rendered[i] {
                reporter.warn(&format!(
                    "row {} ({}) is not rendered in any section",
                    i + 1,
                    category.label()
                ));
            }
        }

        let count = rendered.iter().filter(|r| **r).count();
        reporter.info(&format!("Rendered {} of {} paper rows", count, records.len()));
        Ok(out)
    }
}
