use crate::config::toml_config::RenderConfig;
use crate::core::urls::{display_urls, report_invalid_links};
use crate::domain::model::{PresentationStyle, Record};
use crate::domain::ports::{Renderer, Reporter};
use crate::utils::error::Result;

const INTERNATIONAL_FIELD: &str = "国際・国内会議";
const STYLE_FIELD: &str = "会議種別";

/// Column names of the localized fields for one subsection.
struct Section {
    heading: &'static str,
    international: bool,
    conference: &'static str,
    title: &'static str,
    venue: &'static str,
    speaker: &'static str,
}

const SECTIONS: &[Section] = &[
    Section {
        heading: "国際会議",
        international: true,
        conference: "会議名(英語)",
        title: "タイトル(英語)",
        venue: "開催地(英語)",
        speaker: "講演者(英語)",
    },
    Section {
        heading: "国内会議",
        international: false,
        conference: "会議名(日本語)",
        title: "タイトル(日本語)",
        venue: "開催地(日本語)",
        speaker: "講演者(日本語)",
    },
];

pub struct PresentationRenderer {
    config: RenderConfig,
}

impl PresentationRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    fn entry(&self, record: &Record, section: &Section) -> Result<String> {
        let style: PresentationStyle = record.text(STYLE_FIELD).parse()?;
        Ok(format!(
            "1. {}, {}, \"{}\", {}, {}.  \n  {}  {}\n",
            record.text(section.conference),
            style.label(),
            record.text(section.title),
            record.text(section.venue),
            record.text("国・地域"),
            record.text(section.speaker),
            display_urls(record, self.config.url_indent),
        ))
    }
}

impl Default for PresentationRenderer {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

impl Renderer for PresentationRenderer {
    fn render(&self, records: &[Record], reporter: &dyn Reporter) -> Result<String> {
        let mut out = String::from("\n## 発表\n");

        for section in SECTIONS {
            out.push_str(&format!("\n### {}\n\n", section.heading));
            let mut count = 0;
            for (i, record) in records.iter().enumerate() {
                if record.flag(INTERNATIONAL_FIELD) != Some(section.international) {
                    continue;
                }
                out.push_str(&self.entry(record, section)?);
                report_invalid_links(record, i + 1, reporter);
                count += 1;
            }
            reporter.debug(&format!("{}: {} rows", section.heading, count));
        }

        let mut unflagged = 0;
        for (i, record) in records.iter().enumerate() {
            if record.flag(INTERNATIONAL_FIELD).is_none() {
                unflagged += 1;
                reporter.warn(&format!(
                    "row {}: {} is {:?}, expected true or false; row is not rendered",
                    i + 1,
                    INTERNATIONAL_FIELD,
                    record.text(INTERNATIONAL_FIELD)
                ));
            }
        }

        reporter.info(&format!(
            "Rendered {} of {} presentation rows",
            records.len() - unflagged,
            records.len()
        ));
        Ok(out)
    }
}
