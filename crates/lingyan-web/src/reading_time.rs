//! Fills `.reading-time` placeholders from the article word count.

use lingyan_core::{ReadingTime, config::ReadingTimeConfig};
use web_sys::Document;

use crate::{dom, error::Result, page::Feature};

/// One-shot feature: the labels are written at mount and never change.
pub struct ReadingTimeLabels {
    pub estimate: ReadingTime,
}

impl ReadingTimeLabels {
    pub fn mount(document: &Document, config: &ReadingTimeConfig) -> Result<Option<Self>> {
        let Some(content) = dom::query(document, ".post-content")? else {
            return Ok(None);
        };
        let labels = dom::query_all(document, ".reading-time")?;
        if labels.is_empty() {
            return Ok(None);
        }

        let text = content.text_content().unwrap_or_default();
        let estimate = ReadingTime::estimate(&text, config.words_per_minute);
        let label = estimate.label(&config.label);
        for element in &labels {
            element.set_text_content(Some(&label));
        }

        log::debug!("reading time: {} words, {} min", estimate.words, estimate.minutes);
        Ok(Some(Self { estimate }))
    }
}

impl Feature for ReadingTimeLabels {
    fn name(&self) -> &'static str {
        "reading-time"
    }
}
