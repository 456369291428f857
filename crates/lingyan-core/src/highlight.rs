//! Query highlighting for search results.
//!
//! Text is split into plain and marked segments instead of being rewritten as
//! HTML, so the renderer can insert each piece as a text node.

use regex::{Regex, RegexBuilder};

use crate::error::Result;

/// A run of text in a highlighted string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text that did not match the query.
    Plain(String),
    /// An occurrence of the query.
    Mark(String),
}

impl Segment {
    /// The text carried by this segment.
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain(text) | Segment::Mark(text) => text,
        }
    }

    pub fn is_mark(&self) -> bool {
        matches!(self, Segment::Mark(_))
    }
}

/// Case-insensitive literal matcher for a single query.
#[derive(Debug, Clone)]
pub struct Highlighter {
    pattern: Option<Regex>,
}

impl Highlighter {
    /// Build a highlighter for `query`. The query is matched literally.
    pub fn new(query: &str) -> Result<Self> {
        if query.is_empty() {
            return Ok(Self { pattern: None });
        }

        let pattern = RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build()?;

        Ok(Self {
            pattern: Some(pattern),
        })
    }

    /// Split `text` into segments, marking every occurrence of the query.
    ///
    /// Concatenating the segment texts always yields `text` unchanged.
    pub fn segments(&self, text: &str) -> Vec<Segment> {
        let Some(pattern) = &self.pattern else {
            return plain(text);
        };

        let mut segments = Vec::new();
        let mut cursor = 0;

        for found in pattern.find_iter(text) {
            if found.start() > cursor {
                segments.push(Segment::Plain(text[cursor..found.start()].to_string()));
            }
            segments.push(Segment::Mark(found.as_str().to_string()));
            cursor = found.end();
        }

        if cursor < text.len() {
            segments.push(Segment::Plain(text[cursor..].to_string()));
        }

        segments
    }
}

fn plain(text: &str) -> Vec<Segment> {
    if text.is_empty() {
        Vec::new()
    } else {
        vec![Segment::Plain(text.to_string())]
    }
}
