//! Client-side search over the static JSON index.
//!
//! The index is a flat array of posts. Matching is a linear substring scan over
//! lower-cased title, content and tags, which is plenty for a personal blog.

use serde::{Deserialize, Serialize};

use crate::{
    error::{CoreError, Result},
    highlight::{Highlighter, Segment},
};

/// A single post in the search index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchIndexEntry {
    /// Post title.
    pub title: String,

    /// Plain-text post body.
    pub content: String,

    /// Post tags.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Post URL.
    pub url: String,

    /// Post summary.
    #[serde(default)]
    pub description: String,

    /// Publication date as displayed.
    #[serde(default)]
    pub date: String,
}

impl SearchIndexEntry {
    /// Whether `needle` (already lower-cased) occurs in the title, content or a tag.
    pub fn matches(&self, needle: &str) -> bool {
        FoldedEntry::new(self).matches(needle)
    }
}

/// Lower-cased copies of the searchable fields, computed once at load.
#[derive(Debug, Clone)]
struct FoldedEntry {
    title: String,
    content: String,
    tags: Vec<String>,
}

impl FoldedEntry {
    fn new(entry: &SearchIndexEntry) -> Self {
        Self {
            title: entry.title.to_lowercase(),
            content: entry.content.to_lowercase(),
            tags: entry.tags.iter().map(|t| t.to_lowercase()).collect(),
        }
    }

    fn matches(&self, needle: &str) -> bool {
        self.title.contains(needle)
            || self.content.contains(needle)
            || self.tags.iter().any(|tag| tag.contains(needle))
    }
}

/// A normalized search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Raw input value.
    pub raw: String,

    /// Trimmed, lower-cased needle.
    pub needle: String,
}

impl SearchQuery {
    /// Normalize raw input.
    pub fn parse(input: &str) -> Self {
        Self {
            raw: input.to_string(),
            needle: input.trim().to_lowercase(),
        }
    }

    /// Length of the needle in characters.
    pub fn len(&self) -> usize {
        self.needle.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Whether the query is long enough to run.
    pub fn is_searchable(&self, min_chars: usize) -> bool {
        self.len() >= min_chars
    }
}

/// A rendered search hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub url: String,
    pub date: String,
    pub title: Vec<Segment>,
    pub description: Vec<Segment>,
}

/// What the results panel should show for a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The query is too short; hide the panel.
    Hidden,
    /// Nothing matched; show the placeholder.
    NoResults,
    /// Matching posts in index order.
    Results(Vec<SearchHit>),
}

impl SearchOutcome {
    /// Number of hits, zero for `Hidden` and `NoResults`.
    pub fn len(&self) -> usize {
        match self {
            SearchOutcome::Results(hits) => hits.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory search index.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    entries: Vec<SearchIndexEntry>,
    folded: Vec<FoldedEntry>,
}

impl SearchIndex {
    /// Create an empty index.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build an index from entries.
    pub fn from_entries(entries: Vec<SearchIndexEntry>) -> Self {
        let folded = entries.iter().map(FoldedEntry::new).collect();
        Self { entries, folded }
    }

    /// Parse the index from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<SearchIndexEntry> = serde_json::from_str(json).map_err(CoreError::Index)?;
        Ok(Self::from_entries(entries))
    }

    /// Get entry count.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, in index order.
    pub fn entries(&self) -> &[SearchIndexEntry] {
        &self.entries
    }

    /// Entries matching `query`, in index order.
    pub fn filter<'a>(&'a self, query: &SearchQuery) -> impl Iterator<Item = &'a SearchIndexEntry> {
        let needle = query.needle.clone();
        self.entries
            .iter()
            .zip(&self.folded)
            .filter(move |(_, folded)| folded.matches(&needle))
            .map(|(entry, _)| entry)
    }

    /// Run a query and build highlighted hits.
    pub fn search(&self, query: &SearchQuery, min_chars: usize) -> Result<SearchOutcome> {
        if !query.is_searchable(min_chars) {
            return Ok(SearchOutcome::Hidden);
        }

        let highlighter = Highlighter::new(&query.needle)?;
        let hits: Vec<SearchHit> = self
            .filter(query)
            .map(|entry| SearchHit {
                url: entry.url.clone(),
                date: entry.date.clone(),
                title: highlighter.segments(&entry.title),
                description: highlighter.segments(&entry.description),
            })
            .collect();

        if hits.is_empty() {
            Ok(SearchOutcome::NoResults)
        } else {
            Ok(SearchOutcome::Results(hits))
        }
    }
}
