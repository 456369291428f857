//! Lingyan Core Library
//!
//! Target-independent logic behind the Lingyan blog runtime: search over the
//! static index, query highlighting, scroll metrics, reading time, theme
//! preference and runtime configuration.
//!
//! # Example
//!
//! ```
//! use lingyan_core::{SearchIndex, SearchOutcome, SearchQuery};
//!
//! let index = SearchIndex::from_json(
//!     r#"[{"title": "Rust ownership", "content": "borrow checker",
//!          "tags": ["rust"], "url": "/a", "description": "intro", "date": "2024-01-01"}]"#,
//! )
//! .unwrap();
//!
//! let outcome = index.search(&SearchQuery::parse("RUST"), 2).unwrap();
//! assert!(matches!(outcome, SearchOutcome::Results(ref hits) if hits.len() == 1));
//! ```

pub mod config;
pub mod error;
pub mod feedback;
pub mod highlight;
pub mod reading_time;
pub mod scroll;
pub mod search;
pub mod theme;

pub use config::ScriptConfig;
pub use error::{CoreError, Result};
pub use feedback::CopyFeedback;
pub use highlight::{Highlighter, Segment};
pub use reading_time::ReadingTime;
pub use scroll::{ContentBounds, NavbarFrame, NavbarTracker};
pub use search::{SearchHit, SearchIndex, SearchIndexEntry, SearchOutcome, SearchQuery};
pub use theme::Theme;
