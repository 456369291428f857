//! Behavioural tests for search and scroll metrics.
//!
//! These exercise the public API the way the browser runtime drives it.

use lingyan_core::{
    ContentBounds, NavbarTracker, ScriptConfig, SearchIndex, SearchIndexEntry, SearchOutcome,
    SearchQuery, Segment,
    scroll::{content_progress, navbar_hidden, page_progress},
};

fn sample_index() -> SearchIndex {
    SearchIndex::from_entries(vec![SearchIndexEntry {
        title: "Rust ownership".to_string(),
        content: "borrow checker".to_string(),
        tags: vec!["rust".to_string(), "memory".to_string()],
        url: "/a".to_string(),
        description: "intro".to_string(),
        date: "2024-01-01".to_string(),
    }])
}

fn blog_index() -> SearchIndex {
    let json = r#"[
        {"title": "Async Rust in practice", "content": "Futures, executors and wakers",
         "tags": ["rust", "async"], "url": "/posts/async-rust",
         "description": "How futures are polled", "date": "2024-03-02"},
        {"title": "静态博客搭建", "content": "使用 Hexo 搭建个人博客",
         "tags": ["博客"], "url": "/posts/blog",
         "description": "从零开始", "date": "2023-11-20"},
        {"title": "Go channels", "content": "CSP style concurrency",
         "tags": ["go"], "url": "/posts/go",
         "description": "Channels and select", "date": "2022-07-14"}
    ]"#;
    SearchIndex::from_json(json).expect("parse index")
}

#[test]
fn test_example_query_any_case() {
    let index = sample_index();

    for input in ["rust", "RUST", "Rust", "  rUsT "] {
        let outcome = index.search(&SearchQuery::parse(input), 2).unwrap();
        let SearchOutcome::Results(hits) = outcome else {
            panic!("expected a hit for {input:?}");
        };
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].url, "/a");
        assert_eq!(hits[0].title[0], Segment::Mark("Rust".to_string()));
    }

    assert_eq!(
        index.search(&SearchQuery::parse("go"), 2).unwrap(),
        SearchOutcome::NoResults
    );
}

#[test]
fn test_short_queries_hide_regardless_of_index() {
    let min_chars = ScriptConfig::default().search.min_query_chars;

    for index in [SearchIndex::empty(), sample_index(), blog_index()] {
        for input in ["", " ", "r", " g ", "博"] {
            assert_eq!(
                index.search(&SearchQuery::parse(input), min_chars).unwrap(),
                SearchOutcome::Hidden,
                "query {input:?}"
            );
        }
    }
}

#[test]
fn test_inclusion_matches_substring_rule() {
    let index = blog_index();

    for input in ["rust", "futures", "async", "博客", "hexo", "channels", "csp", "zzz", "go"] {
        let query = SearchQuery::parse(input);
        let expected: Vec<&str> = index
            .entries()
            .iter()
            .filter(|e| {
                e.title.to_lowercase().contains(&query.needle)
                    || e.content.to_lowercase().contains(&query.needle)
                    || e.tags.iter().any(|t| t.to_lowercase().contains(&query.needle))
            })
            .map(|e| e.url.as_str())
            .collect();

        let actual: Vec<String> = match index.search(&query, 2).unwrap() {
            SearchOutcome::Results(hits) => hits.into_iter().map(|h| h.url).collect(),
            SearchOutcome::NoResults => Vec::new(),
            SearchOutcome::Hidden => panic!("query {input:?} should run"),
        };

        assert_eq!(actual, expected, "query {input:?}");
    }
}

#[test]
fn test_highlight_preserves_text_and_marks_all() {
    let index = blog_index();
    let SearchOutcome::Results(hits) = index.search(&SearchQuery::parse("Channels"), 2).unwrap()
    else {
        panic!("expected results");
    };

    let hit = &hits[0];
    let title: String = hit.title.iter().map(Segment::text).collect();
    let description: String = hit.description.iter().map(Segment::text).collect();
    assert_eq!(title, "Go channels");
    assert_eq!(description, "Channels and select");

    for segment in hit.title.iter().chain(&hit.description) {
        if segment.is_mark() {
            assert_eq!(segment.text().to_lowercase(), "channels");
        } else {
            assert!(!segment.text().to_lowercase().contains("channels"));
        }
    }
}

#[test]
fn test_progress_stays_in_range() {
    let bounds = ContentBounds {
        top: 350.0,
        height: 4200.0,
    };

    let mut offset = -500.0;
    while offset < 10_000.0 {
        let page = page_progress(offset, 5000.0, 900.0);
        let content = content_progress(offset, 900.0, bounds);
        assert!((0.0..=100.0).contains(&page), "page {page} at {offset}");
        assert!((0.0..=100.0).contains(&content), "content {content} at {offset}");
        offset += 37.5;
    }

    assert_eq!(content_progress(0.0, 900.0, bounds), 0.0);
    assert_eq!(content_progress(9_000.0, 900.0, bounds), 100.0);
}

#[test]
fn test_content_progress_saturates_when_content_bottom_is_visible() {
    // Short page: the whole post fits in the viewport before any scrolling.
    let fits = ContentBounds {
        top: 300.0,
        height: 400.0,
    };
    assert_eq!(content_progress(0.0, 900.0, fits), 100.0);

    // The post starts below the furthest reachable scroll position.
    let low = ContentBounds {
        top: 900.0,
        height: 250.0,
    };
    assert_eq!(content_progress(400.0, 800.0, low), 100.0);
    assert_eq!(content_progress(0.0, 800.0, low), 0.0);
}

#[test]
fn test_navbar_boundaries() {
    let hide_offset = ScriptConfig::default().navbar.hide_offset;

    assert!(!navbar_hidden(1.0, 200.0, hide_offset));
    assert!(!navbar_hidden(0.0, 800.0, hide_offset));
    assert!(navbar_hidden(1.0, 201.0, hide_offset));

    let mut tracker = NavbarTracker::new(199.0, &ScriptConfig::default().navbar);
    assert!(!tracker.update(200.0).hidden);
    assert!(tracker.update(201.0).hidden);
    assert!(!tracker.update(201.0).hidden);
}
