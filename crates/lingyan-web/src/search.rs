//! Search box over the static JSON index.
//!
//! The index is fetched once, on first focus or input or after the preload
//! delay. Until it arrives every query runs against an empty index, so typing
//! early shows "no results" rather than an error.

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use gloo_events::EventListener;
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use lingyan_core::{
    SearchHit, SearchIndex, SearchOutcome, SearchQuery, Segment, config::SearchConfig,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement, Node};

use crate::{
    dom,
    error::{Result, WebError},
    page::Feature,
    schedule::Debouncer,
};

/// Load state of the search index.
enum IndexState {
    Idle,
    Loading,
    Ready(SearchIndex),
    Failed,
}

/// Fetch and parse the search index.
pub async fn fetch_index(url: &str) -> Result<SearchIndex> {
    let response = Request::get(url).send().await?;

    if !response.ok() {
        return Err(WebError::Http {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let json = response.text().await?;
    Ok(SearchIndex::from_json(&json)?)
}

struct SearchState {
    document: Document,
    input: HtmlInputElement,
    panel: HtmlElement,
    config: SearchConfig,
    index: RefCell<IndexState>,
    debouncer: Debouncer,
}

impl SearchState {
    fn ensure_loaded(self: &Rc<Self>) {
        {
            let mut index = self.index.borrow_mut();
            if !matches!(*index, IndexState::Idle) {
                return;
            }
            *index = IndexState::Loading;
        }

        spawn_local(Rc::clone(self).load());
    }

    async fn load(self: Rc<Self>) {
        match fetch_index(&self.config.index_url).await {
            Ok(index) => {
                log::info!(
                    "search index loaded: {} entries from {}",
                    index.len(),
                    self.config.index_url
                );
                *self.index.borrow_mut() = IndexState::Ready(index);

                if self.input_focused() {
                    self.run_query();
                }
            }
            Err(err) => {
                log::error!("failed to load search index: {err}");
                *self.index.borrow_mut() = IndexState::Failed;
            }
        }
    }

    fn input_focused(&self) -> bool {
        let input: &Element = self.input.as_ref();
        self.document
            .active_element()
            .is_some_and(|active| &active == input)
    }

    fn run_query(&self) {
        let query = SearchQuery::parse(&self.input.value());
        let outcome = match &*self.index.borrow() {
            IndexState::Ready(index) => index.search(&query, self.config.min_query_chars),
            IndexState::Idle | IndexState::Loading | IndexState::Failed => {
                SearchIndex::empty().search(&query, self.config.min_query_chars)
            }
        };

        let rendered = outcome
            .map_err(WebError::from)
            .and_then(|outcome| self.render(&outcome));
        if let Err(err) = rendered {
            log::error!("search failed: {err}");
        }
    }

    fn render(&self, outcome: &SearchOutcome) -> Result<()> {
        match outcome {
            SearchOutcome::Hidden => return self.hide(),
            SearchOutcome::NoResults => {
                self.panel.set_inner_html("");
                let empty = self.document.create_element("div")?;
                empty.set_class_name("search-no-results");
                empty.set_text_content(Some(&self.config.no_results_text));
                self.panel.append_child(&empty)?;
            }
            SearchOutcome::Results(hits) => {
                self.panel.set_inner_html("");
                for hit in hits {
                    let item = self.render_hit(hit)?;
                    self.panel.append_child(&item)?;
                }
            }
        }

        dom::set_style(&self.panel, "display", "block")
    }

    fn render_hit(&self, hit: &SearchHit) -> Result<Element> {
        let item = self.document.create_element("div")?;
        item.set_class_name("search-result-item");

        let link = self.document.create_element("a")?;
        link.set_attribute("href", &hit.url)?;

        let title = self.document.create_element("h3")?;
        self.append_segments(&title, &hit.title)?;
        let description = self.document.create_element("p")?;
        self.append_segments(&description, &hit.description)?;
        let date = self.document.create_element("small")?;
        date.set_text_content(Some(&hit.date));

        link.append_child(&title)?;
        link.append_child(&description)?;
        link.append_child(&date)?;
        item.append_child(&link)?;
        Ok(item)
    }

    fn append_segments(&self, parent: &Element, segments: &[Segment]) -> Result<()> {
        for segment in segments {
            match segment {
                Segment::Plain(text) => {
                    parent.append_child(&self.document.create_text_node(text))?;
                }
                Segment::Mark(text) => {
                    let mark = self.document.create_element("mark")?;
                    mark.set_text_content(Some(text));
                    parent.append_child(&mark)?;
                }
            }
        }
        Ok(())
    }

    fn hide(&self) -> Result<()> {
        dom::set_style(&self.panel, "display", "none")
    }

    /// Whether a click on `target` counts as inside the search UI.
    fn contains(&self, target: &Node) -> bool {
        if self.input.contains(Some(target)) || self.panel.contains(Some(target)) {
            return true;
        }
        let element = match target.dyn_ref::<Element>() {
            Some(element) => Some(element.clone()),
            None => target.parent_element(),
        };
        element
            .and_then(|el| el.closest(".search-container").ok().flatten())
            .is_some()
    }
}

/// Controller for `.search-input` and `.search-results`.
pub struct Search {
    state: Rc<SearchState>,
    _preload: Timeout,
    _listeners: [EventListener; 3],
}

impl Search {
    pub fn mount(document: &Document, config: &SearchConfig) -> Result<Option<Self>> {
        let Some(input) = dom::query(document, ".search-input")?
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        else {
            return Ok(None);
        };
        let Some(panel) = dom::query_html(document, ".search-results")? else {
            return Ok(None);
        };

        let state = Rc::new(SearchState {
            document: document.clone(),
            input: input.clone(),
            panel,
            config: config.clone(),
            index: RefCell::new(IndexState::Idle),
            debouncer: Debouncer::new(config.debounce_ms),
        });

        let on_input = Rc::clone(&state);
        let input_listener = EventListener::new(&input, "input", move |_| {
            on_input.ensure_loaded();
            let weak = Rc::downgrade(&on_input);
            on_input.debouncer.call(move || {
                if let Some(state) = weak.upgrade() {
                    state.run_query();
                }
            });
        });

        let on_focus = Rc::clone(&state);
        let focus_listener = EventListener::new(&input, "focus", move |_| {
            on_focus.ensure_loaded();
        });

        let on_click = Rc::downgrade(&state);
        let click_listener = EventListener::new(document, "click", move |event| {
            hide_on_outside_click(&on_click, event);
        });

        let preload = Rc::downgrade(&state);
        let preload = Timeout::new(config.preload_delay_ms, move || {
            if let Some(state) = preload.upgrade() {
                state.ensure_loaded();
            }
        });

        Ok(Some(Self {
            state,
            _preload: preload,
            _listeners: [input_listener, focus_listener, click_listener],
        }))
    }
}

fn hide_on_outside_click(state: &Weak<SearchState>, event: &Event) {
    let Some(state) = state.upgrade() else {
        return;
    };
    let Some(target) = event.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
        return;
    };
    if !state.contains(&target) {
        let _ = state.hide();
    }
}

impl Drop for Search {
    fn drop(&mut self) {
        self.state.debouncer.cancel();
    }
}

impl Feature for Search {
    fn name(&self) -> &'static str {
        "search"
    }
}
