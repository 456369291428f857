//! Reading-progress bar.
//!
//! Tracks the article body when the page has one and the whole document
//! otherwise. Scroll and resize events only request a frame; the width is
//! computed once per animation frame.

use std::{cell::RefCell, rc::Rc};

use gloo_events::EventListener;
use gloo_render::{AnimationFrame, request_animation_frame};
use lingyan_core::{
    ContentBounds,
    scroll::{content_progress, page_progress},
};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::{dom, error::Result, page::Feature};

/// What the bar measures.
enum Source {
    Page,
    Content(Element),
}

struct ProgressState {
    window: Window,
    document: Document,
    bar: HtmlElement,
    source: Source,
    frame: RefCell<Option<AnimationFrame>>,
}

impl ProgressState {
    fn measure(&self) -> f64 {
        let scroll_top = dom::scroll_y(&self.window);
        let viewport = dom::viewport_height(&self.window);

        match &self.source {
            Source::Page => {
                let height = self
                    .document
                    .document_element()
                    .map(|root| f64::from(root.scroll_height()))
                    .unwrap_or(0.0);
                page_progress(scroll_top, height, viewport)
            }
            Source::Content(content) => {
                let rect = content.get_bounding_client_rect();
                let bounds = ContentBounds::from_client_rect(rect.top(), rect.height(), scroll_top);
                content_progress(scroll_top, viewport, bounds)
            }
        }
    }

    fn render(&self) {
        let width = format!("{:.2}%", self.measure());
        if let Err(err) = dom::set_style(&self.bar, "width", &width) {
            log::warn!("progress update failed: {err}");
        }
    }

    fn request_frame(self: &Rc<Self>) {
        if self.frame.borrow().is_some() {
            return;
        }
        let state = Rc::downgrade(self);
        let handle = request_animation_frame(move |_| {
            if let Some(state) = state.upgrade() {
                state.frame.borrow_mut().take();
                state.render();
            }
        });
        *self.frame.borrow_mut() = Some(handle);
    }
}

/// Controller for the generated `.reading-progress` bar.
pub struct ReadingProgress {
    container: Element,
    _state: Rc<ProgressState>,
    _listeners: [EventListener; 2],
}

impl ReadingProgress {
    pub fn mount(window: &Window, document: &Document) -> Result<Option<Self>> {
        let source = match dom::query(document, ".post-content")? {
            Some(content) => Source::Content(content),
            None => Source::Page,
        };

        let container = document.create_element("div")?;
        container.set_class_name("reading-progress");
        let bar: HtmlElement = document.create_element("div")?.unchecked_into();
        bar.set_class_name("progress-bar");
        container.append_child(&bar)?;
        dom::body(document)?.append_child(&container)?;

        let state = Rc::new(ProgressState {
            window: window.clone(),
            document: document.clone(),
            bar,
            source,
            frame: RefCell::new(None),
        });
        state.render();

        let on_scroll = state.clone();
        let scroll = EventListener::new_with_options(window, "scroll", dom::passive(), move |_| {
            on_scroll.request_frame();
        });
        let on_resize = state.clone();
        let resize = EventListener::new_with_options(window, "resize", dom::passive(), move |_| {
            on_resize.request_frame();
        });

        Ok(Some(Self {
            container,
            _state: state,
            _listeners: [scroll, resize],
        }))
    }
}

impl Drop for ReadingProgress {
    fn drop(&mut self) {
        self.container.remove();
    }
}

impl Feature for ReadingProgress {
    fn name(&self) -> &'static str {
        "reading-progress"
    }
}
