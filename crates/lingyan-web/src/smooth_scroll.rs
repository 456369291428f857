//! Smooth scrolling for in-page anchors.

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::{dom, error::Result, page::Feature};

/// Element id named by a same-page link, if any.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Delegated click handler for `a[href^="#"]`.
pub struct SmoothScroll {
    _click: EventListener,
}

impl SmoothScroll {
    pub fn mount(document: &Document) -> Result<Option<Self>> {
        if dom::query(document, r##"a[href^="#"]"##)?.is_none() {
            return Ok(None);
        }

        let doc = document.clone();
        let click = EventListener::new_with_options(document, "click", dom::active(), move |event| {
            on_click(&doc, event);
        });

        Ok(Some(Self { _click: click }))
    }
}

fn on_click(document: &Document, event: &Event) {
    let Some(link) = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(r##"a[href^="#"]"##).ok().flatten())
    else {
        return;
    };

    let Some(href) = link.get_attribute("href") else {
        return;
    };
    let Some(target) = fragment_target(&href).and_then(|id| find_target(document, id)) else {
        return;
    };

    event.prevent_default();
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Look up a fragment id, retrying with the percent-decoded form.
fn find_target(document: &Document, id: &str) -> Option<Element> {
    document.get_element_by_id(id).or_else(|| {
        let decoded = js_sys::decode_uri_component(id).ok().map(String::from)?;
        document.get_element_by_id(&decoded)
    })
}

impl Feature for SmoothScroll {
    fn name(&self) -> &'static str {
        "smooth-scroll"
    }
}
