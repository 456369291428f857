//! Small DOM helpers shared by the feature controllers.

use gloo_events::{EventListenerOptions, EventListenerPhase};
use lingyan_core::Theme;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::{Result, WebError};

/// Root attribute carrying the live theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(WebError::Unavailable("window"))
}

pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or(WebError::Unavailable("document"))
}

/// The `<html>` element.
pub fn root(document: &Document) -> Result<Element> {
    document
        .document_element()
        .ok_or(WebError::Unavailable("document element"))
}

pub fn body(document: &Document) -> Result<HtmlElement> {
    document.body().ok_or(WebError::Unavailable("document body"))
}

/// First element matching `selector`, if any.
pub fn query(document: &Document, selector: &str) -> Result<Option<Element>> {
    Ok(document.query_selector(selector)?)
}

/// First element matching `selector` as an `HtmlElement`.
pub fn query_html(document: &Document, selector: &str) -> Result<Option<HtmlElement>> {
    Ok(query(document, selector)?.and_then(|el| el.dyn_into::<HtmlElement>().ok()))
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Current vertical scroll offset, zero if unavailable.
pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Viewport height in CSS pixels.
pub fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

/// Set an inline style property.
pub fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<()> {
    element.style().set_property(property, value)?;
    Ok(())
}

/// Options for scroll listeners that never call `preventDefault`.
pub fn passive() -> EventListenerOptions {
    EventListenerOptions {
        phase: EventListenerPhase::Bubble,
        passive: true,
    }
}

/// Options for listeners that may cancel the default action.
pub fn active() -> EventListenerOptions {
    EventListenerOptions {
        phase: EventListenerPhase::Bubble,
        passive: false,
    }
}

/// Whether `window` exposes a global named `name`.
pub fn supports(window: &Window, name: &str) -> bool {
    js_sys::Reflect::has(window, &name.into()).unwrap_or(false)
}

/// Theme currently applied to the root element.
pub fn current_theme(document: &Document) -> Theme {
    let value = document
        .document_element()
        .and_then(|root| root.get_attribute(THEME_ATTRIBUTE));
    Theme::from_attribute(value.as_deref())
}

/// Whether the system prefers a dark colour scheme.
pub fn prefers_dark(window: &Window) -> bool {
    window
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .is_some_and(|query| query.matches())
}
