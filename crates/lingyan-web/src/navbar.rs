//! Navbar scroll effects.
//!
//! Switches to a solid, blurred background past the solid offset, slides the
//! bar away while scrolling down past the hide offset, and re-applies the
//! background whenever the root `data-theme` attribute changes.

use std::{cell::RefCell, rc::Rc};

use gloo_events::EventListener;
use lingyan_core::{NavbarFrame, NavbarTracker, config::NavbarConfig, scroll::navbar_background};
use wasm_bindgen::{JsCast, prelude::*};
use web_sys::{Document, HtmlElement, MutationObserver, MutationObserverInit, Window};

use crate::{dom, error::Result, page::Feature};

struct NavbarState {
    navbar: HtmlElement,
    document: Document,
    config: NavbarConfig,
    tracker: NavbarTracker,
    solid: bool,
}

impl NavbarState {
    fn apply_background(&self) -> Result<()> {
        let theme = dom::current_theme(&self.document);
        let background = navbar_background(theme, self.solid, &self.config);
        dom::set_style(&self.navbar, "background", background)?;

        let blur = if self.solid { self.config.blur.as_str() } else { "none" };
        dom::set_style(&self.navbar, "backdrop-filter", blur)?;
        dom::set_style(&self.navbar, "-webkit-backdrop-filter", blur)?;
        Ok(())
    }

    fn apply(&mut self, frame: NavbarFrame) -> Result<()> {
        self.solid = frame.solid;
        self.apply_background()?;

        let transform = if frame.hidden {
            "translateY(-100%)"
        } else {
            "translateY(0)"
        };
        dom::set_style(&self.navbar, "transform", transform)
    }
}

/// Controller for `.navbar`.
pub struct Navbar {
    _scroll: EventListener,
    observer: MutationObserver,
    _on_mutation: Closure<dyn FnMut(js_sys::Array, MutationObserver)>,
}

impl Navbar {
    pub fn mount(
        window: &Window,
        document: &Document,
        config: &NavbarConfig,
    ) -> Result<Option<Self>> {
        let Some(navbar) = dom::query_html(document, ".navbar")? else {
            return Ok(None);
        };

        let tracker = NavbarTracker::new(dom::scroll_y(window), config);
        let state = NavbarState {
            navbar,
            document: document.clone(),
            config: config.clone(),
            solid: tracker.current().solid,
            tracker,
        };
        state.apply_background()?;
        let state = Rc::new(RefCell::new(state));

        let scroll_state = state.clone();
        let scroll_window = window.clone();
        let scroll = EventListener::new_with_options(window, "scroll", dom::passive(), move |_| {
            let offset = dom::scroll_y(&scroll_window);
            let mut state = scroll_state.borrow_mut();
            let frame = state.tracker.update(offset);
            if let Err(err) = state.apply(frame) {
                log::warn!("navbar update failed: {err}");
            }
        });

        let theme_state = state.clone();
        let on_mutation = Closure::<dyn FnMut(js_sys::Array, MutationObserver)>::new(
            move |_records: js_sys::Array, _observer: MutationObserver| {
                if let Err(err) = theme_state.borrow().apply_background() {
                    log::warn!("navbar theme update failed: {err}");
                }
            },
        );

        let observer = MutationObserver::new(on_mutation.as_ref().unchecked_ref())?;
        let options = MutationObserverInit::new();
        options.set_attributes(true);
        options.set_attribute_filter(&js_sys::Array::of1(&dom::THEME_ATTRIBUTE.into()));
        let root = dom::root(document)?;
        observer.observe_with_options(&root, &options)?;

        Ok(Some(Self {
            _scroll: scroll,
            observer,
            _on_mutation: on_mutation,
        }))
    }
}

impl Feature for Navbar {
    fn name(&self) -> &'static str {
        "navbar"
    }
}

impl Drop for Navbar {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
