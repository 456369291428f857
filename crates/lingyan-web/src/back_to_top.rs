//! Back-to-top button.

use gloo_events::EventListener;
use lingyan_core::{config::BackToTopConfig, scroll::back_to_top_visible};
use web_sys::{Document, ScrollBehavior, ScrollToOptions, Window};

use crate::{dom, error::Result, page::Feature};

/// Controller for `.back-to-top`.
pub struct BackToTop {
    _scroll: EventListener,
    _click: EventListener,
}

impl BackToTop {
    pub fn mount(
        window: &Window,
        document: &Document,
        config: &BackToTopConfig,
    ) -> Result<Option<Self>> {
        let Some(button) = dom::query(document, ".back-to-top")? else {
            return Ok(None);
        };

        let threshold = config.threshold;
        let scroll_window = window.clone();
        let scroll_button = button.clone();
        let scroll = EventListener::new_with_options(window, "scroll", dom::passive(), move |_| {
            let visible = back_to_top_visible(dom::scroll_y(&scroll_window), threshold);
            let _ = scroll_button
                .class_list()
                .toggle_with_force("visible", visible);
        });

        let click_window = window.clone();
        let click = EventListener::new(&button, "click", move |_| {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            click_window.scroll_to_with_scroll_to_options(&options);
        });

        Ok(Some(Self {
            _scroll: scroll,
            _click: click,
        }))
    }
}

impl Feature for BackToTop {
    fn name(&self) -> &'static str {
        "back-to-top"
    }
}
