//! Share buttons: native share sheet, or copy the link.

use std::{cell::RefCell, rc::Rc};

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use lingyan_core::config::ShareConfig;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Window};

use crate::{clipboard, dom, error::Result, page::Feature};

struct ShareButton {
    button: Element,
    window: Window,
    document: Document,
    feedback_ms: u32,
    feedback: RefCell<Option<Timeout>>,
}

impl ShareButton {
    fn target(&self) -> (String, String) {
        let url = self
            .button
            .get_attribute("data-url")
            .filter(|url| !url.is_empty())
            .or_else(|| self.window.location().href().ok())
            .unwrap_or_default();
        let title = self
            .button
            .get_attribute("data-title")
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| self.document.title());
        (url, title)
    }

    async fn share(self: Rc<Self>) {
        let (url, title) = self.target();
        let navigator = self.window.navigator();

        if clipboard::can_share(&navigator) {
            if let Err(err) = clipboard::share(&navigator, &title, &url).await {
                // Also raised when the user dismisses the share sheet.
                log::debug!("share cancelled or failed: {err}");
            }
            return;
        }

        match clipboard::write_text(&navigator, &url).await {
            Ok(()) => self.flash(),
            Err(err) => log::error!("failed to copy share link: {err}"),
        }
    }

    fn flash(self: &Rc<Self>) {
        let _ = self.button.class_list().add_1("shared");
        let this = Rc::downgrade(self);
        let timeout = Timeout::new(self.feedback_ms, move || {
            if let Some(this) = this.upgrade() {
                let _ = this.button.class_list().remove_1("shared");
            }
        });
        self.feedback.replace(Some(timeout));
    }
}

/// Controller for `.share-button` elements.
pub struct Share {
    _buttons: Vec<Rc<ShareButton>>,
    _listeners: Vec<EventListener>,
}

impl Share {
    pub fn mount(
        window: &Window,
        document: &Document,
        config: &ShareConfig,
    ) -> Result<Option<Self>> {
        let elements = dom::query_all(document, ".share-button")?;
        if elements.is_empty() {
            return Ok(None);
        }

        let mut buttons = Vec::with_capacity(elements.len());
        let mut listeners = Vec::with_capacity(elements.len());
        for button in elements {
            let state = Rc::new(ShareButton {
                button: button.clone(),
                window: window.clone(),
                document: document.clone(),
                feedback_ms: config.feedback_ms,
                feedback: RefCell::new(None),
            });

            let on_click = state.clone();
            let listener =
                EventListener::new_with_options(&button, "click", dom::active(), move |event| {
                    event.prevent_default();
                    spawn_local(on_click.clone().share());
                });
            listeners.push(listener);
            buttons.push(state);
        }

        Ok(Some(Self {
            _buttons: buttons,
            _listeners: listeners,
        }))
    }
}

impl Feature for Share {
    fn name(&self) -> &'static str {
        "share"
    }
}
