//! Copy buttons for code blocks.

use std::{cell::RefCell, rc::Rc};

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use lingyan_core::{CopyFeedback, config::CodeCopyConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlElement, Navigator, Window};

use crate::{clipboard, dom, error::Result, page::Feature};

struct CopyButton {
    button: Element,
    code: Element,
    feedback_ms: u32,
    revert: RefCell<Option<Timeout>>,
}

impl CopyButton {
    fn show(&self, feedback: CopyFeedback) {
        self.button.set_inner_html(feedback.icon_html());

        let classes = self.button.class_list();
        for class in CopyFeedback::CLASSES {
            let _ = classes.remove_1(class);
        }
        if let Some(class) = feedback.class() {
            let _ = classes.add_1(class);
        }
    }

    fn finish(self: &Rc<Self>, feedback: CopyFeedback) {
        self.show(feedback);

        let timeout = feedback.reverts().then(|| {
            let this = Rc::downgrade(self);
            Timeout::new(self.feedback_ms, move || {
                if let Some(this) = this.upgrade() {
                    this.show(CopyFeedback::Idle);
                }
            })
        });
        self.revert.replace(timeout);
    }

    async fn copy(self: Rc<Self>, navigator: Navigator) {
        let text = self.code.text_content().unwrap_or_default();
        let feedback = match clipboard::write_text(&navigator, &text).await {
            Ok(()) => CopyFeedback::Copied,
            Err(err) => {
                log::error!("copy to clipboard failed: {err}");
                CopyFeedback::Failed
            }
        };
        self.finish(feedback);
    }
}

/// Controller adding a copy button to every code block.
pub struct CodeCopy {
    buttons: Vec<Rc<CopyButton>>,
    _listeners: Vec<EventListener>,
}

impl CodeCopy {
    pub fn mount(
        window: &Window,
        document: &Document,
        config: &CodeCopyConfig,
    ) -> Result<Option<Self>> {
        let blocks = dom::query_all(document, &config.selector)?;
        if blocks.is_empty() {
            return Ok(None);
        }

        let mut buttons = Vec::with_capacity(blocks.len());
        let mut listeners = Vec::with_capacity(blocks.len());

        for code in blocks {
            let Some(container) = code.parent_element() else {
                continue;
            };
            if let Some(container) = container.dyn_ref::<HtmlElement>() {
                dom::set_style(container, "position", "relative")?;
            }

            let button = document.create_element("button")?;
            button.set_class_name("code-copy-btn");
            button.set_attribute("type", "button")?;
            button.set_attribute("aria-label", &config.aria_label)?;
            button.set_inner_html(CopyFeedback::Idle.icon_html());
            container.append_child(&button)?;

            let state = Rc::new(CopyButton {
                button: button.clone(),
                code,
                feedback_ms: config.feedback_ms,
                revert: RefCell::new(None),
            });

            let click_state = state.clone();
            let navigator = window.navigator();
            listeners.push(EventListener::new(&button, "click", move |_| {
                spawn_local(click_state.clone().copy(navigator.clone()));
            }));
            buttons.push(state);
        }

        Ok(Some(Self {
            buttons,
            _listeners: listeners,
        }))
    }
}

impl Drop for CodeCopy {
    fn drop(&mut self) {
        for state in &self.buttons {
            state.button.remove();
        }
    }
}

impl Feature for CodeCopy {
    fn name(&self) -> &'static str {
        "code-copy"
    }
}
