//! Entrance animations for cards and article blocks.

use lingyan_core::config::AnimationConfig;
use web_sys::{Document, Element, Window};

use crate::{dom, error::Result, observe::EnterObserver, page::Feature};

/// Class that triggers the entrance animation.
pub const ENTERED_CLASS: &str = "animate-in";

const STYLE: &str = r#"
.animate-in {
    animation: fadeInUp 0.6s ease-out forwards;
}

@keyframes fadeInUp {
    from {
        opacity: 0;
        transform: translateY(30px);
    }
    to {
        opacity: 1;
        transform: translateY(0);
    }
}

.post-card:not(.animate-in) {
    opacity: 0;
    transform: translateY(30px);
}

.post-content > *:not(.animate-in) {
    opacity: 0;
    transform: translateY(20px);
}
"#;

/// Controller for scroll-triggered animations.
pub struct Animations {
    style: Option<Element>,
    _observer: Option<EnterObserver>,
}

impl Animations {
    pub fn mount(
        window: &Window,
        document: &Document,
        config: &AnimationConfig,
    ) -> Result<Option<Self>> {
        let targets = dom::query_all(document, &config.selector)?;
        if targets.is_empty() {
            return Ok(None);
        }

        if !EnterObserver::supported(window) {
            for target in &targets {
                target.class_list().add_1(ENTERED_CLASS)?;
            }
            return Ok(Some(Self {
                style: None,
                _observer: None,
            }));
        }

        let style = document.create_element("style")?;
        style.set_text_content(Some(STYLE));
        if let Some(head) = document.head() {
            head.append_child(&style)?;
        }

        let observer = EnterObserver::new(config.threshold, &config.root_margin, |target| {
            if let Err(err) = target.class_list().add_1(ENTERED_CLASS) {
                log::warn!("failed to start animation: {err:?}");
            }
        })?;
        for target in &targets {
            observer.observe(target);
        }

        Ok(Some(Self {
            style: Some(style),
            _observer: Some(observer),
        }))
    }
}

impl Drop for Animations {
    fn drop(&mut self) {
        if let Some(style) = &self.style {
            style.remove();
        }
    }
}

impl Feature for Animations {
    fn name(&self) -> &'static str {
        "animations"
    }
}
