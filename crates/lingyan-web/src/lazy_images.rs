//! Lazy loading for `img[data-src]`.

use lingyan_core::config::LazyImagesConfig;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlImageElement, Window};

use crate::{dom, error::Result, observe::EnterObserver, page::Feature};

fn load(element: &Element) {
    let Some(image) = element.dyn_ref::<HtmlImageElement>() else {
        return;
    };
    let Some(src) = image.get_attribute("data-src") else {
        return;
    };

    image.set_src(&src);
    let _ = image.remove_attribute("data-src");
    let _ = image.class_list().add_1("loaded");
}

/// Controller swapping in real image sources near the viewport.
pub struct LazyImages {
    _observer: Option<EnterObserver>,
}

impl LazyImages {
    pub fn mount(
        window: &Window,
        document: &Document,
        config: &LazyImagesConfig,
    ) -> Result<Option<Self>> {
        let images = dom::query_all(document, "img[data-src]")?;
        if images.is_empty() {
            return Ok(None);
        }

        if !EnterObserver::supported(window) {
            images.iter().for_each(load);
            return Ok(Some(Self { _observer: None }));
        }

        let observer = EnterObserver::new(0.0, &config.root_margin, load)?;
        for image in &images {
            observer.observe(image);
        }

        Ok(Some(Self {
            _observer: Some(observer),
        }))
    }
}

impl Feature for LazyImages {
    fn name(&self) -> &'static str {
        "lazy-images"
    }
}
