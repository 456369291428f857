//! Lingyan Web Runtime
//!
//! Browser-side enhancements for pre-rendered Lingyan blog pages, compiled to
//! WebAssembly.
//!
//! # Features
//!
//! - **Navbar**: solid/blurred background on scroll, hide while scrolling down
//! - **Back to top**, **smooth anchor scrolling**, **reading progress**
//! - **Code copy** buttons with clipboard feedback
//! - **Search** over `/search.json` with debounced input and highlighting
//! - **Animations**, **lazy images**, **reading time**, **share**, **theme toggle**
//!
//! Each feature activates only when its markup is present on the page.
//!
//! # Example (HTML)
//!
//! ```html
//! <script type="application/json" id="lingyan-config">
//!   { "search": { "index_url": "/search.json" }, "log_level": "debug" }
//! </script>
//! <script type="module">
//!   import init from '/pkg/lingyan_web.js';
//!   await init();
//! </script>
//! ```

pub mod animate;
pub mod back_to_top;
pub mod clipboard;
pub mod code_copy;
pub mod dom;
pub mod error;
pub mod lazy_images;
pub mod navbar;
pub mod observe;
pub mod page;
pub mod progress;
pub mod reading_time;
pub mod schedule;
pub mod search;
pub mod share;
pub mod smooth_scroll;
pub mod theme;

use std::cell::RefCell;

pub use error::{Result, WebError};
use gloo_events::EventListener;
pub use page::{Feature, Page};
use wasm_bindgen::prelude::*;

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

/// Initialize the WASM module.
///
/// Sets up the panic hook and console logging, then mounts the page once the
/// DOM is ready.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Trace);

    if let Err(err) = schedule_boot() {
        log::error!("lingyan failed to start: {err}");
    }
}

fn schedule_boot() -> Result<()> {
    let document = dom::document()?;

    if still_loading(&document.ready_state()) {
        EventListener::once(&document, "DOMContentLoaded", |_| mount()).forget();
    } else {
        mount();
    }
    Ok(())
}

/// Whether `document.readyState` says the DOM is still being parsed.
fn still_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Mount all features on the current document, unless already mounted.
#[wasm_bindgen]
pub fn mount() {
    if PAGE.with(|slot| slot.borrow().is_some()) {
        return;
    }

    let booted = dom::document().and_then(|document| {
        let config = page::load_config(&document);
        log::set_max_level(config.log_level.to_filter());
        Page::boot(config)
    });

    match booted {
        Ok(page) => PAGE.with(|slot| *slot.borrow_mut() = Some(page)),
        Err(err) => log::error!("failed to mount page features: {err}"),
    }
}

/// Detach every listener, observer and timer installed by `mount`.
#[wasm_bindgen]
pub fn teardown() {
    let page = PAGE.with(|slot| slot.borrow_mut().take());
    drop(page);
}

/// Names of the currently mounted features.
#[wasm_bindgen(js_name = mountedFeatures)]
pub fn mounted_features() -> Vec<String> {
    PAGE.with(|slot| {
        slot.borrow()
            .as_ref()
            .map(|page| page.feature_names().into_iter().map(String::from).collect())
            .unwrap_or_default()
    })
}

/// Get the version of the runtime.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_version() {
        let version = get_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }

    #[test]
    fn test_still_loading() {
        assert!(still_loading("loading"));
        assert!(!still_loading("interactive"));
        assert!(!still_loading("complete"));
    }

    #[test]
    fn test_nothing_mounted_initially() {
        assert!(mounted_features().is_empty());
    }
}
