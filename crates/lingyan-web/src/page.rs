//! Page lifecycle: configuration, feature mounting and teardown.
//!
//! Navbar, back-to-top and theme mount as soon as the DOM is ready. The rest
//! mount in two idle slots so they never compete with first paint.

use std::{cell::RefCell, rc::Rc};

use lingyan_core::ScriptConfig;
use web_sys::{Document, Window};

use crate::{
    animate::Animations,
    back_to_top::BackToTop,
    code_copy::CodeCopy,
    dom,
    error::Result,
    lazy_images::LazyImages,
    navbar::Navbar,
    progress::ReadingProgress,
    reading_time::ReadingTimeLabels,
    schedule::IdleTask,
    search::Search,
    share::Share,
    smooth_scroll::SmoothScroll,
    theme::{self, ThemeToggle},
};

/// Id of the optional JSON configuration block.
pub const CONFIG_ELEMENT_ID: &str = "lingyan-config";

/// A mounted feature. Dropping it detaches everything it installed.
pub trait Feature {
    fn name(&self) -> &'static str;
}

type Features = Rc<RefCell<Vec<Box<dyn Feature>>>>;

/// Read the page configuration block, falling back to defaults.
pub fn load_config(document: &Document) -> ScriptConfig {
    let Some(json) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return ScriptConfig::default();
    };

    match ScriptConfig::from_json(&json) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring invalid #{CONFIG_ELEMENT_ID}: {err}");
            ScriptConfig::default()
        }
    }
}

fn install<F: Feature + 'static>(features: &Features, name: &str, mounted: Result<Option<F>>) {
    match mounted {
        Ok(Some(feature)) => {
            log::debug!("mounted {name}");
            features.borrow_mut().push(Box::new(feature));
        }
        Ok(None) => log::debug!("{name} not present on this page"),
        Err(err) => log::error!("failed to mount {name}: {err}"),
    }
}

/// Everything the runtime installed on the current document.
pub struct Page {
    features: Features,
    _deferred: [IdleTask; 2],
}

impl Page {
    /// Mount all features for `config`.
    pub fn boot(config: ScriptConfig) -> Result<Self> {
        let window = dom::window()?;
        let document = dom::document()?;
        let config = Rc::new(config);
        let features: Features = Rc::new(RefCell::new(Vec::new()));

        if let Err(err) = theme::apply_initial(&window, &document, &config.theme) {
            log::warn!("failed to apply theme: {err}");
        }

        install(
            &features,
            "navbar",
            Navbar::mount(&window, &document, &config.navbar),
        );
        install(
            &features,
            "back-to-top",
            BackToTop::mount(&window, &document, &config.back_to_top),
        );
        install(
            &features,
            "theme-toggle",
            ThemeToggle::mount(&window, &document, &config.theme),
        );

        let interactive = defer(
            &window,
            &document,
            &config,
            &features,
            500,
            50,
            mount_interactive,
        );
        let cosmetic = defer(
            &window,
            &document,
            &config,
            &features,
            1000,
            100,
            mount_cosmetic,
        );

        Ok(Self {
            features,
            _deferred: [interactive, cosmetic],
        })
    }

    /// Names of the features mounted so far.
    pub fn feature_names(&self) -> Vec<&'static str> {
        self.features.borrow().iter().map(|f| f.name()).collect()
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        let count = self.features.borrow().len();
        self.features.borrow_mut().clear();
        log::debug!("tore down {count} features");
    }
}

fn defer(
    window: &Window,
    document: &Document,
    config: &Rc<ScriptConfig>,
    features: &Features,
    timeout_ms: u32,
    fallback_ms: u32,
    mount: fn(&Window, &Document, &ScriptConfig, &Features),
) -> IdleTask {
    let (task_window, task_document) = (window.clone(), document.clone());
    let (config, features) = (Rc::clone(config), Rc::clone(features));
    IdleTask::schedule(window, timeout_ms, fallback_ms, move || {
        mount(&task_window, &task_document, &config, &features);
    })
}

fn mount_interactive(
    window: &Window,
    document: &Document,
    config: &ScriptConfig,
    features: &Features,
) {
    install(
        features,
        "code-copy",
        CodeCopy::mount(window, document, &config.code_copy),
    );
    install(features, "search", Search::mount(document, &config.search));
}

fn mount_cosmetic(
    window: &Window,
    document: &Document,
    config: &ScriptConfig,
    features: &Features,
) {
    install(features, "smooth-scroll", SmoothScroll::mount(document));
    install(
        features,
        "reading-progress",
        ReadingProgress::mount(window, document),
    );
    install(
        features,
        "animations",
        Animations::mount(window, document, &config.animation),
    );
    install(
        features,
        "reading-time",
        ReadingTimeLabels::mount(document, &config.reading_time),
    );
    install(
        features,
        "lazy-images",
        LazyImages::mount(window, document, &config.lazy_images),
    );
    install(
        features,
        "share",
        Share::mount(window, document, &config.share),
    );
}
