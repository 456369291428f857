//! Theme preference: applied at load, flipped by `.theme-toggle`.

use gloo_events::EventListener;
use lingyan_core::{Theme, config::ThemeConfig};
use web_sys::{Document, Element, Storage, Window};

use crate::{dom, error::Result, page::Feature};

fn storage(window: &Window) -> Option<Storage> {
    window.local_storage().ok().flatten()
}

/// Stored preference, if any.
pub fn stored_theme(window: &Window, key: &str) -> Option<String> {
    storage(window)?.get_item(key).ok().flatten()
}

/// Write `theme` to the root element.
pub fn apply(document: &Document, theme: Theme) -> Result<()> {
    dom::root(document)?.set_attribute(dom::THEME_ATTRIBUTE, theme.as_str())?;
    Ok(())
}

/// Apply the stored or system theme to the root element.
pub fn apply_initial(window: &Window, document: &Document, config: &ThemeConfig) -> Result<Theme> {
    let stored = stored_theme(window, &config.storage_key);
    let theme = Theme::resolve(stored.as_deref(), dom::prefers_dark(window));
    apply(document, theme)?;
    Ok(theme)
}

struct ToggleState {
    window: Window,
    document: Document,
    toggle: Element,
    storage_key: String,
}

impl ToggleState {
    fn sync_toggle(&self, theme: Theme) {
        let icon = format!(r#"<i class="fas {}"></i>"#, theme.toggle_icon());
        self.toggle.set_inner_html(&icon);
        let pressed = if theme == Theme::Dark { "true" } else { "false" };
        let _ = self.toggle.set_attribute("aria-pressed", pressed);
    }

    fn flip(&self) -> Result<()> {
        let theme = dom::current_theme(&self.document).toggled();
        apply(&self.document, theme)?;
        self.sync_toggle(theme);

        match storage(&self.window) {
            Some(storage) => {
                if let Err(err) = storage.set_item(&self.storage_key, theme.as_str()) {
                    log::warn!("failed to persist theme: {err:?}");
                }
            }
            None => log::warn!("local storage unavailable, theme not persisted"),
        }
        Ok(())
    }
}

/// Controller for `.theme-toggle`.
pub struct ThemeToggle {
    _click: EventListener,
}

impl ThemeToggle {
    pub fn mount(
        window: &Window,
        document: &Document,
        config: &ThemeConfig,
    ) -> Result<Option<Self>> {
        let Some(toggle) = dom::query(document, ".theme-toggle")? else {
            return Ok(None);
        };

        let state = ToggleState {
            window: window.clone(),
            document: document.clone(),
            toggle: toggle.clone(),
            storage_key: config.storage_key.clone(),
        };
        state.sync_toggle(dom::current_theme(document));

        let click = EventListener::new(&toggle, "click", move |_| {
            if let Err(err) = state.flip() {
                log::error!("theme toggle failed: {err}");
            }
        });

        Ok(Some(Self { _click: click }))
    }
}

impl Feature for ThemeToggle {
    fn name(&self) -> &'static str {
        "theme-toggle"
    }
}
