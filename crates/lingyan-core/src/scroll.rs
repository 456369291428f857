//! Scroll-derived state: navbar visibility, back-to-top and reading progress.

use crate::{config::NavbarConfig, theme::Theme};

/// Navbar presentation for one scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarFrame {
    /// Past the solid offset: opaque background and blur.
    pub solid: bool,
    /// Translated off-screen.
    pub hidden: bool,
}

/// Whether the navbar should hide for a scroll step.
pub fn navbar_hidden(delta: f64, offset: f64, hide_offset: f64) -> bool {
    delta > 0.0 && offset > hide_offset
}

/// Tracks the previous scroll offset between scroll events.
#[derive(Debug, Clone)]
pub struct NavbarTracker {
    last_offset: f64,
    solid_offset: f64,
    hide_offset: f64,
}

impl NavbarTracker {
    pub fn new(initial_offset: f64, config: &NavbarConfig) -> Self {
        Self {
            last_offset: initial_offset,
            solid_offset: config.solid_offset,
            hide_offset: config.hide_offset,
        }
    }

    /// Frame for the current offset without consuming a scroll step.
    pub fn current(&self) -> NavbarFrame {
        NavbarFrame {
            solid: self.last_offset > self.solid_offset,
            hidden: false,
        }
    }

    /// Advance to `offset` and compute the frame for it.
    pub fn update(&mut self, offset: f64) -> NavbarFrame {
        let delta = offset - self.last_offset;
        self.last_offset = offset;

        NavbarFrame {
            solid: offset > self.solid_offset,
            hidden: navbar_hidden(delta, offset, self.hide_offset),
        }
    }
}

/// Navbar background colour for a theme and solidity.
pub fn navbar_background(theme: Theme, solid: bool, config: &NavbarConfig) -> &str {
    match (theme, solid) {
        (Theme::Dark, _) => &config.dark_background,
        (Theme::Light, true) => &config.light_solid,
        (Theme::Light, false) => &config.light_translucent,
    }
}

/// Whether the back-to-top button is visible at `offset`.
pub fn back_to_top_visible(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Progress through the whole scrollable page, in percent.
///
/// A page that does not scroll reports 100.
pub fn page_progress(scroll_top: f64, document_height: f64, viewport_height: f64) -> f64 {
    let extent = document_height - viewport_height;
    if extent <= 0.0 {
        return 100.0;
    }
    clamp_percent(scroll_top / extent * 100.0)
}

/// Geometry of the article body in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentBounds {
    /// Distance from the document top to the content top.
    pub top: f64,
    pub height: f64,
}

impl ContentBounds {
    /// Bounds from a client rect measured at `scroll_top`.
    pub fn from_client_rect(rect_top: f64, rect_height: f64, scroll_top: f64) -> Self {
        Self {
            top: rect_top + scroll_top,
            height: rect_height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Progress through the article body, in percent.
///
/// 100 once the viewport bottom reaches the content bottom, otherwise zero
/// until the content top reaches the viewport top.
pub fn content_progress(scroll_top: f64, viewport_height: f64, bounds: ContentBounds) -> f64 {
    if scroll_top + viewport_height >= bounds.bottom() {
        return 100.0;
    }

    let start = bounds.top;
    let end = bounds.bottom() - viewport_height;
    if scroll_top < start {
        return 0.0;
    }
    clamp_percent((scroll_top - start) / (end - start) * 100.0)
}

fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navbar_hidden_boundaries() {
        assert!(!navbar_hidden(10.0, 200.0, 200.0));
        assert!(navbar_hidden(10.0, 200.5, 200.0));
        assert!(!navbar_hidden(0.0, 500.0, 200.0));
        assert!(!navbar_hidden(-5.0, 500.0, 200.0));
    }

    #[test]
    fn test_tracker_hides_on_scroll_down() {
        let mut tracker = NavbarTracker::new(0.0, &NavbarConfig::default());

        let frame = tracker.update(150.0);
        assert!(frame.solid);
        assert!(!frame.hidden);

        let frame = tracker.update(250.0);
        assert!(frame.hidden);

        let frame = tracker.update(240.0);
        assert!(!frame.hidden);

        let frame = tracker.update(240.0);
        assert!(!frame.hidden);
    }

    #[test]
    fn test_tracker_solid_boundary() {
        let mut tracker = NavbarTracker::new(0.0, &NavbarConfig::default());
        assert!(!tracker.update(100.0).solid);
        assert!(tracker.update(101.0).solid);
        assert!(tracker.current().solid);
    }

    #[test]
    fn test_navbar_background() {
        let config = NavbarConfig::default();
        assert_eq!(
            navbar_background(Theme::Dark, false, &config),
            "rgba(26, 32, 44, 0.95)"
        );
        assert_eq!(
            navbar_background(Theme::Dark, true, &config),
            "rgba(26, 32, 44, 0.95)"
        );
        assert_eq!(
            navbar_background(Theme::Light, true, &config),
            "rgba(255, 255, 255, 0.95)"
        );
        assert_eq!(
            navbar_background(Theme::Light, false, &config),
            "rgba(255, 255, 255, 0.8)"
        );
    }

    #[test]
    fn test_back_to_top_visible() {
        assert!(!back_to_top_visible(300.0, 300.0));
        assert!(back_to_top_visible(301.0, 300.0));
    }

    #[test]
    fn test_page_progress() {
        assert_eq!(page_progress(0.0, 2000.0, 1000.0), 0.0);
        assert_eq!(page_progress(500.0, 2000.0, 1000.0), 50.0);
        assert_eq!(page_progress(1000.0, 2000.0, 1000.0), 100.0);
        assert_eq!(page_progress(1500.0, 2000.0, 1000.0), 100.0);
        assert_eq!(page_progress(-40.0, 2000.0, 1000.0), 0.0);
    }

    #[test]
    fn test_page_progress_short_page() {
        assert_eq!(page_progress(0.0, 800.0, 1000.0), 100.0);
    }

    #[test]
    fn test_content_progress() {
        let bounds = ContentBounds {
            top: 400.0,
            height: 2000.0,
        };
        // end = 400 + 2000 - 800 = 1600
        assert_eq!(content_progress(0.0, 800.0, bounds), 0.0);
        assert_eq!(content_progress(400.0, 800.0, bounds), 0.0);
        assert_eq!(content_progress(1000.0, 800.0, bounds), 50.0);
        assert_eq!(content_progress(1600.0, 800.0, bounds), 100.0);
        assert_eq!(content_progress(5000.0, 800.0, bounds), 100.0);
    }

    #[test]
    fn test_content_shorter_than_viewport() {
        let bounds = ContentBounds {
            top: 200.0,
            height: 300.0,
        };
        // Viewport bottom (900) is already past the content bottom (500).
        assert_eq!(content_progress(0.0, 800.0, bounds), 100.0);
        assert_eq!(content_progress(200.0, 800.0, bounds), 100.0);
    }

    #[test]
    fn test_content_bounds_from_rect() {
        let bounds = ContentBounds::from_client_rect(-100.0, 900.0, 600.0);
        assert_eq!(bounds.top, 500.0);
        assert_eq!(bounds.bottom(), 1400.0);
    }
}
