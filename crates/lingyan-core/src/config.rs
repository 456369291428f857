//! Runtime configuration for the page scripts.
//!
//! Every field has a default, so a page without a configuration block (or with
//! a partial one) behaves like the stock blog theme.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Main configuration structure, read from the page's JSON config block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptConfig {
    /// Maximum log level forwarded to the browser console.
    pub log_level: LogLevel,

    /// Navbar scroll behaviour.
    pub navbar: NavbarConfig,

    /// Back-to-top button.
    pub back_to_top: BackToTopConfig,

    /// Code block copy buttons.
    pub code_copy: CodeCopyConfig,

    /// Client-side search.
    pub search: SearchConfig,

    /// Entrance animations.
    pub animation: AnimationConfig,

    /// Reading-time label.
    pub reading_time: ReadingTimeConfig,

    /// Lazy image loading.
    pub lazy_images: LazyImagesConfig,

    /// Share buttons.
    pub share: ShareConfig,

    /// Theme persistence.
    pub theme: ThemeConfig,
}

/// Console log level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// The matching `log` filter.
    pub fn to_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }

    /// The matching `log` level.
    pub fn to_level(self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

/// Navbar configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavbarConfig {
    /// Offset (px) past which the navbar turns solid and blurred.
    #[serde(default = "default_solid_offset")]
    pub solid_offset: f64,

    /// Offset (px) past which scrolling down hides the navbar.
    #[serde(default = "default_hide_offset")]
    pub hide_offset: f64,

    /// Light theme background once scrolled past `solid_offset`.
    #[serde(default = "default_light_solid")]
    pub light_solid: String,

    /// Light theme background near the top of the page.
    #[serde(default = "default_light_translucent")]
    pub light_translucent: String,

    /// Dark theme background.
    #[serde(default = "default_dark_background")]
    pub dark_background: String,

    /// Backdrop filter applied once solid.
    #[serde(default = "default_blur")]
    pub blur: String,
}

/// Back-to-top configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackToTopConfig {
    /// Offset (px) past which the button is shown.
    #[serde(default = "default_back_to_top_threshold")]
    pub threshold: f64,
}

/// Code copy configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeCopyConfig {
    /// Selector for code blocks that receive a copy button.
    #[serde(default = "default_code_selector")]
    pub selector: String,

    /// How long success/failure feedback stays visible.
    #[serde(default = "default_copy_feedback_ms")]
    pub feedback_ms: u32,

    /// Accessible label for the button.
    #[serde(default = "default_copy_label")]
    pub aria_label: String,
}

/// Search configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// URL of the JSON search index.
    #[serde(default = "default_index_url")]
    pub index_url: String,

    /// Queries shorter than this (in characters) hide the results.
    #[serde(default = "default_min_query_chars")]
    pub min_query_chars: usize,

    /// Quiet period before a query runs.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u32,

    /// Delay before the index is fetched if the user has not touched search yet.
    #[serde(default = "default_preload_delay_ms")]
    pub preload_delay_ms: u32,

    /// Placeholder shown when nothing matches.
    #[serde(default = "default_no_results_text")]
    pub no_results_text: String,
}

/// Animation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Elements that animate in.
    #[serde(default = "default_animation_selector")]
    pub selector: String,

    /// Visible fraction that triggers the animation.
    #[serde(default = "default_animation_threshold")]
    pub threshold: f64,

    /// Observer root margin.
    #[serde(default = "default_animation_root_margin")]
    pub root_margin: String,
}

/// Reading time configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingTimeConfig {
    #[serde(default = "default_words_per_minute")]
    pub words_per_minute: u32,

    /// Label template; `{minutes}` is replaced with the estimate.
    #[serde(default = "default_reading_label")]
    pub label: String,
}

/// Lazy image configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LazyImagesConfig {
    #[serde(default = "default_lazy_root_margin")]
    pub root_margin: String,
}

/// Share configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareConfig {
    /// How long the clipboard fallback feedback stays visible.
    #[serde(default = "default_share_feedback_ms")]
    pub feedback_ms: u32,
}

/// Theme configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Local storage key holding the preference.
    #[serde(default = "default_theme_storage_key")]
    pub storage_key: String,
}

// Default value functions
fn default_solid_offset() -> f64 {
    100.0
}

fn default_hide_offset() -> f64 {
    200.0
}

fn default_light_solid() -> String {
    "rgba(255, 255, 255, 0.95)".to_string()
}

fn default_light_translucent() -> String {
    "rgba(255, 255, 255, 0.8)".to_string()
}

fn default_dark_background() -> String {
    "rgba(26, 32, 44, 0.95)".to_string()
}

fn default_blur() -> String {
    "blur(10px)".to_string()
}

fn default_back_to_top_threshold() -> f64 {
    300.0
}

fn default_code_selector() -> String {
    r#"pre[class*="language-"] code, pre code"#.to_string()
}

fn default_copy_feedback_ms() -> u32 {
    3000
}

fn default_copy_label() -> String {
    "Copy code".to_string()
}

fn default_index_url() -> String {
    "/search.json".to_string()
}

fn default_min_query_chars() -> usize {
    2
}

fn default_debounce_ms() -> u32 {
    300
}

fn default_preload_delay_ms() -> u32 {
    1000
}

fn default_no_results_text() -> String {
    "No results found".to_string()
}

fn default_animation_selector() -> String {
    ".post-card, .post-header, .post-content > *".to_string()
}

fn default_animation_threshold() -> f64 {
    0.1
}

fn default_animation_root_margin() -> String {
    "0px 0px -50px 0px".to_string()
}

fn default_words_per_minute() -> u32 {
    200
}

fn default_reading_label() -> String {
    "{minutes} min read".to_string()
}

fn default_lazy_root_margin() -> String {
    "50px 0px".to_string()
}

fn default_share_feedback_ms() -> u32 {
    2000
}

fn default_theme_storage_key() -> String {
    "theme".to_string()
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            solid_offset: default_solid_offset(),
            hide_offset: default_hide_offset(),
            light_solid: default_light_solid(),
            light_translucent: default_light_translucent(),
            dark_background: default_dark_background(),
            blur: default_blur(),
        }
    }
}

impl Default for BackToTopConfig {
    fn default() -> Self {
        Self {
            threshold: default_back_to_top_threshold(),
        }
    }
}

impl Default for CodeCopyConfig {
    fn default() -> Self {
        Self {
            selector: default_code_selector(),
            feedback_ms: default_copy_feedback_ms(),
            aria_label: default_copy_label(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            index_url: default_index_url(),
            min_query_chars: default_min_query_chars(),
            debounce_ms: default_debounce_ms(),
            preload_delay_ms: default_preload_delay_ms(),
            no_results_text: default_no_results_text(),
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            selector: default_animation_selector(),
            threshold: default_animation_threshold(),
            root_margin: default_animation_root_margin(),
        }
    }
}

impl Default for ReadingTimeConfig {
    fn default() -> Self {
        Self {
            words_per_minute: default_words_per_minute(),
            label: default_reading_label(),
        }
    }
}

impl Default for LazyImagesConfig {
    fn default() -> Self {
        Self {
            root_margin: default_lazy_root_margin(),
        }
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            feedback_ms: default_share_feedback_ms(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: default_theme_storage_key(),
        }
    }
}

impl ScriptConfig {
    /// Parse and validate a JSON configuration block.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ScriptConfig = serde_json::from_str(json).map_err(|e| {
            CoreError::config_with_source("Failed to parse configuration block", e)
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.search.index_url.trim().is_empty() {
            return Err(CoreError::config("search.index_url cannot be empty"));
        }

        if self.search.min_query_chars == 0 {
            return Err(CoreError::config(
                "search.min_query_chars must be at least 1",
            ));
        }

        if self.reading_time.words_per_minute == 0 {
            return Err(CoreError::config(
                "reading_time.words_per_minute must be positive",
            ));
        }

        if !(0.0..=1.0).contains(&self.animation.threshold) {
            return Err(CoreError::config(
                "animation.threshold must be between 0 and 1",
            ));
        }

        if self.navbar.hide_offset < self.navbar.solid_offset {
            log::warn!("navbar.hide_offset is below navbar.solid_offset");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ScriptConfig::default();

        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.navbar.solid_offset, 100.0);
        assert_eq!(config.navbar.hide_offset, 200.0);
        assert_eq!(config.back_to_top.threshold, 300.0);
        assert_eq!(config.code_copy.feedback_ms, 3000);
        assert_eq!(config.search.index_url, "/search.json");
        assert_eq!(config.search.min_query_chars, 2);
        assert_eq!(config.search.debounce_ms, 300);
        assert_eq!(config.animation.root_margin, "0px 0px -50px 0px");
        assert_eq!(config.reading_time.words_per_minute, 200);
        assert_eq!(config.theme.storage_key, "theme");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{
            "log_level": "debug",
            "search": { "index_url": "/blog/search.json", "debounce_ms": 150 },
            "navbar": { "hide_offset": 320 }
        }"#;

        let config = ScriptConfig::from_json(json).expect("parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.search.index_url, "/blog/search.json");
        assert_eq!(config.search.debounce_ms, 150);
        assert_eq!(config.search.min_query_chars, 2);
        assert_eq!(config.navbar.hide_offset, 320.0);
        assert_eq!(config.navbar.solid_offset, 100.0);
        assert_eq!(config.code_copy.aria_label, "Copy code");
    }

    #[test]
    fn test_empty_object_is_default() {
        let config = ScriptConfig::from_json("{}").expect("parse config");
        assert_eq!(config, ScriptConfig::default());
    }

    #[test]
    fn test_invalid_json() {
        let result = ScriptConfig::from_json("{ not json");
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to parse configuration block")
        );
    }

    #[test]
    fn test_validation_min_query_chars() {
        let result = ScriptConfig::from_json(r#"{ "search": { "min_query_chars": 0 } }"#);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("min_query_chars"));
    }

    #[test]
    fn test_validation_threshold() {
        let result = ScriptConfig::from_json(r#"{ "animation": { "threshold": 1.5 } }"#);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("threshold"));
    }

    #[test]
    fn test_validation_empty_index_url() {
        let result = ScriptConfig::from_json(r#"{ "search": { "index_url": "  " } }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_log_level_filter() {
        assert_eq!(LogLevel::Warn.to_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Trace.to_level(), log::Level::Trace);
    }
}
