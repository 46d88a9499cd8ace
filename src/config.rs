//! Page configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page generator may embed a JSON object in a
//! `<script type="application/json" id="docpage-config">` element to rename
//! selectors, storage keys or timings. Every field is optional; anything left
//! out keeps the default from [`crate::consts`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;
use crate::error::PageError;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    pub theme: ThemeConfig,
    pub selectors: Selectors,
    pub navigation: NavigationConfig,
    pub permalink: PermalinkConfig,
    pub visibility: VisibilityConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub night_stylesheet: String,
    pub light_stylesheet: String,
    pub marker_class: String,
    pub marker_target: String,
    pub toggle_selector: String,
    pub pushed_class: String,
    pub night_starts_at: u32,
    pub night_ends_at: u32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: consts::PREFERENCE_KEY.to_owned(),
            night_stylesheet: consts::NIGHT_STYLESHEET.to_owned(),
            light_stylesheet: consts::LIGHT_STYLESHEET.to_owned(),
            marker_class: consts::NIGHT_CLASS.to_owned(),
            marker_target: consts::MARKER_TARGET.to_owned(),
            toggle_selector: consts::NIGHT_TOGGLE_SELECTOR.to_owned(),
            pushed_class: consts::PUSHED_CLASS.to_owned(),
            night_starts_at: consts::NIGHT_STARTS_AT,
            night_ends_at: consts::NIGHT_ENDS_AT,
        }
    }
}

/// Selectors for the elements the page generator is expected to emit.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Selectors {
    pub main_content: String,
    pub footer: String,
    pub top: String,
    pub headings: String,
    pub scroll_controls: String,
    pub smooth_links: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            main_content: consts::MAIN_CONTENT_SELECTOR.to_owned(),
            footer: consts::FOOTER_SELECTOR.to_owned(),
            top: consts::TOP_SELECTOR.to_owned(),
            headings: consts::HEADINGS_SELECTOR.to_owned(),
            scroll_controls: consts::SCROLL_CONTROLS_SELECTOR.to_owned(),
            smooth_links: consts::SMOOTH_LINK_SELECTOR.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavigationConfig {
    pub scroll_duration_ms: u32,
    pub epsilon_px: f64,
    pub top_slack_px: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            scroll_duration_ms: consts::SCROLL_DURATION_MS,
            epsilon_px: consts::NAV_EPSILON_PX,
            top_slack_px: consts::TOP_SLACK_PX,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PermalinkConfig {
    pub class: String,
    pub appear_class: String,
    pub label: String,
    pub delay_ms: u32,
}

impl Default for PermalinkConfig {
    fn default() -> Self {
        Self {
            class: consts::PERMALINK_CLASS.to_owned(),
            appear_class: consts::PERMALINK_APPEAR_CLASS.to_owned(),
            label: consts::PERMALINK_LABEL.to_owned(),
            delay_ms: consts::PERMALINK_DELAY_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VisibilityConfig {
    pub lead_px: f64,
    pub trail_px: f64,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self { lead_px: consts::CONTROLS_LEAD_PX, trail_px: consts::CONTROLS_TRAIL_PX }
    }
}

impl PageConfig {
    /// Parse and validate a JSON config object.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Config`] for malformed JSON, unknown fields,
    /// out-of-range values or a night window that does not wrap midnight.
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| PageError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Config`] naming the first offending field.
    pub fn validate(&self) -> Result<(), PageError> {
        for (name, hour) in [
            ("theme.night_starts_at", self.theme.night_starts_at),
            ("theme.night_ends_at", self.theme.night_ends_at),
        ] {
            if hour > 23 {
                return Err(PageError::Config(format!("{name} must be an hour in 0..=23, got {hour}")));
            }
        }
        // The night window wraps midnight.
        let (start, end) = (self.theme.night_starts_at, self.theme.night_ends_at);
        if start <= end {
            return Err(PageError::Config(format!(
                "theme.night_starts_at ({start}) must be later than theme.night_ends_at ({end})"
            )));
        }
        if self.navigation.scroll_duration_ms == 0 {
            return Err(PageError::Config("navigation.scroll_duration_ms must be positive".into()));
        }
        if !self.navigation.epsilon_px.is_finite() || self.navigation.epsilon_px < 0.0 {
            return Err(PageError::Config("navigation.epsilon_px must be a non-negative number".into()));
        }
        if self.theme.storage_key.is_empty() {
            return Err(PageError::Config("theme.storage_key must not be empty".into()));
        }
        Ok(())
    }
}
