//! Default constants for the page enhancement layer.
//!
//! Every value here is the default of a [`crate::config::PageConfig`] field.

// ── Theme ───────────────────────────────────────────────────────

/// Storage key holding the explicit night-mode preference.
pub const PREFERENCE_KEY: &str = "nuit";

/// Path fragment identifying the night syntax-highlighting style sheet.
pub const NIGHT_STYLESHEET: &str = "assets/css/vendor/obsidian.css";

/// Path fragment identifying the light syntax-highlighting style sheet.
pub const LIGHT_STYLESHEET: &str = "assets/css/vendor/github.css";

/// Marker class reflecting night mode for page styling.
pub const NIGHT_CLASS: &str = "night";

/// Element carrying the marker class.
pub const MARKER_TARGET: &str = "body";

/// Class shown on the night toggle buttons while night mode is active.
pub const PUSHED_CLASS: &str = "pushed";

/// First hour (local time) considered night when no preference is stored.
pub const NIGHT_STARTS_AT: u32 = 21;

/// Last hour (local time, inclusive) considered night.
pub const NIGHT_ENDS_AT: u32 = 8;

// ── Selectors ───────────────────────────────────────────────────

pub const MAIN_CONTENT_SELECTOR: &str = "#main_text";
pub const FOOTER_SELECTOR: &str = "footer";
pub const TOP_SELECTOR: &str = "#top";
pub const HEADINGS_SELECTOR: &str =
    "#main_text h1, #main_text h2, #main_text h3, #main_text h4, #main_text h5, #main_text h6";
pub const NIGHT_TOGGLE_SELECTOR: &str = ".nightButton";
pub const SCROLL_CONTROLS_SELECTOR: &str = ".botButton";
pub const SMOOTH_LINK_SELECTOR: &str = "a.smooth";

/// Id of the optional `<script type="application/json">` config element.
pub const CONFIG_ELEMENT_ID: &str = "docpage-config";

// ── Navigation ──────────────────────────────────────────────────

/// Duration of an animated scroll, in milliseconds.
pub const SCROLL_DURATION_MS: u32 = 300;

/// Slack around the scroll offset so the heading aligned with the viewport
/// top is never selected again.
pub const NAV_EPSILON_PX: f64 = 1.0;

/// Distance above the content top still treated as "inside the content" when
/// deciding where `g` jumps.
pub const TOP_SLACK_PX: f64 = 10.0;

// ── Permalink ───────────────────────────────────────────────────

pub const PERMALINK_CLASS: &str = "permalink";
pub const PERMALINK_APPEAR_CLASS: &str = "appear";
pub const PERMALINK_LABEL: &str = "Lien permanent";

/// Delay before a hovered heading's permalink becomes visible.
pub const PERMALINK_DELAY_MS: u32 = 600;

// ── Visibility ──────────────────────────────────────────────────

/// Controls appear once the scroll offset passes this far above the content.
pub const CONTROLS_LEAD_PX: f64 = 100.0;

/// Controls disappear this far before the footer.
pub const CONTROLS_TRAIL_PX: f64 = 500.0;
