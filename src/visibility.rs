//! Opacity of the floating scroll-control buttons.
//!
//! Buttons are shown only while the reader is inside the content: from just
//! above the content top until well before the footer.

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

use crate::config::{Selectors, VisibilityConfig};
use crate::error::PageError;
use crate::gateway::DocumentGateway;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlsVisibility {
    Opaque,
    Transparent,
}

impl ControlsVisibility {
    /// CSS `opacity` value.
    #[must_use]
    pub fn css_opacity(self) -> &'static str {
        match self {
            Self::Opaque => "1",
            Self::Transparent => "0",
        }
    }
}

/// Opaque iff `content_top - lead < scroll_top < footer_top - trail`.
#[must_use]
pub fn controls_visibility(
    scroll_top: f64,
    content_top: f64,
    footer_top: f64,
    config: &VisibilityConfig,
) -> ControlsVisibility {
    if scroll_top > content_top - config.lead_px && scroll_top < footer_top - config.trail_px {
        ControlsVisibility::Opaque
    } else {
        ControlsVisibility::Transparent
    }
}

pub struct VisibilityController {
    config: VisibilityConfig,
    content: String,
    footer: String,
    controls: String,
}

impl VisibilityController {
    #[must_use]
    pub fn new(config: &VisibilityConfig, selectors: &Selectors) -> Self {
        Self {
            config: config.clone(),
            content: selectors.main_content.clone(),
            footer: selectors.footer.clone(),
            controls: selectors.scroll_controls.clone(),
        }
    }

    /// Recompute and apply the controls' opacity for the current scroll
    /// offset.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::ElementNotFound`] naming the content or footer
    /// selector when that element is missing. The controls are left as they
    /// were.
    pub fn on_scroll<D: DocumentGateway>(&self, doc: &mut D) -> Result<ControlsVisibility, PageError> {
        let content_top = Self::top_of(doc, &self.content)?;
        let footer_top = Self::top_of(doc, &self.footer)?;
        let visibility = controls_visibility(doc.scroll_top(), content_top, footer_top, &self.config);
        doc.set_style_all(&self.controls, "opacity", visibility.css_opacity());
        Ok(visibility)
    }

    fn top_of<D: DocumentGateway>(doc: &D, selector: &str) -> Result<f64, PageError> {
        doc.query(selector)
            .map(|node| doc.offset_top(&node))
            .ok_or_else(|| PageError::ElementNotFound { selector: selector.to_owned() })
    }
}
