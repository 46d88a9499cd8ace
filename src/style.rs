//! Locating the night and light style sheets among the loaded sheets.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use crate::error::PageError;
use crate::gateway::StyleSheetInfo;

/// Handle to a loaded style sheet with a mirrored `enabled` flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleResourceRef<S> {
    pub sheet: S,
    pub href: String,
    pub(crate) enabled: bool,
}

impl<S> StyleResourceRef<S> {
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }
}

/// Find the first sheet whose path contains `needle`.
///
/// Sheets without a path (inline `<style>` blocks) never match. When several
/// sheets match, the earliest in document order wins.
///
/// # Errors
///
/// Returns [`PageError::StyleResourceNotFound`] when nothing matches.
pub fn locate<S: Clone>(sheets: &[StyleSheetInfo<S>], needle: &str) -> Result<StyleResourceRef<S>, PageError> {
    sheets
        .iter()
        .find_map(|sheet| {
            let href = sheet.href.as_deref()?;
            href.contains(needle).then(|| StyleResourceRef {
                sheet: sheet.sheet.clone(),
                href: href.to_owned(),
                enabled: !sheet.disabled,
            })
        })
        .ok_or_else(|| PageError::StyleResourceNotFound { needle: needle.to_owned() })
}

/// Locate the (night, light) pair.
///
/// # Errors
///
/// Returns [`PageError::StyleResourceNotFound`] for the first sheet missing.
pub fn locate_pair<S: Clone>(
    sheets: &[StyleSheetInfo<S>],
    night_needle: &str,
    light_needle: &str,
) -> Result<(StyleResourceRef<S>, StyleResourceRef<S>), PageError> {
    let night = locate(sheets, night_needle)?;
    let light = locate(sheets, light_needle)?;
    Ok((night, light))
}
