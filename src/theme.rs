//! Day/night theme state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page ships two syntax-highlighting style sheets, a dark one and a
//! light one. Exactly one of them is enabled at any time, and the body's
//! `night` marker class plus the toggle buttons' `pushed` class always agree
//! with it. `ThemeController` is the only writer of that state.
//!
//! TRADE-OFFS
//! ==========
//! The initial mode is re-applied from storage without writing it back, and
//! the time-of-day fallback is never persisted: only an explicit toggle
//! records a preference.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::config::ThemeConfig;
use crate::error::PageError;
use crate::gateway::{Clock, DocumentGateway};
use crate::preference::{PreferenceStore, read_preference, write_preference};
use crate::style::{StyleResourceRef, locate_pair};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Day,
    Night,
}

impl ThemeMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Day => Self::Night,
            Self::Night => Self::Day,
        }
    }

    #[must_use]
    pub fn is_night(self) -> bool {
        self == Self::Night
    }

    /// Mode chosen when the user never picked one: night from
    /// `night_starts_at` through `night_ends_at` (inclusive), day otherwise.
    #[must_use]
    pub fn for_hour(hour: u32, night_starts_at: u32, night_ends_at: u32) -> Self {
        if hour >= night_starts_at || hour <= night_ends_at { Self::Night } else { Self::Day }
    }
}

/// Theme state over the two style sheets, held as `S` handles.
pub struct ThemeController<S> {
    mode: ThemeMode,
    night: StyleResourceRef<S>,
    light: StyleResourceRef<S>,
    config: ThemeConfig,
}

impl<S: Clone> ThemeController<S> {
    /// Locate both style sheets, pick the initial mode, and apply it.
    ///
    /// A stored preference wins over the time of day.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::StyleResourceNotFound`] when either style sheet
    /// is not loaded. The document is left untouched in that case.
    pub fn initialize<D: DocumentGateway<Sheet = S>>(
        doc: &mut D,
        store: &impl PreferenceStore,
        clock: &impl Clock,
        config: &ThemeConfig,
    ) -> Result<Self, PageError> {
        let (night, light) = locate_pair(&doc.style_sheets(), &config.night_stylesheet, &config.light_stylesheet)?;
        let mode = match read_preference(store, &config.storage_key) {
            Some(mode) => mode,
            None => ThemeMode::for_hour(clock.local_hour(), config.night_starts_at, config.night_ends_at),
        };
        log::info!("theme initialized in {mode:?} mode");

        let mut controller = Self { mode, night, light, config: config.clone() };
        controller.apply(doc);
        Ok(controller)
    }

    /// Flip the mode, re-apply it, and persist it as the user's choice.
    pub fn toggle<D: DocumentGateway<Sheet = S>>(&mut self, doc: &mut D, store: &mut impl PreferenceStore) -> ThemeMode {
        self.mode = self.mode.toggled();
        self.apply(doc);
        write_preference(store, &self.config.storage_key, self.mode);
        self.mode
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    #[must_use]
    pub fn night_sheet(&self) -> &StyleResourceRef<S> {
        &self.night
    }

    #[must_use]
    pub fn light_sheet(&self) -> &StyleResourceRef<S> {
        &self.light
    }

    /// Push the current mode to both sheets and both marker classes in one
    /// synchronous pass.
    fn apply<D: DocumentGateway<Sheet = S>>(&mut self, doc: &mut D) {
        let night = self.mode.is_night();
        self.night.enabled = night;
        self.light.enabled = !night;
        doc.set_style_sheet_disabled(&self.night.sheet, !self.night.enabled);
        doc.set_style_sheet_disabled(&self.light.sheet, !self.light.enabled);
        doc.set_class_all(&self.config.marker_target, &self.config.marker_class, night);
        doc.set_class_all(&self.config.toggle_selector, &self.config.pushed_class, night);
    }
}
