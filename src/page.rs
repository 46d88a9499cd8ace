//! Page composition root.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Page` owns the injected capabilities and every component, and is the only
//! thing the host talks to. Host events go in as method calls; work that has
//! to happen later (timers, scroll animation) or on the event itself comes
//! back as [`Action`]s for the host to perform.
//!
//! TRADE-OFFS
//! ==========
//! A missing style sheet leaves `theme` empty instead of failing the page:
//! navigation, permalinks and control visibility keep working without theme
//! switching.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::config::PageConfig;
use crate::error::PageError;
use crate::gateway::{Clock, DocumentGateway};
use crate::headings::HeadingIndex;
use crate::keys::{Command, KeyBindingDispatcher};
use crate::navigator::{Direction, ScrollNavigator, ScrollRequest};
use crate::permalink::PermalinkUi;
use crate::preference::PreferenceStore;
use crate::theme::ThemeController;
use crate::visibility::VisibilityController;

/// Work returned from event handlers for the host to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Animate the scroll position, then call [`Page::complete_navigation`].
    AnimateScroll(ScrollRequest),
    /// Call [`Page::on_reveal_timer`] with `ticket` after `delay_ms`.
    ScheduleReveal { ticket: u64, delay_ms: u32 },
    /// Prevent the browser's default handling of the current event.
    SuppressDefault,
}

pub struct Page<D: DocumentGateway, S: PreferenceStore> {
    pub doc: D,
    pub store: S,
    config: PageConfig,
    theme: Option<ThemeController<D::Sheet>>,
    headings: HeadingIndex<D::Node>,
    navigator: ScrollNavigator,
    permalink: PermalinkUi,
    visibility: VisibilityController,
    keys: KeyBindingDispatcher,
}

impl<D: DocumentGateway, S: PreferenceStore> Page<D, S> {
    /// Bring the page up: theme first so the right style sheet is active
    /// before anything else runs, then the heading index and the initial
    /// control visibility. `clock` is only read here, for the default mode.
    pub fn boot(mut doc: D, store: S, clock: &impl Clock, config: PageConfig) -> Self {
        let theme = match ThemeController::initialize(&mut doc, &store, clock, &config.theme) {
            Ok(theme) => Some(theme),
            Err(e) => {
                log::warn!("theme switching disabled: {e}");
                None
            }
        };
        let headings = HeadingIndex::from_document(&mut doc, &config.selectors.headings);
        let navigator = ScrollNavigator::new(&config.navigation);
        let permalink = PermalinkUi::new(&config.permalink);
        let visibility = VisibilityController::new(&config.visibility, &config.selectors);

        let mut page = Self {
            doc,
            store,
            config,
            theme,
            headings,
            navigator,
            permalink,
            visibility,
            keys: KeyBindingDispatcher::new(),
        };
        page.on_scroll();
        let theme_state = if page.theme.is_some() { "active" } else { "inert" };
        log::info!("page ready: {} headings, theme {theme_state}", page.headings.len());
        page
    }

    // --- Queries ---

    #[must_use]
    pub fn theme(&self) -> Option<&ThemeController<D::Sheet>> {
        self.theme.as_ref()
    }

    #[must_use]
    pub fn headings(&self) -> &HeadingIndex<D::Node> {
        &self.headings
    }

    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Whether `generation` is still the newest navigation. The host stops
    /// animating as soon as this turns false.
    #[must_use]
    pub fn is_current_navigation(&self, generation: u64) -> bool {
        self.navigator.is_current(generation)
    }

    // --- Navigation ---

    /// Animate to `target_offset`, then set the fragment to `fragment`.
    pub fn go_to(&mut self, target_offset: f64, fragment: &str) -> Action {
        Action::AnimateScroll(self.navigator.go_to(self.doc.scroll_top(), target_offset, fragment))
    }

    pub fn next_heading(&mut self, direction: Direction) -> Option<Action> {
        self.navigator.next(&self.doc, &self.headings, direction).map(Action::AnimateScroll)
    }

    /// The host finished animating `request`.
    pub fn complete_navigation(&mut self, request: &ScrollRequest) {
        self.navigator.complete(&mut self.doc, request);
    }

    // --- Theme ---

    /// Explicit user toggle; persists the new mode. No-op when inert.
    pub fn toggle_theme(&mut self) {
        match self.theme.as_mut() {
            Some(theme) => {
                let mode = theme.toggle(&mut self.doc, &mut self.store);
                log::debug!("theme toggled to {mode:?}");
            }
            None => log::debug!("theme toggle ignored: no theme style sheets"),
        }
    }

    // --- Host events ---

    pub fn on_scroll(&mut self) {
        if let Err(e) = self.visibility.on_scroll(&mut self.doc) {
            log::debug!("control visibility unchanged: {e}");
        }
    }

    /// Key release carrying `key` (already derived from the key code).
    pub fn on_key_up(&mut self, key: Option<char>) -> Vec<Action> {
        let outcome = self.keys.dispatch(key);
        let mut actions = Vec::new();
        if outcome.suppress_default {
            actions.push(Action::SuppressDefault);
        }
        if let Some(command) = outcome.command {
            actions.extend(self.on_command(command));
        }
        actions
    }

    /// Run a bound key command. Default suppression is not part of the
    /// result; see [`KeyBindingDispatcher::dispatch`].
    pub fn on_command(&mut self, command: Command) -> Vec<Action> {
        match command {
            Command::ToggleTheme => {
                self.toggle_theme();
                Vec::new()
            }
            Command::JumpTopOrContent => match self.jump_top_or_content() {
                Ok(action) => vec![action],
                Err(e) => {
                    log::debug!("top jump skipped: {e}");
                    Vec::new()
                }
            },
            Command::NextHeading => self.next_heading(Direction::Forward).into_iter().collect(),
            Command::PreviousHeading => self.next_heading(Direction::Backward).into_iter().collect(),
        }
    }

    pub fn on_heading_enter(&mut self, heading: &D::Node) -> Vec<Action> {
        let reveal = self.permalink.on_enter(&mut self.doc, heading);
        vec![Action::ScheduleReveal { ticket: reveal.ticket, delay_ms: reveal.delay_ms }]
    }

    pub fn on_heading_leave(&mut self) {
        self.permalink.on_leave(&mut self.doc);
    }

    pub fn on_reveal_timer(&mut self, ticket: u64) {
        self.permalink.on_reveal(&mut self.doc, ticket);
    }

    /// Clicking a heading navigates to it and puts its id in the URL.
    pub fn on_heading_click(&mut self, heading: &D::Node) -> Vec<Action> {
        let id = match self.headings.find(heading) {
            Some(entry) => entry.id.clone(),
            None => self.doc.attribute(heading, "id").unwrap_or_default(),
        };
        let target = self.doc.offset_top(heading);
        vec![self.go_to(target, &id)]
    }

    pub fn on_night_toggle_click(&mut self) -> Vec<Action> {
        self.toggle_theme();
        vec![Action::SuppressDefault]
    }

    /// Smooth in-page link: scroll to the element its `href` names. Links
    /// whose target cannot be resolved are left to the browser.
    pub fn on_smooth_link_click(&mut self, link: &D::Node) -> Vec<Action> {
        let Some(href) = self.doc.attribute(link, "href") else {
            return Vec::new();
        };
        let Some(target) = href.starts_with('#').then(|| self.doc.query(&href)).flatten() else {
            log::debug!("smooth link target {href:?} not found");
            return Vec::new();
        };
        let fragment = self.doc.attribute(link, "id").unwrap_or_default();
        let offset = self.doc.offset_top(&target);
        vec![Action::SuppressDefault, self.go_to(offset, &fragment)]
    }

    /// `g`: inside the content, go to the page top; above it, go to the
    /// content top. The fragment is cleared either way.
    fn jump_top_or_content(&mut self) -> Result<Action, PageError> {
        let selectors = &self.config.selectors;
        let content = self
            .doc
            .query(&selectors.main_content)
            .ok_or_else(|| PageError::ElementNotFound { selector: selectors.main_content.clone() })?;
        let content_top = self.doc.offset_top(&content);
        let target = if self.doc.scroll_top() >= content_top - self.config.navigation.top_slack_px {
            self.doc.query(&selectors.top).map_or(0.0, |top| self.doc.offset_top(&top))
        } else {
            content_top
        };
        Ok(self.go_to(target, ""))
    }
}
