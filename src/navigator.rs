//! Scroll-position-relative heading navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Navigation requests become [`ScrollRequest`]s that the host animates. Each
//! request carries a generation number; the host drops an animation as soon
//! as a newer request exists, so the newest request always wins and older
//! ones never set the URL fragment.

#[cfg(test)]
#[path = "navigator_test.rs"]
mod navigator_test;

use std::f64::consts::PI;

use crate::config::NavigationConfig;
use crate::gateway::DocumentGateway;
use crate::headings::{HeadingEntity, HeadingIndex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// An animated scroll from `from` to `to`, followed by a fragment update.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollRequest {
    pub from: f64,
    pub to: f64,
    pub duration_ms: u32,
    /// Fragment to set once the animation completes; empty clears it.
    pub fragment: String,
    pub generation: u64,
}

impl ScrollRequest {
    /// Scroll offset `elapsed_ms` into the animation, with swing easing.
    #[must_use]
    pub fn position_at(&self, elapsed_ms: f64) -> f64 {
        let duration = f64::from(self.duration_ms);
        if duration <= 0.0 || elapsed_ms >= duration {
            return self.to;
        }
        let progress = (elapsed_ms / duration).max(0.0);
        let eased = 0.5 - (progress * PI).cos() / 2.0;
        self.from + (self.to - self.from) * eased
    }

    #[must_use]
    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= f64::from(self.duration_ms)
    }
}

/// Select the heading to move to from scroll offset `pos`.
///
/// Forward picks the first heading (document order) strictly below
/// `pos + epsilon`; backward picks the first heading (reverse order) strictly
/// above `pos - epsilon`. The slack keeps the heading currently aligned with
/// the viewport top from being selected again.
pub fn select_heading<'a, N: Clone + PartialEq>(
    index: &'a HeadingIndex<N>,
    pos: f64,
    direction: Direction,
    epsilon: f64,
    offset_of: impl Fn(&N) -> f64,
) -> Option<&'a HeadingEntity<N>> {
    match direction {
        Direction::Forward => index.iter().find(|entry| offset_of(&entry.node) > pos + epsilon),
        Direction::Backward => index.iter_rev().find(|entry| offset_of(&entry.node) < pos - epsilon),
    }
}

pub struct ScrollNavigator {
    duration_ms: u32,
    epsilon: f64,
    generation: u64,
}

impl ScrollNavigator {
    #[must_use]
    pub fn new(config: &NavigationConfig) -> Self {
        Self { duration_ms: config.scroll_duration_ms, epsilon: config.epsilon_px, generation: 0 }
    }

    /// Start a navigation to `target_offset`, superseding any in flight.
    pub fn go_to(&mut self, from: f64, target_offset: f64, fragment: &str) -> ScrollRequest {
        self.generation += 1;
        ScrollRequest {
            from,
            to: target_offset,
            duration_ms: self.duration_ms,
            fragment: fragment.to_owned(),
            generation: self.generation,
        }
    }

    /// Navigate to the next heading in `direction`, or `None` when there is
    /// none left that way.
    pub fn next<D: DocumentGateway>(
        &mut self,
        doc: &D,
        index: &HeadingIndex<D::Node>,
        direction: Direction,
    ) -> Option<ScrollRequest> {
        let pos = doc.scroll_top();
        let Some(entry) = select_heading(index, pos, direction, self.epsilon, |node| doc.offset_top(node)) else {
            log::debug!("no heading {direction:?} of offset {pos}");
            return None;
        };
        let target = doc.offset_top(&entry.node);
        Some(self.go_to(pos, target, &entry.id))
    }

    /// Whether `generation` is still the newest navigation.
    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Finish a navigation: the newest one writes its fragment, superseded
    /// ones do nothing. Returns whether the fragment was written.
    pub fn complete<D: DocumentGateway>(&self, doc: &mut D, request: &ScrollRequest) -> bool {
        if !self.is_current(request.generation) {
            return false;
        }
        doc.set_fragment(&request.fragment);
        true
    }
}
