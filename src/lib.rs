//! Client-side enhancement layer for statically generated documentation pages.
//!
//! This crate is compiled to WebAssembly and runs in the browser on top of the
//! markup produced by the page generator. It keeps the light/dark theme in sync
//! with two alternative syntax-highlighting style sheets, indexes the document
//! headings, and drives scroll and keyboard navigation between them.
//!
//! All page logic lives behind the [`gateway::DocumentGateway`],
//! [`preference::PreferenceStore`] and [`gateway::Clock`] capabilities so it can
//! be exercised natively against the in-memory fakes in `memory` (unit tests,
//! or feature `testing` for downstream crates). The browser host in
//! [`web`] (feature `hydrate`) supplies the real implementations, wires DOM
//! events to [`page::Page`] and performs the deferred [`page::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`page`] | Composition root; host events in, [`page::Action`]s out |
//! | [`theme`] | Day/night state machine over the two style sheets |
//! | [`style`] | Locating style sheets by path substring |
//! | [`preference`] | Persisted theme preference |
//! | [`headings`] | Heading index and identifier derivation |
//! | [`navigator`] | Next/previous heading selection and scroll requests |
//! | [`permalink`] | Hover permalink affordance with delayed reveal |
//! | [`visibility`] | Opacity of the floating control buttons |
//! | [`keys`] | Single-key bindings |
//! | [`gateway`] | Capability traits over the document and clock |
//! | `memory` | In-memory capability implementations (tests, feature `testing`) |
//! | [`config`] | Page configuration |
//! | [`consts`] | Default selectors, keys, and timings |
//! | [`error`] | Error type |
//! | `web` | Browser host (feature `hydrate`) |

pub mod config;
pub mod consts;
pub mod error;
pub mod gateway;
pub mod headings;
pub mod keys;
#[cfg(any(test, feature = "testing"))]
pub mod memory;
pub mod navigator;
pub mod page;
pub mod permalink;
pub mod preference;
pub mod style;
pub mod theme;
pub mod visibility;

#[cfg(feature = "hydrate")]
pub mod web;
