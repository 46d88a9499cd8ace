//! Error type for the page enhancement layer.
//!
//! Every failure is local: callers log it and keep the rest of the page
//! working.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    /// No loaded style sheet has a path containing `needle`.
    #[error("no loaded style sheet matches `{needle}`")]
    StyleResourceNotFound { needle: String },
    /// A required element is absent from the markup.
    #[error("no element matches `{selector}`")]
    ElementNotFound { selector: String },
    #[error("invalid page config: {0}")]
    Config(String),
    #[error("dom call failed: {0}")]
    Dom(String),
}
