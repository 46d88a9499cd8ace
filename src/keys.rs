//! Single-key bindings, evaluated on key release.
//!
//! | key | command |
//! |-----|---------|
//! | `n` | toggle night mode |
//! | `g` | jump to the content top, or to the page top when already in the content |
//! | `l` or `'` | next heading |
//! | `h` or `%` | previous heading |
//!
//! The dispatcher asks the host to suppress the browser's default action for
//! every key release, bound or not. This also suppresses defaults such as
//! text-selection shortcuts page-wide.

#[cfg(test)]
#[path = "keys_test.rs"]
mod keys_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ToggleTheme,
    JumpTopOrContent,
    NextHeading,
    PreviousHeading,
}

/// Result of dispatching one key release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyOutcome {
    pub command: Option<Command>,
    pub suppress_default: bool,
}

/// Character a legacy `keyCode` reads as, lowercased.
///
/// Arrow keys therefore read as punctuation: ArrowLeft (37) is `%` and
/// ArrowRight (39) is `'`, which is what binds them to heading navigation.
#[must_use]
pub fn key_from_code(key_code: u32) -> Option<char> {
    char::from_u32(key_code).and_then(|ch| ch.to_lowercase().next())
}

/// Command bound to `key`, case-insensitively.
#[must_use]
pub fn command_for(key: char) -> Option<Command> {
    match key.to_ascii_lowercase() {
        'n' => Some(Command::ToggleTheme),
        'g' => Some(Command::JumpTopOrContent),
        'l' | '\'' => Some(Command::NextHeading),
        'h' | '%' => Some(Command::PreviousHeading),
        _ => None,
    }
}

#[derive(Debug, Default)]
pub struct KeyBindingDispatcher;

impl KeyBindingDispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Dispatch a key release. `None` stands for a key with no character.
    ///
    /// Depends on nothing but `key`, so the host can settle default
    /// suppression without touching page state.
    #[must_use]
    pub fn dispatch(&self, key: Option<char>) -> KeyOutcome {
        KeyOutcome { command: key.and_then(command_for), suppress_default: true }
    }
}
