#![forbid(unsafe_code)]

//! Error type shared by the navigation controller and its hosts.
//!
//! None of these are shown to visitors. Every variant degrades to "the nav
//! chrome keeps working": a missing section skips the scroll, a bad id or
//! config is rejected before it reaches the controller state.

use crate::section::SectionId;

/// Errors surfaced by navigation operations and host adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    /// The target section has no element in the document (not mounted yet).
    MissingTarget(SectionId),
    /// A host passed a section id string that is not one of the declared ids.
    UnknownSection(String),
    /// A host asked for a call-to-action index that does not exist.
    UnknownAction(usize),
    /// Configuration JSON was malformed or held an out-of-range value.
    InvalidConfig(String),
    /// A host API call failed (no `window`, no `document.body`, ...).
    Host(String),
}

impl core::fmt::Display for NavError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingTarget(id) => write!(f, "section element not found: {id}"),
            Self::UnknownSection(raw) => write!(f, "unknown section id: {raw:?}"),
            Self::UnknownAction(index) => write!(f, "no call to action at index {index}"),
            Self::InvalidConfig(msg) => write!(f, "invalid navigation config: {msg}"),
            Self::Host(msg) => write!(f, "host error: {msg}"),
        }
    }
}

impl std::error::Error for NavError {}
