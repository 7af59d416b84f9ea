use std::fmt;

use crate::keys::{Dimension, Page};

/// Result type for subprime-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Navigation input rejected by a selector
    InvalidSelection { label: String, reason: Rejection },

    /// A colour literal that is not `#RRGGBB`
    InvalidColor(String),

    /// Content document is structurally inconsistent
    Content(String),
}

/// Why a selection was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The label is outside the closed option set of this dimension
    UnknownOption(Dimension),

    /// The page has no secondary selector at all
    NoSubSelector(Page),
}

impl Error {
    pub fn invalid_selection(dimension: Dimension, label: impl Into<String>) -> Self {
        Error::InvalidSelection {
            label: label.into(),
            reason: Rejection::UnknownOption(dimension),
        }
    }

    pub fn no_sub_selector(page: Page, label: impl Into<String>) -> Self {
        Error::InvalidSelection {
            label: label.into(),
            reason: Rejection::NoSubSelector(page),
        }
    }

    pub fn is_invalid_selection(&self) -> bool {
        matches!(self, Error::InvalidSelection { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSelection {
                label,
                reason: Rejection::UnknownOption(dimension),
            } => {
                write!(f, "Invalid selection: '{}' is not a known {}", label, dimension)
            }
            Error::InvalidSelection {
                label,
                reason: Rejection::NoSubSelector(page),
            } => write!(
                f,
                "Invalid selection: '{}' given, but page '{}' has no sub-selector",
                label, page
            ),
            Error::InvalidColor(raw) => write!(f, "Invalid color: '{}' (expected #RRGGBB)", raw),
            Error::Content(msg) => write!(f, "Content error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sub_selector_is_an_invalid_selection() {
        let err = Error::no_sub_selector(Page::Introduction, "GDP Growth");
        assert!(matches!(
            err,
            Error::InvalidSelection {
                reason: Rejection::NoSubSelector(Page::Introduction),
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "Invalid selection: 'GDP Growth' given, but page 'introduction' has no sub-selector"
        );
    }

    #[test]
    fn test_unknown_option_message() {
        let err = Error::invalid_selection(Dimension::Page, "Nonexistent");
        assert_eq!(
            err.to_string(),
            "Invalid selection: 'Nonexistent' is not a known page"
        );
    }
}
