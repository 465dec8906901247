//! Error handling foundation for the TDRS frontend.
//!
//! Errors are designed for layered context using rootcause:
//! - `NavigationError`: failures resolving or dispatching a navigation target
//!
//! Callers add their own context via `.context()` as errors propagate.

use rootcause::Report;
use std::fmt;

/// A Result type alias using rootcause's Report for error handling.
pub type Result<T, C = ()> = std::result::Result<T, Report<C>>;

/// Errors from navigation operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// The target could not be parsed as an absolute HTTP(S) URL.
    InvalidTarget { target: String, reason: String },
    /// No navigation facility exists in the current environment.
    Unavailable { environment: &'static str },
    /// The user agent refused the navigation request.
    Rejected { target: String, details: String },
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTarget { target, reason } => {
                write!(f, "invalid navigation target '{target}': {reason}")
            }
            Self::Unavailable { environment } => {
                write!(f, "navigation is unavailable in {environment}")
            }
            Self::Rejected { target, details } => {
                write!(f, "navigation to '{target}' was rejected: {details}")
            }
        }
    }
}

impl std::error::Error for NavigationError {}
