//! Navigation targets and the capabilities that act on them.
//!
//! The UI never touches the document location directly. It asks a
//! [`Navigator`] to leave the page, and it reports the triggering event
//! through [`Activation`] so the default action can be suppressed first.

use crate::error::{NavigationError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::{LazyLock, Mutex};
use url::Url;

/// The Login.gov OIDC login initiation endpoint of the TDP backend.
pub const DEFAULT_LOGIN_URL: &str = "https://tdp-backend.app.cloud.gov/v1/login/oidc";

// DEFAULT_LOGIN_URL is a literal absolute https URL, so parsing cannot fail.
static LOGIN_TARGET: LazyLock<NavigationTarget> = LazyLock::new(|| {
    DEFAULT_LOGIN_URL
        .parse()
        .expect("DEFAULT_LOGIN_URL is an absolute https URL")
});

/// An absolute HTTP(S) URL the user agent can be sent to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NavigationTarget(Url);

impl NavigationTarget {
    /// Parses and validates a navigation target.
    ///
    /// # Errors
    ///
    /// Returns `NavigationError::InvalidTarget` if the string is not an
    /// absolute URL with an `http` or `https` scheme and a host.
    pub fn parse(target: &str) -> Result<Self, NavigationError> {
        Ok(target.parse::<Self>()?)
    }

    /// The login endpoint used when nothing else is configured.
    #[must_use]
    pub fn login() -> Self {
        LOGIN_TARGET.clone()
    }

    /// Returns the target as a string suitable for `location.href`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the parsed URL.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.0
    }
}

impl Default for NavigationTarget {
    fn default() -> Self {
        Self::login()
    }
}

impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NavigationTarget {
    type Err = NavigationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let url = Url::parse(s).map_err(|e| NavigationError::InvalidTarget {
            target: s.to_string(),
            reason: e.to_string(),
        })?;
        Self::try_from(url)
    }
}

impl TryFrom<Url> for NavigationTarget {
    type Error = NavigationError;

    fn try_from(url: Url) -> std::result::Result<Self, Self::Error> {
        if !matches!(url.scheme(), "http" | "https") {
            return Err(NavigationError::InvalidTarget {
                target: url.to_string(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }
        if url.host_str().is_none() {
            return Err(NavigationError::InvalidTarget {
                target: url.to_string(),
                reason: "missing host".to_string(),
            });
        }
        Ok(Self(url))
    }
}

impl TryFrom<String> for NavigationTarget {
    type Error = NavigationError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<NavigationTarget> for String {
    fn from(target: NavigationTarget) -> Self {
        target.0.into()
    }
}

/// Performs a full-page navigation.
///
/// Implementations replace the current document; callers must not expect
/// anything to run after a successful call in a real browser.
pub trait Navigator: Send + Sync {
    /// Sends the user agent to `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if the navigation could not be dispatched.
    fn navigate(&self, target: &NavigationTarget) -> Result<(), NavigationError>;
}

/// The event that activated a control.
pub trait Activation {
    /// Suppresses whatever the control would do by default (form submit,
    /// link follow).
    fn prevent_default(&self);
}

/// A navigator that records targets instead of leaving the page.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<NavigationTarget>>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every target requested so far, oldest first.
    #[must_use]
    pub fn visited(&self) -> Vec<NavigationTarget> {
        self.visited
            .lock()
            .map(|visited| visited.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, target: &NavigationTarget) -> Result<(), NavigationError> {
        self.visited
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(target.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_target_is_login_endpoint() {
        let target = NavigationTarget::default();
        assert_eq!(
            target.as_str(),
            "https://tdp-backend.app.cloud.gov/v1/login/oidc"
        );
        assert_eq!(target.to_string(), DEFAULT_LOGIN_URL);
    }

    #[test]
    fn login_matches_parsed_default() {
        let parsed = NavigationTarget::parse(DEFAULT_LOGIN_URL).expect("valid default");
        assert_eq!(NavigationTarget::login(), parsed);
        assert_eq!(NavigationTarget::login(), NavigationTarget::login());
        assert_eq!(parsed.url().scheme(), "https");
    }

    #[test]
    fn parses_absolute_https_url() {
        let target = NavigationTarget::parse("https://login.example.gov/start?x=1")
            .expect("valid target");
        assert_eq!(target.url().host_str(), Some("login.example.gov"));
        assert_eq!(target.as_str(), "https://login.example.gov/start?x=1");
    }

    #[test]
    fn rejects_relative_url() {
        let err = NavigationTarget::parse("/v1/login/oidc").expect_err("relative");
        assert!(err.to_string().contains("/v1/login/oidc"));
    }

    #[test]
    fn rejects_non_http_scheme() {
        let err = NavigationTarget::parse("javascript:alert(1)").expect_err("scheme");
        assert!(err.to_string().contains("unsupported scheme"));

        let err = "ftp://files.example.gov/"
            .parse::<NavigationTarget>()
            .expect_err("scheme");
        assert!(matches!(err, NavigationError::InvalidTarget { .. }));
    }

    #[test]
    fn deserializes_from_string() {
        let target: NavigationTarget =
            serde_json::from_str(r#""https://tdp-backend.app.cloud.gov/v1/login/oidc""#)
                .expect("deserialize");
        assert_eq!(target, NavigationTarget::login());

        let invalid = serde_json::from_str::<NavigationTarget>(r#""not a url""#);
        assert!(invalid.is_err());
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&NavigationTarget::login()).expect("serialize");
        assert_eq!(json, format!("\"{DEFAULT_LOGIN_URL}\""));
    }

    #[test]
    fn recording_navigator_keeps_order() {
        let navigator = RecordingNavigator::new();
        let first = NavigationTarget::parse("https://a.example.gov/").expect("valid");
        let second = NavigationTarget::parse("https://b.example.gov/").expect("valid");

        navigator.navigate(&first).expect("navigate");
        navigator.navigate(&second).expect("navigate");

        assert_eq!(navigator.visited(), vec![first, second]);
    }
}
