//! Browser-backed navigation capabilities.
//!
//! Components look these up through Leptos context so tests and the server
//! render can swap in other implementations.

use leptos::ev::MouseEvent;
use std::sync::Arc;
use tdrs_core::{Activation, NavigationError, NavigationTarget, Navigator, Result};

/// Name of the `<meta>` tag that carries the login URL from the server
/// render to the hydrated client.
pub const LOGIN_URL_META: &str = "tdrs-login-url";

/// Assigns `window.location.href`, replacing the current document.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    #[cfg(feature = "hydrate")]
    fn navigate(&self, target: &NavigationTarget) -> Result<(), NavigationError> {
        let window = web_sys::window().ok_or(NavigationError::Unavailable {
            environment: "a context without a window",
        })?;
        window
            .location()
            .set_href(target.as_str())
            .map_err(|e| NavigationError::Rejected {
                target: target.to_string(),
                details: format!("{e:?}"),
            })?;
        Ok(())
    }

    #[cfg(not(feature = "hydrate"))]
    fn navigate(&self, _target: &NavigationTarget) -> Result<(), NavigationError> {
        Err(NavigationError::Unavailable {
            environment: "server render",
        }
        .into())
    }
}

/// Shared handle to a navigator, suitable for Leptos context.
#[derive(Clone)]
pub struct NavigatorHandle(Arc<dyn Navigator>);

impl NavigatorHandle {
    pub fn new(navigator: impl Navigator + 'static) -> Self {
        Self(Arc::new(navigator))
    }

    pub fn from_arc(navigator: Arc<dyn Navigator>) -> Self {
        Self(navigator)
    }

    /// Handle to the real browser location.
    pub fn browser() -> Self {
        Self::new(BrowserNavigator)
    }

    pub fn navigator(&self) -> &dyn Navigator {
        self.0.as_ref()
    }
}

impl Default for NavigatorHandle {
    fn default() -> Self {
        Self::browser()
    }
}

/// A DOM click seen as an [`Activation`].
pub struct ClickActivation<'a>(pub &'a MouseEvent);

impl Activation for ClickActivation<'_> {
    fn prevent_default(&self) {
        self.0.prevent_default();
    }
}

/// Reads the login URL the server embedded in the document head.
///
/// Returns `None` when the tag is missing or holds an invalid URL.
#[cfg(feature = "hydrate")]
pub fn login_target_from_document() -> Option<NavigationTarget> {
    let document = web_sys::window()?.document()?;
    let meta = document
        .query_selector(&format!("meta[name=\"{LOGIN_URL_META}\"]"))
        .ok()??;
    meta.get_attribute("content")?.parse().ok()
}
