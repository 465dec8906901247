//! Centralized frontend configuration.
//!
//! Loaded via the `config` crate from environment variables prefixed with
//! `TDRS`, using `__` as the separator (e.g. `TDRS__LOGIN_URL`). Leptos site
//! options (address, asset paths) come from `[package.metadata.leptos]`
//! instead.

use config::{ConfigBuilder, ConfigError, builder::DefaultState};
use serde::Deserialize;
use tdrs_core::NavigationTarget;

/// Environment variable prefix for frontend settings.
pub const ENV_PREFIX: &str = "TDRS";

/// Frontend configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FrontendConfig {
    /// Where the sign-in button sends the browser.
    /// Defaults to the TDP backend's Login.gov OIDC endpoint.
    #[serde(default)]
    pub login_url: NavigationTarget,
}

impl FrontendConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but invalid, such as a
    /// relative or non-HTTP login URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_builder(config::Config::builder().add_source(environment()))
    }

    /// Builds configuration from an arbitrary set of sources.
    ///
    /// # Errors
    ///
    /// Returns an error if the sources cannot be read or deserialized.
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }
}

/// The `TDRS__*` environment source read by [`FrontendConfig::from_env`].
fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}
