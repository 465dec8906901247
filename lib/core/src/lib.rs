//! Core domain types for the TDRS frontend.
//!
//! This crate holds everything about the welcome screen that does not depend
//! on a UI framework: the navigation target, the navigator and activation
//! capabilities, the screen's content, and its activation state machine.

pub mod error;
pub mod navigation;
pub mod welcome;

pub use error::{NavigationError, Result};
pub use navigation::{
    Activation, DEFAULT_LOGIN_URL, NavigationTarget, Navigator, RecordingNavigator,
};
pub use welcome::{ActivationOutcome, GREETING, Region, SIGN_IN_LABEL, WAVE_LABEL, WelcomeState};
