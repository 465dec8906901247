//! Content and activation behavior of the welcome screen.

use crate::error::{NavigationError, Result};
use crate::navigation::{Activation, NavigationTarget, Navigator};
use tracing::{debug, instrument};

/// Greeting shown in the left-hand region.
pub const GREETING: &str = "Welcome to TDRS!";

/// Label of the sign-in control in the right-hand region.
pub const SIGN_IN_LABEL: &str = "Sign in with Login.gov";

/// Accessible label of the decorative emoji after the greeting.
pub const WAVE_LABEL: &str = "wave";

/// The two side-by-side regions of the welcome layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Holds the greeting heading.
    Left,
    /// Holds the sign-in control.
    Right,
}

impl Region {
    /// Both regions in display order.
    pub const ALL: [Region; 2] = [Region::Left, Region::Right];

    /// CSS class identifying the region.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Grid columns each region spans out of twelve.
    pub const COLUMNS: u8 = 6;
}

/// Lifecycle of a mounted welcome screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WelcomeState {
    /// Waiting for the user to sign in.
    #[default]
    Idle,
    /// Navigation was dispatched; the document is unloading.
    NavigationTriggered,
}

/// What an activation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationOutcome {
    /// A navigation was dispatched.
    Navigated,
    /// A navigation had already been dispatched; nothing was done.
    AlreadyTriggered,
}

impl WelcomeState {
    /// Handles activation of the sign-in control.
    ///
    /// The default action is always suppressed. From `Idle` the navigator is
    /// asked to leave for `target` and the state becomes
    /// `NavigationTriggered`. From `NavigationTriggered` no further
    /// navigation happens.
    ///
    /// # Errors
    ///
    /// Returns the navigator's error; the state stays `Idle` so a later
    /// activation may retry.
    #[instrument(skip_all, fields(url = %target))]
    pub fn activate<A, N>(
        &mut self,
        activation: &A,
        navigator: &N,
        target: &NavigationTarget,
    ) -> Result<ActivationOutcome, NavigationError>
    where
        A: Activation + ?Sized,
        N: Navigator + ?Sized,
    {
        activation.prevent_default();

        if *self == Self::NavigationTriggered {
            debug!("navigation already triggered");
            return Ok(ActivationOutcome::AlreadyTriggered);
        }

        navigator.navigate(target)?;
        *self = Self::NavigationTriggered;
        debug!("navigation triggered");

        Ok(ActivationOutcome::Navigated)
    }

    /// Returns true once navigation has been dispatched.
    #[must_use]
    pub fn is_triggered(self) -> bool {
        self == Self::NavigationTriggered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::RecordingNavigator;
    use std::cell::Cell;

    #[derive(Default)]
    struct FakeClick {
        prevented: Cell<usize>,
    }

    impl Activation for FakeClick {
        fn prevent_default(&self) {
            self.prevented.set(self.prevented.get() + 1);
        }
    }

    struct FailingNavigator;

    impl Navigator for FailingNavigator {
        fn navigate(&self, target: &NavigationTarget) -> Result<(), NavigationError> {
            Err(NavigationError::Rejected {
                target: target.to_string(),
                details: "blocked".to_string(),
            }
            .into())
        }
    }

    #[test]
    fn single_activation_navigates_once_to_login() {
        let click = FakeClick::default();
        let navigator = RecordingNavigator::new();
        let mut state = WelcomeState::default();

        let outcome = state
            .activate(&click, &navigator, &NavigationTarget::default())
            .expect("activate");

        assert_eq!(outcome, ActivationOutcome::Navigated);
        assert_eq!(state, WelcomeState::NavigationTriggered);
        let visited = navigator.visited();
        assert_eq!(visited.len(), 1);
        assert_eq!(
            visited[0].as_str(),
            "https://tdp-backend.app.cloud.gov/v1/login/oidc"
        );
    }

    #[test]
    fn activation_prevents_default() {
        let click = FakeClick::default();
        let navigator = RecordingNavigator::new();
        let mut state = WelcomeState::Idle;

        state
            .activate(&click, &navigator, &NavigationTarget::login())
            .expect("activate");

        assert_eq!(click.prevented.get(), 1);
    }

    #[test]
    fn triggered_state_is_terminal() {
        let click = FakeClick::default();
        let navigator = RecordingNavigator::new();
        let mut state = WelcomeState::Idle;
        let target = NavigationTarget::login();

        state.activate(&click, &navigator, &target).expect("first");
        let outcome = state.activate(&click, &navigator, &target).expect("second");

        assert_eq!(outcome, ActivationOutcome::AlreadyTriggered);
        assert!(state.is_triggered());
        assert_eq!(navigator.visited().len(), 1);
        assert_eq!(click.prevented.get(), 2);
    }

    #[test]
    fn failed_navigation_stays_idle() {
        let click = FakeClick::default();
        let mut state = WelcomeState::Idle;

        let err = state
            .activate(&click, &FailingNavigator, &NavigationTarget::login())
            .expect_err("navigation fails");

        assert!(err.to_string().contains("blocked"));
        assert_eq!(state, WelcomeState::Idle);
        assert_eq!(click.prevented.get(), 1);
    }

    #[test]
    fn navigates_to_configured_target() {
        let click = FakeClick::default();
        let navigator = RecordingNavigator::new();
        let mut state = WelcomeState::Idle;
        let target =
            NavigationTarget::parse("https://tdp-backend-staging.app.cloud.gov/v1/login/oidc")
                .expect("valid");

        state.activate(&click, &navigator, &target).expect("activate");

        assert_eq!(navigator.visited(), vec![target]);
    }

    #[test]
    fn regions_split_the_row_evenly() {
        let total = Region::ALL.len() * usize::from(Region::COLUMNS);
        assert_eq!(total, 12);
        assert_eq!(Region::Left.class(), "left");
        assert_eq!(Region::Right.class(), "right");
    }
}
