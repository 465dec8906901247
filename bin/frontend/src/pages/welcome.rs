//! Welcome page component.

use crate::components::{Button, ButtonSize, GridCol, GridContainer, GridRow};
use crate::navigator::{ClickActivation, NavigatorHandle};
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use tdrs_core::{
    Activation, GREETING, NavigationTarget, Region, SIGN_IN_LABEL, WAVE_LABEL, WelcomeState,
};

/// Sign-in behavior of a mounted welcome page.
///
/// The navigator and login target come from context when provided and fall
/// back to the browser location and the default login endpoint.
#[derive(Clone)]
pub struct SignIn {
    state: StoredValue<WelcomeState>,
    navigator: NavigatorHandle,
    target: NavigationTarget,
}

impl SignIn {
    /// Resolves the capabilities from the current reactive owner.
    pub fn from_context() -> Self {
        Self {
            state: StoredValue::new(WelcomeState::Idle),
            navigator: use_context::<NavigatorHandle>().unwrap_or_default(),
            target: use_context::<NavigationTarget>().unwrap_or_default(),
        }
    }

    /// Handles one activation of the sign-in button.
    pub fn activate(&self, activation: &dyn Activation) {
        let mut current = self.state.get_value();
        if let Err(e) = current.activate(activation, self.navigator.navigator(), &self.target) {
            leptos::logging::error!("sign-in navigation failed: {e}");
        }
        self.state.set_value(current);
    }

    pub fn state(&self) -> WelcomeState {
        self.state.get_value()
    }
}

/// Welcome page - greets the visitor and sends them to Login.gov.
#[component]
pub fn WelcomePage() -> impl IntoView {
    let sign_in = SignIn::from_context();
    let on_sign_in = move |ev: MouseEvent| sign_in.activate(&ClickActivation(&ev));

    view! {
        <GridContainer class="welcome">
            <GridRow>
                <GridCol col=Region::COLUMNS class=Region::Left.class()>
                    <h1>
                        {GREETING}
                        <span role="img" aria-label=WAVE_LABEL aria-hidden="true">
                            " 👋"
                        </span>
                    </h1>
                </GridCol>
                <GridCol col=Region::COLUMNS class=Region::Right.class()>
                    <Button size=ButtonSize::Big on_click=on_sign_in>
                        {SIGN_IN_LABEL}
                    </Button>
                </GridCol>
            </GridRow>
        </GridContainer>
    }
}
