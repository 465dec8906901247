//! Main Leptos application component and routing.

use crate::navigator::LOGIN_URL_META;
use crate::pages::WelcomePage;
use leptos::prelude::*;
use leptos_meta::{Meta, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use tdrs_core::NavigationTarget;

/// The root application component.
///
/// Publishes the effective login target in the document head so the
/// hydrated client navigates to the same place the server rendered.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let target = use_context::<NavigationTarget>().unwrap_or_default();

    view! {
        <Title text="TANF Data Reporting System"/>
        <Meta name=LOGIN_URL_META content=target.to_string()/>
        <Stylesheet href="https://cdn.jsdelivr.net/npm/@uswds/uswds@3/dist/css/uswds.min.css"/>
        <Router>
            <main class="container">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=WelcomePage/>
                </Routes>
            </main>
        </Router>
    }
}
