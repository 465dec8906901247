//! Layout and control primitives.
//!
//! Thin wrappers over the U.S. Web Design System markup. Pages compose these
//! instead of writing design-system class names themselves, so the visual
//! library can change without touching page behavior.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

/// Outermost layout wrapper that centers and pads its content.
#[component]
pub fn GridContainer(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! {
        <div class=join_classes("grid-container", &class)>
            {children()}
        </div>
    }
}

/// A horizontal row of grid columns.
#[component]
pub fn GridRow(children: Children) -> impl IntoView {
    view! {
        <div class="grid-row">
            {children()}
        </div>
    }
}

/// A column spanning `col` of the row's twelve tracks.
#[component]
pub fn GridCol(
    col: u8,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let base = format!("grid-col-{}", col.clamp(1, 12));

    view! {
        <div class=join_classes(&base, &class)>
            {children()}
        </div>
    }
}

/// Visual size of a [`Button`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Default,
    Big,
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            Self::Default => "usa-button",
            Self::Big => "usa-button usa-button--big",
        }
    }
}

/// A plain `type="button"` control that never submits a form on its own.
#[component]
pub fn Button(
    #[prop(optional)] size: ButtonSize,
    #[prop(into)] on_click: Callback<MouseEvent>,
    children: Children,
) -> impl IntoView {
    view! {
        <button type="button" class=size.class() on:click=move |ev| on_click.run(ev)>
            {children()}
        </button>
    }
}

fn join_classes(base: &str, extra: &str) -> String {
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{base} {extra}")
    }
}
