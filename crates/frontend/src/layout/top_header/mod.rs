//! TopHeader component - application top bar.
//!
//! Holds the sidebar toggle, the title of the active page and the
//! dark-mode switch.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::theme::DarkModeToggle;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    "☰"
                </button>
                <span class="top-header__title">"Admin Dashboard"</span>
                <span class="top-header__page">{move || ctx.active.get().title()}</span>
            </div>

            <div class="top-header__actions">
                <DarkModeToggle />
            </div>
        </div>
    }
}
