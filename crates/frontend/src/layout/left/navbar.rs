use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::icons;
use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <nav class="main-nav-bar">
            <ul>
                {Page::all().into_iter().map(|page| {
                    view! {
                        <li
                            class:active=move || ctx.active.get() == page
                            on:click=move |_| ctx.open(page)
                        >
                            {icons::icon(page.key())}
                            <span>{page.title()}</span>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
