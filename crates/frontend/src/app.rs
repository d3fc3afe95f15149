use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::theme::ThemeContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Navigation state shared by the shell and the pages.
    provide_context(AppGlobalContext::new());

    // Dark mode is read from storage once here and shared by reference.
    provide_context(ThemeContext::init());

    view! {
        <AppRoutes />
    }
}
