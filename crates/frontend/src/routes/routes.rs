use crate::domain::a001_product::ui::list::ProductList;
use crate::domain::a002_order::ui::list::OrderList;
use crate::domain::a003_customer::ui::list::CustomerList;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::left::Navbar;
use crate::layout::Shell;
use leptos::prelude::*;

/// Page selected in the sidebar.
#[component]
fn ActivePage() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    move || match ctx.active.get() {
        Page::Products => view! { <ProductList /> }.into_any(),
        Page::Orders => view! { <OrderList /> }.into_any(),
        Page::Customers => view! { <CustomerList /> }.into_any(),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Shell
            left=|| view! { <Navbar /> }.into_any()
            center=|| view! { <ActivePage /> }.into_any()
        />
    }
}
