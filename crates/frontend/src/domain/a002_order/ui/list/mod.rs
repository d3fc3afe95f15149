use crate::shared::components::table::format_money;
use crate::shared::date_utils::format_date;
use crate::shared::list_utils::{
    apply_loaded, highlight_matches, FilterSelect, SearchInput, SortableHeader, StatusBadge,
};
use contracts::domain::a002_order::aggregate::{sample_orders, Order, ORDER_LISTING};
use contracts::shared::listing::ListingQueryEngine;
use leptos::prelude::*;

const ENGINE: ListingQueryEngine = ListingQueryEngine::new(ORDER_LISTING);

#[component]
#[allow(non_snake_case)]
pub fn OrderList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Order>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let params = RwSignal::new(ENGINE.default_params());

    apply_loaded(sample_orders(), set_items, set_error);

    let visible = Memo::new(move |_| items.with(|rows| params.with(|p| ENGINE.query(rows, p))));

    let search = Signal::derive(move || params.with(|p| p.search_text.clone()));
    let filter = Signal::derive(move || params.with(|p| p.filter_value.clone()));
    let sort_key = Signal::derive(move || params.with(|p| p.sort_key.clone()));
    let sort_direction = Signal::derive(move || params.with(|p| p.sort_direction));
    let on_sort = Callback::new(move |field: &'static str| params.update(|p| p.request_sort(field)));

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Orders"}</h2>
                <div class="header-actions">
                    <SearchInput
                        value=search
                        on_change=Callback::new(move |val: String| params.update(|p| p.search_text = val))
                        placeholder="Search by order ID or customer...".to_string()
                    />
                    <FilterSelect
                        label="Order type"
                        options=ENGINE.config().filter_options
                        value=filter
                        on_change=Callback::new(move |val: String| params.update(|p| p.filter_value = val))
                    />
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="table-container">
                <table>
                    <thead>
                        <tr>
                            <SortableHeader label="Order ID" field="id" sort_key=sort_key sort_direction=sort_direction on_sort=on_sort />
                            <SortableHeader label="Customer" field="customer" sort_key=sort_key sort_direction=sort_direction on_sort=on_sort />
                            <SortableHeader label="Date" field="date" sort_key=sort_key sort_direction=sort_direction on_sort=on_sort />
                            <SortableHeader label="Total" field="total" align="right" sort_key=sort_key sort_direction=sort_direction on_sort=on_sort />
                            <SortableHeader label="Status" field="status" sort_key=sort_key sort_direction=sort_direction on_sort=on_sort />
                            <SortableHeader label="Type" field="type" sort_key=sort_key sort_direction=sort_direction on_sort=on_sort />
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let filter_text = search.get();
                            visible.get().into_iter().map(|order| {
                                view! {
                                    <tr>
                                        <td>{highlight_matches(&order.id, &filter_text)}</td>
                                        <td>{highlight_matches(&order.customer, &filter_text)}</td>
                                        <td>{format_date(order.date)}</td>
                                        <td class="text-right">{format_money(order.total_cents)}</td>
                                        <td>
                                            <StatusBadge label=order.status.label() tone=order.status.tone() />
                                        </td>
                                        <td>{order.order_type.label()}</td>
                                    </tr>
                                }
                            }).collect_view()
                        }}
                    </tbody>
                </table>
                {move || visible.with(|rows| rows.is_empty()).then(|| view! {
                    <div class="empty">{"No orders found for the selected filter."}</div>
                })}
            </div>

            <div class="list-footer">
                {move || ENGINE
                    .summary(visible.with(|rows| rows.len()), items.with(|rows| rows.len()))
                    .label("orders")}
            </div>
        </div>
    }
}
