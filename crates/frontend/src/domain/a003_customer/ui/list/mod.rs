use crate::shared::components::table::{format_money, format_number_int};
use crate::shared::components::StatCard;
use crate::shared::date_utils::format_optional_date;
use crate::shared::list_utils::{
    apply_loaded, highlight_matches, FilterSelect, SearchInput, SortableHeader, StatusBadge,
};
use contracts::domain::a003_customer::aggregate::{
    sample_customers, Customer, CustomerStatus, CUSTOMER_LISTING,
};
use contracts::shared::listing::ListingQueryEngine;
use leptos::prelude::*;

const ENGINE: ListingQueryEngine = ListingQueryEngine::new(CUSTOMER_LISTING);

/// Mean spend in cents, 0 for an empty list
fn average_spend_cents(customers: &[Customer]) -> i64 {
    if customers.is_empty() {
        return 0;
    }
    let total: i64 = customers.iter().map(|c| c.total_spent_cents).sum();
    total / customers.len() as i64
}

/// "N% of all customers", `None` while the list is empty
fn share_subtitle(part: usize, total: usize) -> Option<String> {
    if total == 0 {
        return None;
    }
    let percent = (part * 100 + total / 2) / total;
    Some(format!("{}% of all customers", percent))
}

#[component]
#[allow(non_snake_case)]
pub fn CustomerList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Customer>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let params = RwSignal::new(ENGINE.default_params());

    apply_loaded(sample_customers(), set_items, set_error);

    let visible = Memo::new(move |_| items.with(|rows| params.with(|p| ENGINE.query(rows, p))));

    let search = Signal::derive(move || params.with(|p| p.search_text.clone()));
    let filter = Signal::derive(move || params.with(|p| p.filter_value.clone()));
    let sort_key = Signal::derive(move || params.with(|p| p.sort_key.clone()));
    let sort_direction = Signal::derive(move || params.with(|p| p.sort_direction));
    let on_sort = Callback::new(move |field: &'static str| params.update(|p| p.request_sort(field)));

    // Stat cards count the whole customer base, not the filtered view
    let total_count = Signal::derive(move || format_number_int(items.with(|rows| rows.len()) as i64));
    let active_count = Signal::derive(move || {
        let count = items.with(|rows| ENGINE.count_matching(rows, CustomerStatus::Active.label()));
        format_number_int(count as i64)
    });
    let new_count = Signal::derive(move || {
        let count = items.with(|rows| ENGINE.count_matching(rows, CustomerStatus::New.label()));
        format_number_int(count as i64)
    });
    let active_share = Signal::derive(move || {
        items.with(|rows| {
            share_subtitle(ENGINE.count_matching(rows, CustomerStatus::Active.label()), rows.len())
        })
    });
    let new_share = Signal::derive(move || {
        items.with(|rows| {
            share_subtitle(ENGINE.count_matching(rows, CustomerStatus::New.label()), rows.len())
        })
    });
    let average_spend = Signal::derive(move || format_money(items.with(|rows| average_spend_cents(rows))));

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Customers"}</h2>
            </div>

            <div class="stat-cards">
                <StatCard label="Total Customers" icon_name="customers" value=total_count />
                <StatCard label="Active Customers" icon_name="customers" value=active_count subtitle=active_share />
                <StatCard label="New Customers" icon_name="customers" value=new_count subtitle=new_share />
                <StatCard label="Average Spend" icon_name="orders" value=average_spend />
            </div>

            <div class="header-actions">
                <SearchInput
                    value=search
                    on_change=Callback::new(move |val: String| params.update(|p| p.search_text = val))
                    placeholder="Search by name, email or ID...".to_string()
                />
                <FilterSelect
                    label="Status"
                    options=ENGINE.config().filter_options
                    value=filter
                    on_change=Callback::new(move |val: String| params.update(|p| p.filter_value = val))
                />
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="table-container">
                <table>
                    <thead>
                        <tr>
                            <SortableHeader label="Customer" field="name" sort_key=sort_key sort_direction=sort_direction on_sort=on_sort />
                            <th>{"Contact"}</th>
                            <SortableHeader label="Orders" field="orders" align="right" sort_key=sort_key sort_direction=sort_direction on_sort=on_sort />
                            <SortableHeader label="Total Spent" field="totalSpent" align="right" sort_key=sort_key sort_direction=sort_direction on_sort=on_sort />
                            <SortableHeader label="Status" field="status" sort_key=sort_key sort_direction=sort_direction on_sort=on_sort />
                            <SortableHeader label="Last Order" field="lastOrder" sort_key=sort_key sort_direction=sort_direction on_sort=on_sort />
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let filter_text = search.get();
                            visible.get().into_iter().map(|customer| {
                                view! {
                                    <tr>
                                        <td>
                                            <div>{highlight_matches(&customer.name, &filter_text)}</div>
                                            <div class="text-muted">{highlight_matches(&customer.id, &filter_text)}</div>
                                        </td>
                                        <td>
                                            <div>{highlight_matches(&customer.email, &filter_text)}</div>
                                            <div class="text-muted">{customer.phone.clone()}</div>
                                        </td>
                                        <td class="text-right">{format_number_int(customer.orders)}</td>
                                        <td class="text-right">{format_money(customer.total_spent_cents)}</td>
                                        <td>
                                            <StatusBadge label=customer.status.label() tone=customer.status.tone() />
                                        </td>
                                        <td>{format_optional_date(customer.last_order)}</td>
                                    </tr>
                                }
                            }).collect_view()
                        }}
                    </tbody>
                </table>
                {move || visible.with(|rows| rows.is_empty()).then(|| view! {
                    <div class="empty">{"No customers found. Try adjusting your search or filters."}</div>
                })}
            </div>

            <div class="list-footer">
                {move || ENGINE
                    .summary(visible.with(|rows| rows.len()), items.with(|rows| rows.len()))
                    .label("customers")}
            </div>
        </div>
    }
}
