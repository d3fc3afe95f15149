use crate::shared::components::table::{format_money, format_number_int};
use crate::shared::list_utils::{
    apply_loaded, highlight_matches, FilterSelect, SearchInput, SortableHeader, StatusBadge,
};
use contracts::domain::a001_product::aggregate::{sample_products, Product, PRODUCT_LISTING};
use contracts::shared::listing::ListingQueryEngine;
use leptos::prelude::*;

const ENGINE: ListingQueryEngine = ListingQueryEngine::new(PRODUCT_LISTING);

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Product>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let params = RwSignal::new(ENGINE.default_params());

    apply_loaded(sample_products(), set_items, set_error);

    // Re-run on every change of rows or params
    let visible = Memo::new(move |_| items.with(|rows| params.with(|p| ENGINE.query(rows, p))));

    let search = Signal::derive(move || params.with(|p| p.search_text.clone()));
    let filter = Signal::derive(move || params.with(|p| p.filter_value.clone()));
    let sort_key = Signal::derive(move || params.with(|p| p.sort_key.clone()));
    let sort_direction = Signal::derive(move || params.with(|p| p.sort_direction));
    let on_sort = Callback::new(move |field: &'static str| params.update(|p| p.request_sort(field)));

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Products"}</h2>
                <div class="header-actions">
                    <SearchInput
                        value=search
                        on_change=Callback::new(move |val: String| params.update(|p| p.search_text = val))
                        placeholder="Search by name or ID...".to_string()
                    />
                    <FilterSelect
                        label="Category"
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
                            <SortableHeader label="ID" field="id" sort_key=sort_key sort_direction=sort_direction on_sort=on_sort />
                            <SortableHeader label="Name" field="name" sort_key=sort_key sort_direction=sort_direction on_sort=on_sort />
                            <SortableHeader label="Category" field="category" sort_key=sort_key sort_direction=sort_direction on_sort=on_sort />
                            <SortableHeader label="Price" field="price" align="right" sort_key=sort_key sort_direction=sort_direction on_sort=on_sort />
                            <SortableHeader label="Stock" field="stock" align="right" sort_key=sort_key sort_direction=sort_direction on_sort=on_sort />
                            <SortableHeader label="Status" field="status" sort_key=sort_key sort_direction=sort_direction on_sort=on_sort />
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let filter_text = search.get();
                            visible.get().into_iter().map(|product| {
                                view! {
                                    <tr>
                                        <td>{highlight_matches(&product.id, &filter_text)}</td>
                                        <td>{highlight_matches(&product.name, &filter_text)}</td>
                                        <td>{product.category.label()}</td>
                                        <td class="text-right">{format_money(product.price_cents)}</td>
                                        <td class="text-right">{format_number_int(product.stock)}</td>
                                        <td>
                                            <StatusBadge label=product.status.label() tone=product.status.tone() />
                                        </td>
                                    </tr>
                                }
                            }).collect_view()
                        }}
                    </tbody>
                </table>
                {move || visible.with(|rows| rows.is_empty()).then(|| view! {
                    <div class="empty">{"No products found. Try adjusting your search or filters."}</div>
                })}
            </div>

            <div class="list-footer">
                {move || ENGINE
                    .summary(visible.with(|rows| rows.len()), items.with(|rows| rows.len()))
                    .label("products")}
            </div>
        </div>
    }
}
