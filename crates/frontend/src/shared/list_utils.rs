//! Shared listing widgets: search box, filter select, sortable headers.
use contracts::enums::StatusTone;
use contracts::shared::listing::SortDirection;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Store rows loaded at mount, or surface the load error.
pub fn apply_loaded<T>(
    result: anyhow::Result<Vec<T>>,
    set_items: WriteSignal<Vec<T>>,
    set_error: WriteSignal<Option<String>>,
) where
    T: Send + Sync + 'static,
{
    match result {
        Ok(rows) => {
            log::debug!("loaded {} rows", rows.len());
            set_items.set(rows);
            set_error.set(None);
        }
        Err(e) => {
            log::error!("{:#}", e);
            set_error.set(Some(format!("{:#}", e)));
        }
    }
}

/// Search debounce delay.
const SEARCH_DEBOUNCE_MS: i32 = 300;

/// Highlight matches in text (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    if filter.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let filter_lower = filter.to_lowercase();
    let text_lower = text.to_lowercase();

    // Byte offsets are only reusable when lower-casing kept the length
    if text_lower.len() != text.len() || !text_lower.contains(&filter_lower) {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;

    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let actual_pos = last_pos + pos;

        if actual_pos > last_pos {
            parts.push(view! { <span>{text[last_pos..actual_pos].to_string()}</span> }.into_any());
        }

        let match_end = actual_pos + filter_lower.len();
        parts.push(view! {
            <mark class="search-highlight">{text[actual_pos..match_end].to_string()}</mark>
        }.into_any());

        last_pos = match_end;
    }

    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Scheduled search: timeout handle plus the JS callback it will invoke.
/// The callback must stay alive until the timeout fires or is cleared.
struct PendingSearch {
    id: i32,
    _callback: Closure<dyn Fn()>,
}

/// Search input with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Current filter value
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new search text
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Local input state (before debounce)
    let (input_value, set_input_value) = signal(value.get_untracked());

    let pending = StoredValue::new_local(None::<PendingSearch>);

    // Cancel the scheduled search; its callback is dropped with it
    let cancel_pending = move || {
        pending.update_value(|slot| {
            if let Some(timer) = slot.take() {
                if let Some(window) = web_sys::window() {
                    window.clear_timeout_with_handle(timer.id);
                }
            }
        });
    };

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        cancel_pending();

        let window = match web_sys::window() {
            Some(w) => w,
            None => {
                on_change.run(new_value);
                return;
            }
        };

        let value_for_timer = new_value.clone();
        let callback = Closure::wrap(Box::new(move || {
            on_change.run(value_for_timer.clone());
        }) as Box<dyn Fn()>);

        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref::<js_sys::Function>(),
            SEARCH_DEBOUNCE_MS,
        ) {
            Ok(id) => pending.set_value(Some(PendingSearch { id, _callback: callback })),
            Err(e) => {
                log::warn!("setTimeout failed, searching immediately: {:?}", e);
                on_change.run(new_value);
            }
        }
    };

    let is_filter_active = move || !value.get().is_empty();

    let clear_filter = move |_| {
        cancel_pending();
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class=move || if is_filter_active() { "search-input search-input-active" } else { "search-input" }>
            <input
                type="text"
                placeholder={placeholder}
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    handle_input_change(val);
                }
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button class="search-input__clear" on:click=clear_filter title="Clear">
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

/// Select over a page's filter options ("All" first)
#[component]
pub fn FilterSelect(
    #[prop(into)]
    label: String,
    options: &'static [&'static str],
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="filter-select">
            <span class="filter-select__label">{label}</span>
            <select
                class="form-control"
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options.iter().map(|option| {
                    let option = *option;
                    view! {
                        <option value=option selected=move || value.get() == option>
                            {option}
                        </option>
                    }
                }).collect_view()}
            </select>
        </label>
    }
}

/// Sort indicator for a column header
pub fn get_sort_indicator(current_field: Option<&str>, field: &str, direction: SortDirection) -> &'static str {
    if current_field == Some(field) {
        if direction.is_ascending() { " ↑" } else { " ↓" }
    } else {
        ""
    }
}

/// Clickable column header; a click requests a sort on `field`
#[component]
pub fn SortableHeader(
    #[prop(into)]
    label: String,
    field: &'static str,
    #[prop(into)]
    sort_key: Signal<Option<String>>,
    #[prop(into)]
    sort_direction: Signal<SortDirection>,
    on_sort: Callback<&'static str>,
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    view! {
        <th
            class="cursor-pointer user-select-none"
            class:text-right={align == "right"}
            on:click=move |_| on_sort.run(field)
            title="Sort"
        >
            {label}
            <span class="sort-indicator">
                {move || sort_key.with(|key| get_sort_indicator(key.as_deref(), field, sort_direction.get()))}
            </span>
        </th>
    }
}

/// Colored status label
#[component]
pub fn StatusBadge(label: &'static str, tone: StatusTone) -> impl IntoView {
    view! {
        <span class=format!("status-badge {}", tone.css_class())>{label}</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator(Some("name"), "name", SortDirection::Ascending), " ↑");
        assert_eq!(get_sort_indicator(Some("name"), "name", SortDirection::Descending), " ↓");
        assert_eq!(get_sort_indicator(Some("orders"), "name", SortDirection::Ascending), "");
        assert_eq!(get_sort_indicator(None, "name", SortDirection::Ascending), "");
    }
}
