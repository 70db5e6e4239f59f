use crate::catalog::PageSize;
use dioxus::prelude::*;
use tracing::warn;

/// Records-per-page selector
#[component]
pub fn PageSizeSelect(value: PageSize, on_change: EventHandler<PageSize>) -> Element {
    rsx! {
        div { class: "mb-3",
            label {
                r#for: "perPageSelect",
                class: "block text-sm font-medium text-gray-300 mb-2",
                "Records per page:"
            }
            select {
                id: "perPageSelect",
                class: "w-full p-2 border border-gray-600 rounded bg-gray-800 text-white",
                value: "{value}",
                onchange: move |event: FormEvent| match event.value().parse::<PageSize>() {
                    Ok(size) => on_change.call(size),
                    Err(e) => warn!("Ignoring page size selection: {}", e),
                },
                for size in PageSize::ALL {
                    option { key: "{size}", value: "{size}", selected: size == value, "{size}" }
                }
            }
        }
    }
}

/// Free-text author filter; every keystroke is forwarded
#[component]
pub fn AuthorSearchInput(value: String, on_input: EventHandler<String>) -> Element {
    rsx! {
        div { class: "mb-3",
            label {
                r#for: "searchInput",
                class: "block text-sm font-medium text-gray-300 mb-2",
                "Search by Author:"
            }
            input {
                id: "searchInput",
                r#type: "text",
                class: "w-full p-2 border border-gray-600 rounded bg-gray-800 text-white",
                placeholder: "Enter author name",
                value: "{value}",
                oninput: move |event: FormEvent| on_input.call(event.value()),
            }
        }
    }
}
