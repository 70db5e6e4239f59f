use crate::ui::{use_app_context, Route};
use dioxus::prelude::*;

/// Layout component with the title bar above the routed content
#[component]
pub fn Navbar() -> Element {
    let app = use_app_context();

    rsx! {
        div {
            id: "navbar",
            class: "bg-gray-800 text-white p-4 flex items-center justify-between",
            span { class: "text-lg font-bold", "Catalog Admin" }
            span { class: "text-sm text-gray-400",
                "{app.config.base_url} / {app.config.subject}"
            }
        }
        Outlet::<Route> {}
    }
}
