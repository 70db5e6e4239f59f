use crate::dashboard::{PageTarget, Pager};
use dioxus::prelude::*;

/// First / Prev / numbered window / Next / Last
#[component]
pub fn PaginationBar(pager: Pager, on_navigate: EventHandler<PageTarget>) -> Element {
    let at_start = pager.on_first_page();
    let at_end = pager.on_last_page();

    rsx! {
        nav { class: "flex gap-1 mt-4",
            PageButton {
                label: "«",
                disabled: at_start,
                on_click: move |_| on_navigate.call(PageTarget::First),
            }
            PageButton {
                label: "‹",
                disabled: at_start,
                on_click: move |_| on_navigate.call(PageTarget::Previous),
            }
            for number in pager.window() {
                PageButton {
                    key: "{number}",
                    label: number.to_string(),
                    active: number == pager.current,
                    on_click: move |_| on_navigate.call(PageTarget::Number(number)),
                }
            }
            PageButton {
                label: "›",
                disabled: at_end,
                on_click: move |_| on_navigate.call(PageTarget::Next),
            }
            PageButton {
                label: "»",
                disabled: at_end,
                on_click: move |_| on_navigate.call(PageTarget::Last),
            }
        }
    }
}

#[component]
fn PageButton(
    label: String,
    #[props(default)] disabled: bool,
    #[props(default)] active: bool,
    on_click: EventHandler<()>,
) -> Element {
    let class = if active {
        "px-3 py-1 rounded bg-blue-600 text-white"
    } else {
        "px-3 py-1 rounded bg-gray-700 text-gray-200 hover:bg-gray-600 disabled:opacity-40"
    };

    rsx! {
        button {
            class: "{class}",
            disabled: disabled,
            onclick: move |_| on_click.call(()),
            "{label}"
        }
    }
}
