use crate::catalog::CatalogEntry;
use crate::dashboard::{EditBuffer, EditableField};
use dioxus::prelude::*;

const HEADER_CLASS: &str =
    "px-4 py-3 text-left text-xs font-medium text-gray-400 uppercase tracking-wider";
const CELL_CLASS: &str = "px-4 py-2 text-sm text-gray-200";

/// Table of loaded entries. At most one row is in edit mode.
#[component]
pub fn CatalogTable(
    entries: Vec<CatalogEntry>,
    edit: Option<EditBuffer>,
    on_begin_edit: EventHandler<usize>,
    on_field_change: EventHandler<(EditableField, String)>,
    on_save: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "overflow-x-auto",
            table { class: "w-full border-collapse bg-gray-800 rounded-lg text-left",
                thead {
                    tr { class: "bg-gray-900",
                        for field in EditableField::ALL {
                            th { key: "{field}", class: HEADER_CLASS, "{field.label()}" }
                        }
                        th { class: HEADER_CLASS, "Actions" }
                    }
                }
                tbody {
                    for (index, entry) in entries.into_iter().enumerate() {
                        CatalogRow {
                            key: "{index}",
                            index,
                            entry,
                            edit: edit.clone().filter(|buffer| buffer.row == index),
                            on_begin_edit,
                            on_field_change,
                            on_save,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CatalogRow(
    index: usize,
    entry: CatalogEntry,
    edit: Option<EditBuffer>,
    on_begin_edit: EventHandler<usize>,
    on_field_change: EventHandler<(EditableField, String)>,
    on_save: EventHandler<()>,
) -> Element {
    rsx! {
        tr { class: "border-t border-gray-700 hover:bg-gray-700",
            for field in EditableField::ALL {
                td { key: "{field}", class: CELL_CLASS,
                    if let Some(buffer) = edit.as_ref() {
                        input {
                            r#type: "text",
                            name: field.name(),
                            class: "w-full p-1 border border-gray-600 rounded bg-gray-900 text-white",
                            value: buffer.value(field).to_string(),
                            oninput: move |event: FormEvent| on_field_change.call((field, event.value())),
                        }
                    } else {
                        {field.display(&entry)}
                    }
                }
            }
            td { class: CELL_CLASS,
                if edit.is_some() {
                    button {
                        class: "bg-green-600 hover:bg-green-500 text-white px-3 py-1 rounded",
                        onclick: move |_| on_save.call(()),
                        "Save"
                    }
                } else {
                    button {
                        class: "bg-blue-600 hover:bg-blue-500 text-white px-3 py-1 rounded",
                        onclick: move |_| on_begin_edit.call(index),
                        "Edit"
                    }
                }
            }
        }
    }
}
