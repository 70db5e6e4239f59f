use crate::catalog::{fetch_page, PageSize};
use crate::dashboard::{DashboardAction, DashboardState, EditableField, LoadStatus, PageTarget};
use crate::ui::use_app_context;
use dioxus::prelude::*;
use tracing::debug;

use super::controls::{AuthorSearchInput, PageSizeSelect};
use super::error::DashboardError;
use super::loading::DashboardLoading;
use super::pagination::PaginationBar;
use super::table::CatalogTable;

/// Admin dashboard listing catalog works with paging, author search and
/// in-place editing
#[component]
pub fn Dashboard() -> Element {
    let app = use_app_context();
    let initial_page_size = app.config.default_page_size;
    let state = use_signal(move || DashboardState::new(initial_page_size));

    // Only page, size and query drive a fetch. Edits must not.
    let request = use_memo(move || state.read().request());

    use_effect(move || {
        let request = request();
        let catalog = app.catalog.clone();

        dispatch(state, DashboardAction::FetchStarted);
        let epoch = state.peek().epoch();
        debug!("Fetching {:?} (epoch {})", request, epoch);

        spawn(async move {
            let action = match fetch_page(&catalog, &request).await {
                Ok(page) => DashboardAction::FetchSucceeded { epoch, page },
                Err(e) => DashboardAction::FetchFailed {
                    epoch,
                    message: e.to_string(),
                },
            };
            dispatch(state, action);
        });
    });

    let current = state.read();
    let pager = current.pager();

    rsx! {
        div { class: "container mx-auto p-6",
            h1 { class: "text-3xl font-bold mb-6", "Admin Dashboard" }

            PageSizeSelect {
                value: current.page_size,
                on_change: move |size: PageSize| dispatch(state, DashboardAction::SetPageSize(size)),
            }
            AuthorSearchInput {
                value: current.query.clone(),
                on_input: move |query: String| dispatch(state, DashboardAction::SetQuery(query)),
            }

            match &current.status {
                LoadStatus::Idle | LoadStatus::Loading => rsx! {
                    DashboardLoading {}
                },
                LoadStatus::Failed(message) => rsx! {
                    DashboardError { message: message.clone() }
                },
                LoadStatus::Ready => rsx! {
                    CatalogTable {
                        entries: current.entries.clone(),
                        edit: current.edit.clone(),
                        on_begin_edit: move |row: usize| dispatch(state, DashboardAction::BeginEdit(row)),
                        on_field_change: move |(field, value): (EditableField, String)| {
                            dispatch(state, DashboardAction::EditField(field, value))
                        },
                        on_save: move |_| dispatch(state, DashboardAction::SaveEdit),
                    }
                    PaginationBar {
                        pager,
                        on_navigate: move |target: PageTarget| dispatch(state, DashboardAction::Navigate(target)),
                    }
                },
            }
        }
    }
}

fn dispatch(mut state: Signal<DashboardState>, action: DashboardAction) {
    let mut current = state.write();
    *current = std::mem::take(&mut *current).reduce(action);
}
