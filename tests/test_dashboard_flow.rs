#![cfg(feature = "test-utils")]

mod support;

use crate::support::tracing_init;
use catalog_admin::catalog::{fetch_page, AuthorRecord, CatalogSource, PageSize};
use catalog_admin::dashboard::{
    DashboardAction, DashboardState, EditableField, LoadStatus, PageTarget,
};
use catalog_admin::test_support::MockCatalog;

const ASIMOV: &str = "/authors/OL34221A";
const LE_GUIN: &str = "/authors/OL31353A";

/// Run one fetch cycle the way the dashboard component does
async fn refresh<S: CatalogSource>(state: DashboardState, catalog: &S) -> DashboardState {
    let state = state.reduce(DashboardAction::FetchStarted);
    let epoch = state.epoch();
    let request = state.request();

    let action = match fetch_page(catalog, &request).await {
        Ok(page) => DashboardAction::FetchSucceeded { epoch, page },
        Err(e) => DashboardAction::FetchFailed {
            epoch,
            message: e.to_string(),
        },
    };
    state.reduce(action)
}

fn library() -> MockCatalog {
    MockCatalog::new()
        .with_works(47, ASIMOV, "Isaac Asimov")
        .with_author(
            ASIMOV,
            AuthorRecord {
                name: Some("Isaac Asimov".to_string()),
                birth_date: Some("2 January 1920".to_string()),
                top_work: Some("Foundation".to_string()),
            },
        )
}

#[tokio::test]
async fn test_paging_through_47_records() {
    tracing_init();
    let catalog = library();

    let state = refresh(DashboardState::new(PageSize::Ten), &catalog).await;
    assert_eq!(state.status, LoadStatus::Ready);
    assert_eq!(state.total_pages(), 5);
    assert!(state.pager().on_first_page());
    assert!(!state.pager().on_last_page());

    let state = state.reduce(DashboardAction::Navigate(PageTarget::Last));
    assert_eq!(state.page, 5);
    let state = refresh(state, &catalog).await;

    assert_eq!(state.entries.len(), 7);
    assert!(state.pager().on_last_page());
    assert_eq!(state.pager().window(), vec![3, 4, 5]);

    let state = state.reduce(DashboardAction::Navigate(PageTarget::Next));
    assert_eq!(state.page, 5);
}

#[tokio::test]
async fn test_page_size_change_returns_to_first_page() {
    tracing_init();
    let catalog = library();

    let state = refresh(DashboardState::new(PageSize::Ten), &catalog).await;
    let state = state.reduce(DashboardAction::Navigate(PageTarget::Number(4)));
    let state = refresh(state, &catalog).await;
    assert_eq!(state.page, 4);

    let state = state.reduce(DashboardAction::SetPageSize(PageSize::Fifty));
    assert_eq!(state.page, 1);
    let state = refresh(state, &catalog).await;

    assert_eq!(state.total_pages(), 1);
    assert_eq!(state.entries.len(), 47);
}

#[tokio::test]
async fn test_failed_author_lookup_shows_error_only() {
    tracing_init();
    let catalog = MockCatalog::new()
        .with_work("Foundation", Some(ASIMOV), "Isaac Asimov")
        .with_work("The Word for World Is Forest", Some(LE_GUIN), "Ursula K. Le Guin")
        .with_author(ASIMOV, AuthorRecord::default())
        .with_failing_author(LE_GUIN);

    let state = refresh(DashboardState::new(PageSize::Ten), &catalog).await;

    match &state.status {
        LoadStatus::Failed(message) => assert!(message.contains("503")),
        other => panic!("expected failure, got {:?}", other),
    }
    assert!(state.entries.is_empty());
}

#[tokio::test]
async fn test_new_fetch_discards_unsaved_edit() {
    tracing_init();
    let catalog = library();

    let state = refresh(DashboardState::new(PageSize::Ten), &catalog).await;
    let original_title = state.entries[0].title.clone();

    let state = state
        .reduce(DashboardAction::BeginEdit(0))
        .reduce(DashboardAction::EditField(
            EditableField::Title,
            "Unsaved title".to_string(),
        ))
        .reduce(DashboardAction::SetQuery("asimov".to_string()));
    assert!(state.edit.is_some());

    let state = refresh(state, &catalog).await;

    assert_eq!(state.edit, None);
    assert_eq!(state.entries[0].title, original_title);
}

#[tokio::test]
async fn test_saved_subject_edit_round_trips() {
    tracing_init();
    let catalog = library();

    let state = refresh(DashboardState::new(PageSize::Ten), &catalog).await;
    let state = state
        .reduce(DashboardAction::BeginEdit(2))
        .reduce(DashboardAction::EditField(
            EditableField::Subjects,
            "a, b, c".to_string(),
        ))
        .reduce(DashboardAction::SaveEdit);

    assert_eq!(state.entries[2].subjects, vec!["a", "b", "c"]);
    assert_eq!(EditableField::Subjects.display(&state.entries[2]), "a, b, c");
    assert_eq!(state.entries[2].author_key.as_deref(), Some(ASIMOV));
}

#[tokio::test]
async fn test_superseded_fetch_does_not_overwrite_newer_one() {
    tracing_init();
    let catalog = library();

    // Two fetches start back to back; the older one resolves last.
    let state = DashboardState::new(PageSize::Ten).reduce(DashboardAction::FetchStarted);
    let old_epoch = state.epoch();
    let old_page = fetch_page(&catalog, &state.request()).await.unwrap();

    let state = state
        .reduce(DashboardAction::Navigate(PageTarget::Number(1)))
        .reduce(DashboardAction::SetQuery("nobody".to_string()))
        .reduce(DashboardAction::FetchStarted);
    let new_epoch = state.epoch();
    let new_page = fetch_page(&catalog, &state.request()).await.unwrap();

    let state = state
        .reduce(DashboardAction::FetchSucceeded {
            epoch: new_epoch,
            page: new_page,
        })
        .reduce(DashboardAction::FetchSucceeded {
            epoch: old_epoch,
            page: old_page,
        });

    assert_eq!(state.status, LoadStatus::Ready);
    assert_eq!(state.total_count, 0);
    assert!(state.entries.is_empty());
}
