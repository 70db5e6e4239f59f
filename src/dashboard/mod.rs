//! Dashboard view state: a reducer over page, size, query, loaded entries and
//! the in-place edit buffer. Rendering lives in `ui::components::dashboard`.

pub mod edit;
pub mod pagination;
pub mod state;

pub use edit::{split_subjects, EditBuffer, EditableField};
pub use pagination::{total_pages, PageTarget, Pager, VISIBLE_PAGES};
pub use state::{DashboardAction, DashboardState, LoadStatus};
