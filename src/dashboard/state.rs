use crate::catalog::{CatalogEntry, CatalogPage, PageRequest, PageSize};
use crate::dashboard::edit::{EditBuffer, EditableField};
use crate::dashboard::pagination::{total_pages, PageTarget, Pager};
use tracing::{debug, warn};

/// Where the dashboard is in its fetch cycle
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// Everything the user can do to the dashboard, plus fetch lifecycle events
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    SetPageSize(PageSize),
    SetQuery(String),
    Navigate(PageTarget),
    BeginEdit(usize),
    EditField(EditableField, String),
    SaveEdit,
    FetchStarted,
    FetchSucceeded { epoch: u64, page: CatalogPage },
    FetchFailed { epoch: u64, message: String },
}

/// Complete dashboard view state. Transitions only through [`DashboardState::reduce`].
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub page: u32,
    pub page_size: PageSize,
    pub query: String,
    pub total_count: u64,
    pub entries: Vec<CatalogEntry>,
    pub status: LoadStatus,
    pub edit: Option<EditBuffer>,
    epoch: u64,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

impl DashboardState {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page: 1,
            page_size,
            query: String::new(),
            total_count: 0,
            entries: Vec::new(),
            status: LoadStatus::Idle,
            edit: None,
            epoch: 0,
        }
    }

    /// The fetch this state calls for. Changes whenever page, size or query do.
    pub fn request(&self) -> PageRequest {
        PageRequest {
            page: self.page,
            page_size: self.page_size,
            query: self.query.clone(),
        }
    }

    /// Epoch of the most recently started fetch
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn total_pages(&self) -> u32 {
        total_pages(self.total_count, self.page_size)
    }

    pub fn pager(&self) -> Pager {
        Pager::new(self.page, self.total_pages())
    }

    pub fn is_editing(&self, row: usize) -> bool {
        self.edit.as_ref().is_some_and(|edit| edit.row == row)
    }

    pub fn reduce(mut self, action: DashboardAction) -> Self {
        match action {
            DashboardAction::SetPageSize(page_size) => {
                self.page_size = page_size;
                self.page = 1;
            }
            DashboardAction::SetQuery(query) => {
                self.query = query;
            }
            DashboardAction::Navigate(target) => {
                self.page = self.pager().resolve(target);
            }
            DashboardAction::BeginEdit(row) => match self.entries.get(row) {
                Some(entry) => self.edit = Some(EditBuffer::capture(row, entry)),
                None => debug!("Ignoring edit of missing row {}", row),
            },
            DashboardAction::EditField(field, value) => {
                if let Some(edit) = self.edit.as_mut() {
                    edit.set(field, value);
                }
            }
            DashboardAction::SaveEdit => {
                if let Some(edit) = self.edit.take() {
                    if let Some(entry) = self.entries.get_mut(edit.row) {
                        *entry = edit.apply_to(entry);
                    }
                }
            }
            DashboardAction::FetchStarted => {
                self.epoch += 1;
                self.status = LoadStatus::Loading;
            }
            DashboardAction::FetchSucceeded { epoch, page } => {
                if self.is_stale(epoch) {
                    return self;
                }
                self.entries = page.entries;
                self.total_count = page.total_count;
                self.edit = None;
                self.status = LoadStatus::Ready;
            }
            DashboardAction::FetchFailed { epoch, message } => {
                if self.is_stale(epoch) {
                    return self;
                }
                self.entries.clear();
                self.edit = None;
                self.status = LoadStatus::Failed(message);
            }
        }
        self
    }

    fn is_stale(&self, epoch: u64) -> bool {
        if epoch != self.epoch {
            warn!(
                "Discarding stale fetch result (epoch {}, current {})",
                epoch, self.epoch
            );
            return true;
        }
        false
    }
}
