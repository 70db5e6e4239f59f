use crate::catalog::OpenLibraryClient;
use crate::config::Config;
use dioxus::prelude::*;

/// Shared services provided to every component at launch
#[derive(Clone)]
pub struct AppContext {
    pub config: Config,
    pub catalog: OpenLibraryClient,
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>()
}
