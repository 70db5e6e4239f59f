use catalog_admin::catalog::OpenLibraryClient;
use catalog_admin::config::Config;
use catalog_admin::ui::{make_config, App};
use catalog_admin::AppContext;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    // Use RUST_LOG env var if set, otherwise default to info level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::load();

    let catalog = match OpenLibraryClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create catalog client: {}", e);
            std::process::exit(1);
        }
    };

    info!("Starting dashboard for subject '{}'", config.subject);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_config())
        .with_context(AppContext { config, catalog })
        .launch(App);
}
