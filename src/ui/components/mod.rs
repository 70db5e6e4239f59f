mod app;
pub mod dashboard;
mod navbar;

pub use app::App;
pub use dashboard::Dashboard;
pub use navbar::Navbar;
