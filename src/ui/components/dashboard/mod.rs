mod controls;
mod error;
mod loading;
mod page;
mod pagination;
mod table;

pub use page::Dashboard;
