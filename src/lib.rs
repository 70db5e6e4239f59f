// Library exports for integration tests and reusable components

pub mod catalog;
pub mod config;
pub mod dashboard;

// Internal modules needed for compilation (hidden from docs)
#[doc(hidden)]
pub mod ui;

// Re-export AppContext at crate root for easier access
pub use ui::AppContext;

// Test support (only available with test-utils feature)
#[cfg(any(test, feature = "test-utils"))]
pub mod test_support;
