pub mod actions;
pub mod setup;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use actions::ApiResponse;
#[allow(unused_imports)]
pub use setup::{TestApp, TestAppBuilder, ADMIN_PASSWORD};
