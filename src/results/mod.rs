// Public API - what other modules can use
pub use handlers::{create_result, delete_result, list_results, update_result};
pub use models::MatchResult;

// Internal modules
mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod types;
