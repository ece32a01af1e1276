// Public API - what other modules can use
pub use handlers::{
    create_fixture, delete_fixture, generate_fixtures, list_fixtures, update_fixture,
};
pub use scheduler::{generate_schedule, ScheduleOptions};

// Internal modules
mod handlers;
pub mod models;
pub mod repository;
mod scheduler;
pub mod service;
pub mod types;
