// Public API - what other modules can use
pub use handlers::{create_player, delete_player, list_players, update_player};
pub use models::Player;
pub use roster::default_roster;

// Internal modules
mod handlers;
pub mod models;
pub mod repository;
mod roster;
pub mod service;
pub mod types;
