// Public API - what other modules can use
pub use handlers::get_league_table;
pub use models::{Outcome, Standing};
pub use table::compute_table;

// Internal modules
mod handlers;
pub mod models;
mod table;
pub mod types;
