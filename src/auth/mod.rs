// Public API - what other modules can use
pub use handlers::admin_login;
pub use middleware::admin_auth;
pub use service::AdminAuthService;
pub use token::TokenConfig;
pub use types::AdminClaims;

// Internal modules
mod handlers;
mod middleware;
mod service;
mod token;
pub mod types;
