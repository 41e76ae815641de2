/// Kansha Core - Shared library for the Kansha gratitude-message service
///
/// This crate contains the submission model, configuration, and the two
/// Google API clients (OAuth2 token exchange and Sheets append) used by
/// the Kansha API server.
pub mod constants;
pub mod error;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use error::KanshaError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
