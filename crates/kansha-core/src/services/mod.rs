/// Google API clients
pub mod auth;
pub mod sheets;

pub use auth::{AccessToken, TokenExchanger};
pub use sheets::SheetsClient;
