/// API endpoint modules
pub mod health;
pub mod messages;
