/// Data models
pub mod config;
pub mod submission;

pub use config::{GoogleConfig, ServiceAccountKey};
pub use submission::Submission;
