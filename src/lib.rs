pub mod config;
pub mod error;
pub mod provision;

pub use config::Config;
pub use error::InitError;
