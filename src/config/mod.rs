//! Configuration module
//!
//! Settings loading and validation for the CampusHub client.

pub mod settings;
pub mod validation;

pub use settings::{ApiConfig, LoggingConfig, Settings, SocketConfig, StorageConfig};
