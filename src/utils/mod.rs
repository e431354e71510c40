//! Utilities module
//!
//! Shared error types, date helpers, validation and logging setup.

pub mod dates;
pub mod errors;
pub mod logging;
pub mod validation;

pub use errors::{CampusHubError, Result};
