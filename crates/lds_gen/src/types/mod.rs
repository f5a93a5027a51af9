//! Shared types.
//!
//! - [`error::LdsError`]: construction and validation errors

pub mod error;

pub use error::LdsError;
