//! Cleanarch core library — parameter types, validation, errors.
//!
//! Public API surface:
//! - [`types`] — newtypes and [`ProjectConfig`]
//! - [`error`] — [`ConfigError`]

pub mod error;
pub mod types;

pub use error::ConfigError;
pub use types::{ModulePath, ProjectConfig, ProjectName};
