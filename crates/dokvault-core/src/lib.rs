//! # dokvault-core
//!
//! Core crate for DokVault. Contains the collaborator traits, configuration
//! schemas, filter types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other DokVault crates.

pub mod config;
pub mod error;
pub mod logging;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
