//! Shared value types.

pub mod filter;

pub use filter::{DocumentField, FieldFilter};
