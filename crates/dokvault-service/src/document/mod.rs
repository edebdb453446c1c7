//! Document browsing, editing, and bulk operations.

pub mod bulk;
pub mod filter;
pub mod service;

pub use bulk::BulkService;
pub use filter::{DocumentFilter, distinct_values, search};
pub use service::DocumentService;
