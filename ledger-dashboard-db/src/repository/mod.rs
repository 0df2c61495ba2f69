pub mod append_log;
pub mod count;
pub mod insert;
pub mod list_recent;
pub mod pagination;
pub mod scan;
pub mod status_filter;

#[cfg(feature = "test-utils")]
pub mod memory;

// Re-exports
pub use append_log::*;
pub use count::*;
pub use insert::*;
pub use list_recent::*;
pub use pagination::*;
pub use scan::*;
pub use status_filter::*;

#[cfg(feature = "test-utils")]
pub use memory::*;
