pub mod repo_impl;
pub mod append;
pub mod list_recent;

pub use repo_impl::ActivityLogRepositoryImpl;
