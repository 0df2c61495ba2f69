pub mod repo_impl;
pub mod insert;
pub mod scan;
pub mod count;

pub use repo_impl::InvoiceRepositoryImpl;
