pub mod dashboard;
pub mod executor;
pub mod postgres_repositories;
pub mod repository;
pub mod seed;
pub mod utils;

pub use dashboard::Dashboard;
pub use postgres_repositories::{PostgresStore, StoreSession};
pub use repository::activity_log_repository::ActivityLogRepositoryImpl;
pub use repository::invoice_repository::InvoiceRepositoryImpl;
pub use repository::payment_repository::PaymentRepositoryImpl;

#[cfg(test)]
pub mod test_helper;
