pub mod activity_log_repository;
pub mod invoice_repository;
pub mod payment_repository;
