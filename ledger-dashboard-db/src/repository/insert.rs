use async_trait::async_trait;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for inserting one record
///
/// The identifier on the passed value is ignored; the store assigns
/// the definitive id and the returned record carries it. Inserts
/// validate record invariants at the store boundary (an invoice whose
/// due date precedes its issue date is rejected).
#[async_trait]
pub trait Insert<T: Identifiable>: Send + Sync {
    /// Insert the record, returning it with the store-assigned id
    async fn insert(&self, record: T) -> Result<T, Box<dyn std::error::Error + Send + Sync>>;
}
