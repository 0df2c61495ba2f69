use async_trait::async_trait;

use crate::models::record::Record;
use crate::repository::status_filter::StatusFilter;

/// Generic repository trait for counting the records of one kind
///
/// Counting an `Unmatched` filter yields 0, mirroring `Scan`.
///
/// # Type Parameters
/// * `T` - The record kind, which must implement the Record trait
#[async_trait]
pub trait Count<T: Record>: Send + Sync {
    /// Count records passing the filter
    async fn count(
        &self,
        filter: StatusFilter<T::Status>,
    ) -> Result<u64, Box<dyn std::error::Error + Send + Sync>>;
}
