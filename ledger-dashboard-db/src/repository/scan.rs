use async_trait::async_trait;

use crate::models::record::Record;
use crate::repository::pagination::PageRequest;
use crate::repository::status_filter::StatusFilter;

/// Generic repository trait for listing the records of one kind
///
/// Results come back in store-native order (ascending id), which is
/// stable across calls within one transaction. The status filter is
/// applied first, then the offset, then the limit. A window that falls
/// past the end of the table is an empty result, not an error.
///
/// # Type Parameters
/// * `T` - The record kind, which must implement the Record trait
///
/// # Example
/// ```ignore
/// let unpaid = repo
///     .scan(StatusFilter::Is(InvoiceStatus::Unpaid), PageRequest::default())
///     .await?;
/// ```
#[async_trait]
pub trait Scan<T: Record>: Send + Sync {
    /// Scan records passing the filter, windowed by `page`
    async fn scan(
        &self,
        filter: StatusFilter<T::Status>,
        page: PageRequest,
    ) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;

    /// Scan every record of the kind in store-native order
    async fn scan_all(&self) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
