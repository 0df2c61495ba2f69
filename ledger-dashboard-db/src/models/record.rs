use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::models::identifiable::Identifiable;

/// Common shape of the financial record kinds (Payment, Invoice)
///
/// The generic store operations (`Scan`, `Count`, `Insert`) and the
/// summary fold are written against this trait rather than a concrete
/// record type, so one implementation serves both kinds.
pub trait Record: Identifiable + Clone + Send + Sync + Unpin + 'static {
    /// Status enumeration of this record kind
    type Status: Copy + Eq + std::fmt::Display + Send + Sync + 'static;

    /// Currency amount carried by the record
    fn amount(&self) -> Decimal;

    /// Timestamp used for period bucketing
    fn recorded_at(&self) -> DateTime<Utc>;

    /// Current status of the record
    fn status(&self) -> Self::Status;
}
