use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Totals for one "YYYY-MM" period
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTotals {
    pub payments: Decimal,
    pub invoices: Decimal,
}

/// Aggregate view over every payment and invoice record
///
/// Recomputed from the current store contents on every request; a pure
/// view with no independent lifecycle, never cached. An empty store
/// yields all-zero totals and an empty breakdown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_payments: Decimal,
    pub total_invoices: Decimal,
    /// Count of invoices with status unpaid (overdue is a distinct
    /// status and is not included)
    pub unpaid_invoices_count: u64,
    pub unpaid_invoices_amount: Decimal,
    /// Period key -> totals; a period seen for only one record kind
    /// still appears, with the other side at zero
    pub monthly_breakdown: BTreeMap<String, MonthlyTotals>,
}

/// "YYYY-MM" bucket key for a record timestamp
pub fn period_key(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m").to_string()
}
