use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::common_enums::PaymentStatus;
use crate::models::identifiable::Identifiable;
use crate::models::record::Record;

/// # Documentation
/// Payment records a single captured money movement. Records are
/// created by seeding or future write paths and are read-only
/// afterwards; the dashboard never mutates or deletes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentModel {
    /// Store-assigned identifier, unique and immutable
    pub id: i64,

    /// Non-negative currency amount
    pub amount: Decimal,

    /// When the payment happened
    pub date: DateTime<Utc>,

    pub status: PaymentStatus,

    /// Free-text description (counterparty, memo)
    pub description: HeaplessString<200>,
}

impl Identifiable for PaymentModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}

impl Record for PaymentModel {
    type Status = PaymentStatus;

    fn amount(&self) -> Decimal {
        self.amount
    }

    fn recorded_at(&self) -> DateTime<Utc> {
        self.date
    }

    fn status(&self) -> PaymentStatus {
        self.status
    }
}
