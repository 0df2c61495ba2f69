use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::common_enums::InvoiceStatus;
use crate::models::identifiable::Identifiable;
use crate::models::record::Record;

/// # Documentation
/// Invoice issued to a customer. Same read-only lifecycle as Payment.
/// Invariant: `due_date >= date`, checked at the store boundary on
/// insert and by the table constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceModel {
    /// Store-assigned identifier, unique and immutable
    pub id: i64,

    pub amount: Decimal,

    /// Issue timestamp
    pub date: DateTime<Utc>,

    /// Payment deadline; never before the issue timestamp
    pub due_date: DateTime<Utc>,

    pub status: InvoiceStatus,

    pub customer_name: HeaplessString<200>,
}

impl InvoiceModel {
    /// Whether the due date respects the issue date
    pub fn due_date_is_valid(&self) -> bool {
        self.due_date >= self.date
    }
}

impl Identifiable for InvoiceModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}

impl Record for InvoiceModel {
    type Status = InvoiceStatus;

    fn amount(&self) -> Decimal {
        self.amount
    }

    fn recorded_at(&self) -> DateTime<Utc> {
        self.date
    }

    fn status(&self) -> InvoiceStatus {
        self.status
    }
}
