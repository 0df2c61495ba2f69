//! Fixture builders shared by the service tests

use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use heapless::String as HeaplessString;
use ledger_dashboard_db::models::common_enums::{InvoiceStatus, PaymentStatus};
use ledger_dashboard_db::models::invoice::InvoiceModel;
use ledger_dashboard_db::models::payment::PaymentModel;
use ledger_dashboard_db::repository::memory::MemoryStore;
use rust_decimal::Decimal;

pub(crate) fn store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::new())
}

/// Payment of `cents`/100 currency units dated the 15th of the month
pub(crate) fn payment(cents: i64, year: i32, month: u32, status: PaymentStatus) -> PaymentModel {
    PaymentModel {
        id: 0,
        amount: Decimal::new(cents, 2),
        date: Utc.with_ymd_and_hms(year, month, 15, 12, 0, 0).unwrap(),
        status,
        description: HeaplessString::try_from("test payment").unwrap(),
    }
}

/// Invoice dated the 10th of the month, due 30 days later
pub(crate) fn invoice(cents: i64, year: i32, month: u32, status: InvoiceStatus) -> InvoiceModel {
    let date = Utc.with_ymd_and_hms(year, month, 10, 9, 0, 0).unwrap();
    InvoiceModel {
        id: 0,
        amount: Decimal::new(cents, 2),
        date,
        due_date: date + Duration::days(30),
        status,
        customer_name: HeaplessString::try_from("Test Customer").unwrap(),
    }
}
