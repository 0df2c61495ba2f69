//! In-memory record store for service-level tests
//!
//! Vec-backed implementation of every store operation trait, so the
//! services can be exercised without a database. Ids are assigned in
//! insertion order starting at 1, matching the relational store's
//! BIGSERIAL behavior; scans return records in insertion order.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;

use crate::models::activity_log::{ActivityLogModel, NewActivityLog};
use crate::models::invoice::InvoiceModel;
use crate::models::payment::PaymentModel;
use crate::models::record::Record;
use crate::repository::append_log::AppendActivity;
use crate::repository::count::Count;
use crate::repository::insert::Insert;
use crate::repository::list_recent::ListRecentActivity;
use crate::repository::pagination::PageRequest;
use crate::repository::scan::Scan;
use crate::repository::status_filter::StatusFilter;

type StoreError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    payments: Vec<PaymentModel>,
    invoices: Vec<InvoiceModel>,
    activity: Vec<ActivityLogModel>,
}

impl Inner {
    fn push_payment(&mut self, mut record: PaymentModel) -> PaymentModel {
        record.id = self.payments.len() as i64 + 1;
        self.payments.push(record.clone());
        record
    }

    fn push_invoice(&mut self, mut record: InvoiceModel) -> InvoiceModel {
        record.id = self.invoices.len() as i64 + 1;
        self.invoices.push(record.clone());
        record
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Test fixture helper; the `Insert` impls go through the same path
    pub fn push_payment(&self, record: PaymentModel) -> PaymentModel {
        self.inner
            .lock()
            .expect("store mutex poisoned")
            .push_payment(record)
    }

    /// Test fixture helper for invoices
    pub fn push_invoice(&self, record: InvoiceModel) -> InvoiceModel {
        self.inner
            .lock()
            .expect("store mutex poisoned")
            .push_invoice(record)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, StoreError> {
        self.inner.lock().map_err(|_| "store mutex poisoned".into())
    }
}

// Shared windowing for both record kinds; filter, then skip, then cap.
fn window<T: Record>(
    records: &[T],
    filter: StatusFilter<T::Status>,
    page: PageRequest,
) -> Vec<T> {
    records
        .iter()
        .filter(|record| filter.matches(record.status()))
        .skip(page.offset)
        .take(page.limit)
        .cloned()
        .collect()
}

fn tally<T: Record>(records: &[T], filter: StatusFilter<T::Status>) -> u64 {
    records
        .iter()
        .filter(|record| filter.matches(record.status()))
        .count() as u64
}

#[async_trait]
impl Insert<PaymentModel> for MemoryStore {
    async fn insert(&self, record: PaymentModel) -> Result<PaymentModel, StoreError> {
        Ok(self.lock()?.push_payment(record))
    }
}

#[async_trait]
impl Insert<InvoiceModel> for MemoryStore {
    async fn insert(&self, record: InvoiceModel) -> Result<InvoiceModel, StoreError> {
        if !record.due_date_is_valid() {
            return Err("invoice due_date precedes issue date".into());
        }
        Ok(self.lock()?.push_invoice(record))
    }
}

#[async_trait]
impl Scan<PaymentModel> for MemoryStore {
    async fn scan(
        &self,
        filter: StatusFilter<<PaymentModel as Record>::Status>,
        page: PageRequest,
    ) -> Result<Vec<PaymentModel>, StoreError> {
        Ok(window(&self.lock()?.payments, filter, page))
    }

    async fn scan_all(&self) -> Result<Vec<PaymentModel>, StoreError> {
        Ok(self.lock()?.payments.clone())
    }
}

#[async_trait]
impl Scan<InvoiceModel> for MemoryStore {
    async fn scan(
        &self,
        filter: StatusFilter<<InvoiceModel as Record>::Status>,
        page: PageRequest,
    ) -> Result<Vec<InvoiceModel>, StoreError> {
        Ok(window(&self.lock()?.invoices, filter, page))
    }

    async fn scan_all(&self) -> Result<Vec<InvoiceModel>, StoreError> {
        Ok(self.lock()?.invoices.clone())
    }
}

#[async_trait]
impl Count<PaymentModel> for MemoryStore {
    async fn count(
        &self,
        filter: StatusFilter<<PaymentModel as Record>::Status>,
    ) -> Result<u64, StoreError> {
        Ok(tally(&self.lock()?.payments, filter))
    }
}

#[async_trait]
impl Count<InvoiceModel> for MemoryStore {
    async fn count(
        &self,
        filter: StatusFilter<<InvoiceModel as Record>::Status>,
    ) -> Result<u64, StoreError> {
        Ok(tally(&self.lock()?.invoices, filter))
    }
}

#[async_trait]
impl AppendActivity for MemoryStore {
    async fn append(&self, entry: NewActivityLog) -> Result<ActivityLogModel, StoreError> {
        let mut inner = self.lock()?;
        let record = ActivityLogModel {
            id: inner.activity.len() as i64 + 1,
            timestamp: Utc::now(),
            event_type: entry.event_type,
            details: entry.details,
            error: entry.error,
        };
        inner.activity.push(record.clone());
        Ok(record)
    }
}

#[async_trait]
impl ListRecentActivity for MemoryStore {
    async fn list_recent(&self, limit: usize) -> Result<Vec<ActivityLogModel>, StoreError> {
        Ok(self
            .lock()?
            .activity
            .iter()
            .rev()
            .take(limit)
            .cloned()
            .collect())
    }
}
