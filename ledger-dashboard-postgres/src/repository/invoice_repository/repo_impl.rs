use ledger_dashboard_db::models::invoice::InvoiceModel;
use sqlx::postgres::PgRow;
use sqlx::Row;
use std::error::Error;

use crate::executor::Executor;
use crate::utils::{get_heapless_string, TryFromRow};

pub struct InvoiceRepositoryImpl {
    pub(crate) executor: Executor,
}

impl InvoiceRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<PgRow> for InvoiceModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(InvoiceModel {
            id: row.try_get("id")?,
            amount: row.try_get("amount")?,
            date: row.try_get("date")?,
            due_date: row.try_get("due_date")?,
            status: row.try_get("status")?,
            customer_name: get_heapless_string(row, "customer_name")?,
        })
    }
}
