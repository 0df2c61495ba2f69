use ledger_dashboard_db::models::payment::PaymentModel;
use sqlx::postgres::PgRow;
use sqlx::Row;
use std::error::Error;

use crate::executor::Executor;
use crate::utils::{get_heapless_string, TryFromRow};

pub struct PaymentRepositoryImpl {
    pub(crate) executor: Executor,
}

impl PaymentRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<PgRow> for PaymentModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(PaymentModel {
            id: row.try_get("id")?,
            amount: row.try_get("amount")?,
            date: row.try_get("date")?,
            status: row.try_get("status")?,
            description: get_heapless_string(row, "description")?,
        })
    }
}
