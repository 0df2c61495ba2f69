use ledger_dashboard_db::models::activity_log::ActivityLogModel;
use sqlx::postgres::PgRow;
use sqlx::Row;
use std::error::Error;

use crate::executor::Executor;
use crate::utils::{get_heapless_string, get_optional_heapless_string, TryFromRow};

pub struct ActivityLogRepositoryImpl {
    pub(crate) executor: Executor,
}

impl ActivityLogRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<PgRow> for ActivityLogModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(ActivityLogModel {
            id: row.try_get("id")?,
            timestamp: row.try_get("timestamp")?,
            event_type: row.try_get("event_type")?,
            details: get_heapless_string(row, "details")?,
            error: get_optional_heapless_string(row, "error")?,
        })
    }
}
