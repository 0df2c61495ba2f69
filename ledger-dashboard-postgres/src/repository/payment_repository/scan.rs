use async_trait::async_trait;
use ledger_dashboard_db::models::common_enums::PaymentStatus;
use ledger_dashboard_db::models::payment::PaymentModel;
use ledger_dashboard_db::repository::pagination::PageRequest;
use ledger_dashboard_db::repository::scan::Scan;
use ledger_dashboard_db::repository::status_filter::StatusFilter;
use std::error::Error;

use super::repo_impl::PaymentRepositoryImpl;
use crate::utils::TryFromRow;

#[async_trait]
impl Scan<PaymentModel> for PaymentRepositoryImpl {
    async fn scan(
        &self,
        filter: StatusFilter<PaymentStatus>,
        page: PageRequest,
    ) -> Result<Vec<PaymentModel>, Box<dyn Error + Send + Sync>> {
        Self::scan_impl(self, filter, page).await
    }

    async fn scan_all(&self) -> Result<Vec<PaymentModel>, Box<dyn Error + Send + Sync>> {
        Self::scan_all_impl(self).await
    }
}

impl PaymentRepositoryImpl {
    pub(super) async fn scan_impl(
        repo: &PaymentRepositoryImpl,
        filter: StatusFilter<PaymentStatus>,
        page: PageRequest,
    ) -> Result<Vec<PaymentModel>, Box<dyn Error + Send + Sync>> {
        // Store-native order is ascending id; stable within the transaction.
        let query = match filter {
            StatusFilter::Unmatched => return Ok(Vec::new()),
            StatusFilter::Any => sqlx::query(
                r#"SELECT * FROM payment ORDER BY id LIMIT $1 OFFSET $2"#,
            )
            .bind(page.limit as i64)
            .bind(page.offset as i64),
            StatusFilter::Is(status) => sqlx::query(
                r#"SELECT * FROM payment WHERE status = $1 ORDER BY id LIMIT $2 OFFSET $3"#,
            )
            .bind(status)
            .bind(page.limit as i64)
            .bind(page.offset as i64),
        };

        let rows = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            query.fetch_all(&mut **transaction).await?
        };

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            records.push(PaymentModel::try_from_row(&row)?);
        }
        Ok(records)
    }

    pub(super) async fn scan_all_impl(
        repo: &PaymentRepositoryImpl,
    ) -> Result<Vec<PaymentModel>, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(r#"SELECT * FROM payment ORDER BY id"#);

        let rows = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            query.fetch_all(&mut **transaction).await?
        };

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            records.push(PaymentModel::try_from_row(&row)?);
        }
        Ok(records)
    }
}
