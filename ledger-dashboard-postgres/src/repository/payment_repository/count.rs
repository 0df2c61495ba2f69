use async_trait::async_trait;
use ledger_dashboard_db::models::common_enums::PaymentStatus;
use ledger_dashboard_db::models::payment::PaymentModel;
use ledger_dashboard_db::repository::count::Count;
use ledger_dashboard_db::repository::status_filter::StatusFilter;
use std::error::Error;

use super::repo_impl::PaymentRepositoryImpl;

#[async_trait]
impl Count<PaymentModel> for PaymentRepositoryImpl {
    async fn count(
        &self,
        filter: StatusFilter<PaymentStatus>,
    ) -> Result<u64, Box<dyn Error + Send + Sync>> {
        Self::count_impl(self, filter).await
    }
}

impl PaymentRepositoryImpl {
    pub(super) async fn count_impl(
        repo: &PaymentRepositoryImpl,
        filter: StatusFilter<PaymentStatus>,
    ) -> Result<u64, Box<dyn Error + Send + Sync>> {
        let query = match filter {
            StatusFilter::Unmatched => return Ok(0),
            StatusFilter::Any => sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM payment"#),
            StatusFilter::Is(status) => {
                sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM payment WHERE status = $1"#)
                    .bind(status)
            }
        };

        let total = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            query.fetch_one(&mut **transaction).await?
        };

        Ok(total as u64)
    }
}
