use async_trait::async_trait;
use ledger_dashboard_db::models::payment::PaymentModel;
use ledger_dashboard_db::repository::insert::Insert;
use sqlx::Row;
use std::error::Error;

use super::repo_impl::PaymentRepositoryImpl;

#[async_trait]
impl Insert<PaymentModel> for PaymentRepositoryImpl {
    async fn insert(&self, record: PaymentModel) -> Result<PaymentModel, Box<dyn Error + Send + Sync>> {
        Self::insert_impl(self, record).await
    }
}

impl PaymentRepositoryImpl {
    pub(super) async fn insert_impl(
        repo: &PaymentRepositoryImpl,
        mut record: PaymentModel,
    ) -> Result<PaymentModel, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(
            r#"
            INSERT INTO payment (amount, date, status, description)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(record.amount)
        .bind(record.date)
        .bind(record.status)
        .bind(record.description.as_str());

        let row = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            query.fetch_one(&mut **transaction).await?
        };

        record.id = row.try_get("id")?;
        Ok(record)
    }
}
