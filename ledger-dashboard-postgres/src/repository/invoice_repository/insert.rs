use async_trait::async_trait;
use ledger_dashboard_db::models::invoice::InvoiceModel;
use ledger_dashboard_db::repository::insert::Insert;
use sqlx::Row;
use std::error::Error;

use super::repo_impl::InvoiceRepositoryImpl;

#[async_trait]
impl Insert<InvoiceModel> for InvoiceRepositoryImpl {
    async fn insert(&self, record: InvoiceModel) -> Result<InvoiceModel, Box<dyn Error + Send + Sync>> {
        Self::insert_impl(self, record).await
    }
}

impl InvoiceRepositoryImpl {
    pub(super) async fn insert_impl(
        repo: &InvoiceRepositoryImpl,
        mut record: InvoiceModel,
    ) -> Result<InvoiceModel, Box<dyn Error + Send + Sync>> {
        if !record.due_date_is_valid() {
            return Err("invoice due_date precedes issue date".into());
        }

        let query = sqlx::query(
            r#"
            INSERT INTO invoice (amount, date, due_date, status, customer_name)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(record.amount)
        .bind(record.date)
        .bind(record.due_date)
        .bind(record.status)
        .bind(record.customer_name.as_str());

        let row = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            query.fetch_one(&mut **transaction).await?
        };

        record.id = row.try_get("id")?;
        Ok(record)
    }
}
