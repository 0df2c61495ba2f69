use async_trait::async_trait;
use ledger_dashboard_db::models::common_enums::InvoiceStatus;
use ledger_dashboard_db::models::invoice::InvoiceModel;
use ledger_dashboard_db::repository::count::Count;
use ledger_dashboard_db::repository::status_filter::StatusFilter;
use std::error::Error;

use super::repo_impl::InvoiceRepositoryImpl;

#[async_trait]
impl Count<InvoiceModel> for InvoiceRepositoryImpl {
    async fn count(
        &self,
        filter: StatusFilter<InvoiceStatus>,
    ) -> Result<u64, Box<dyn Error + Send + Sync>> {
        Self::count_impl(self, filter).await
    }
}

impl InvoiceRepositoryImpl {
    pub(super) async fn count_impl(
        repo: &InvoiceRepositoryImpl,
        filter: StatusFilter<InvoiceStatus>,
    ) -> Result<u64, Box<dyn Error + Send + Sync>> {
        let query = match filter {
            StatusFilter::Unmatched => return Ok(0),
            StatusFilter::Any => sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM invoice"#),
            StatusFilter::Is(status) => {
                sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM invoice WHERE status = $1"#)
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

#[cfg(test)]
#[serial_test::serial]
mod tests {
    use crate::test_helper::setup_test_context;
    use heapless::String as HeaplessString;
    use ledger_dashboard_db::models::common_enums::InvoiceStatus;
    use ledger_dashboard_db::models::invoice::InvoiceModel;
    use ledger_dashboard_db::repository::count::Count;
    use ledger_dashboard_db::repository::insert::Insert;
    use ledger_dashboard_db::repository::status_filter::StatusFilter;
    use chrono::{Duration, Utc};
    use rust_decimal::Decimal;

    fn invoice_with(status: InvoiceStatus) -> InvoiceModel {
        let date = Utc::now();
        InvoiceModel {
            id: 0,
            amount: Decimal::new(30_000, 2),
            date,
            due_date: date + Duration::days(14),
            status,
            customer_name: HeaplessString::try_from("Count Fixture").unwrap(),
        }
    }

    #[tokio::test]
    #[ignore]
    async fn test_count_distinguishes_unpaid_from_overdue(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let invoice_repo = &ctx.session.invoices;

        invoice_repo.insert(invoice_with(InvoiceStatus::Unpaid)).await?;
        invoice_repo.insert(invoice_with(InvoiceStatus::Overdue)).await?;
        invoice_repo.insert(invoice_with(InvoiceStatus::Paid)).await?;

        let unpaid = invoice_repo
            .count(StatusFilter::Is(InvoiceStatus::Unpaid))
            .await?;
        assert_eq!(unpaid, 1);
        let everything = invoice_repo.count(StatusFilter::Any).await?;
        assert_eq!(everything, 3);

        Ok(())
    }
}
