use ledger_dashboard_api::domain::assistant::AssistantReply;
use ledger_dashboard_api::domain::summary::Summary;
use ledger_dashboard_api::error::{ApiError, ApiResult};
use ledger_dashboard_api::service::activity::{ActivityService, DEFAULT_RECENT_LIMIT};
use ledger_dashboard_api::service::assistant::AssistantService;
use ledger_dashboard_api::service::query::QueryService;
use ledger_dashboard_api::service::summary::SummaryService;
use ledger_dashboard_db::models::activity_log::ActivityLogModel;
use ledger_dashboard_db::models::invoice::InvoiceModel;
use ledger_dashboard_db::models::payment::PaymentModel;
use ledger_dashboard_db::repository::pagination::PageRequest;
use ledger_dashboard_db::repository::status_filter::StatusFilter;

use crate::postgres_repositories::{PostgresStore, StoreSession};

/// Protocol-agnostic boundary over the dashboard operations
///
/// Each call runs inside its own store session: begin a transaction,
/// build the service over the session repositories, commit on success.
/// An error drops the session, which rolls the transaction back. Any
/// transport (HTTP, RPC) can wrap these methods directly; the raw
/// status string and the pagination defaults are resolved here.
pub struct Dashboard {
    store: PostgresStore,
}

impl Dashboard {
    pub fn new(store: PostgresStore) -> Self {
        Self { store }
    }

    pub async fn list_payments(
        &self,
        status: Option<&str>,
        page: Option<PageRequest>,
    ) -> ApiResult<Vec<PaymentModel>> {
        let session = self.begin().await?;
        let service = QueryService::new(
            session.payments.clone(),
            session.invoices.clone(),
            session.activity.clone(),
        );
        let records = service
            .list_payments(StatusFilter::parse(status), page.unwrap_or_default())
            .await?;
        session.commit().await?;
        Ok(records)
    }

    pub async fn list_invoices(
        &self,
        status: Option<&str>,
        page: Option<PageRequest>,
    ) -> ApiResult<Vec<InvoiceModel>> {
        let session = self.begin().await?;
        let service = QueryService::new(
            session.payments.clone(),
            session.invoices.clone(),
            session.activity.clone(),
        );
        let records = service
            .list_invoices(StatusFilter::parse(status), page.unwrap_or_default())
            .await?;
        session.commit().await?;
        Ok(records)
    }

    pub async fn summary(&self) -> ApiResult<Summary> {
        let session = self.begin().await?;
        let service = SummaryService::new(
            session.payments.clone(),
            session.invoices.clone(),
            session.activity.clone(),
        );
        let summary = service.summarize().await?;
        session.commit().await?;
        Ok(summary)
    }

    pub async fn ask(&self, query: &str) -> ApiResult<AssistantReply> {
        let session = self.begin().await?;
        let service = AssistantService::new(
            session.payments.clone(),
            session.invoices.clone(),
            session.activity.clone(),
        );
        let reply = service.ask(query).await?;
        session.commit().await?;
        Ok(reply)
    }

    pub async fn recent_activity(
        &self,
        limit: Option<usize>,
    ) -> ApiResult<Vec<ActivityLogModel>> {
        let session = self.begin().await?;
        let service = ActivityService::new(session.activity.clone());
        let entries = service
            .recent(limit.unwrap_or(DEFAULT_RECENT_LIMIT))
            .await?;
        session.commit().await?;
        Ok(entries)
    }

    async fn begin(&self) -> ApiResult<StoreSession> {
        self.store
            .begin_session()
            .await
            .map_err(|err| ApiError::DatabaseError(err.to_string()))
    }
}

#[cfg(test)]
#[serial_test::serial]
mod tests {
    use super::*;
    use crate::seed::seed_demo_data;
    use crate::test_helper::connect_test_store;

    #[tokio::test]
    #[ignore]
    async fn test_the_boundary_operations_end_to_end(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let store = connect_test_store().await?;
        seed_demo_data(&store).await?;
        let dashboard = Dashboard::new(store);

        let payments = dashboard.list_payments(None, None).await?;
        assert!(payments.len() <= 10);

        let unpaid = dashboard.list_invoices(Some("unpaid"), None).await?;
        assert!(unpaid.iter().all(|i| i.status.to_string() == "unpaid"));

        let summary = dashboard.summary().await?;
        let monthly_payment_total: rust_decimal::Decimal = summary
            .monthly_breakdown
            .values()
            .map(|bucket| bucket.payments)
            .sum();
        assert_eq!(monthly_payment_total, summary.total_payments);

        let reply = dashboard.ask("How many unpaid invoices?").await?;
        assert!(reply.response.contains("unpaid invoices"));

        // The three operations above each appended one audit entry.
        let entries = dashboard.recent_activity(Some(4)).await?;
        assert_eq!(entries.len(), 4);

        Ok(())
    }
}
