use std::sync::Arc;

use ledger_dashboard_db::models::activity_log::NewActivityLog;
use ledger_dashboard_db::models::common_enums::{EventType, InvoiceStatus, PaymentStatus};
use ledger_dashboard_db::models::invoice::InvoiceModel;
use ledger_dashboard_db::models::payment::PaymentModel;
use ledger_dashboard_db::repository::append_log::AppendActivity;
use ledger_dashboard_db::repository::pagination::PageRequest;
use ledger_dashboard_db::repository::scan::Scan;
use ledger_dashboard_db::repository::status_filter::StatusFilter;

use crate::error::ApiResult;
use crate::service::activity::log_activity;

/// Paginated, filtered listings over the two record kinds
///
/// Records come back unmodified in store-native order. Every listing
/// appends exactly one `agent_request` audit entry after the records
/// are obtained, empty results included.
pub struct QueryService<P, I, L> {
    payments: Arc<P>,
    invoices: Arc<I>,
    activity: Arc<L>,
}

impl<P, I, L> QueryService<P, I, L>
where
    P: Scan<PaymentModel>,
    I: Scan<InvoiceModel>,
    L: AppendActivity,
{
    pub fn new(payments: Arc<P>, invoices: Arc<I>, activity: Arc<L>) -> Self {
        Self {
            payments,
            invoices,
            activity,
        }
    }

    pub async fn list_payments(
        &self,
        filter: StatusFilter<PaymentStatus>,
        page: PageRequest,
    ) -> ApiResult<Vec<PaymentModel>> {
        let records = self.payments.scan(filter, page).await?;
        let details = format!(
            "Fetched payments. Skip: {}, Limit: {}, Status: {filter}",
            page.offset, page.limit
        );
        log_activity(
            &*self.activity,
            NewActivityLog::new(EventType::AgentRequest, &details),
        )
        .await;
        Ok(records)
    }

    pub async fn list_invoices(
        &self,
        filter: StatusFilter<InvoiceStatus>,
        page: PageRequest,
    ) -> ApiResult<Vec<InvoiceModel>> {
        let records = self.invoices.scan(filter, page).await?;
        let details = format!(
            "Fetched invoices. Skip: {}, Limit: {}, Status: {filter}",
            page.offset, page.limit
        );
        log_activity(
            &*self.activity,
            NewActivityLog::new(EventType::AgentRequest, &details),
        )
        .await;
        Ok(records)
    }
}
