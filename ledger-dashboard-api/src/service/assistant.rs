use std::sync::Arc;

use chrono::Utc;
use ledger_dashboard_db::models::activity_log::NewActivityLog;
use ledger_dashboard_db::models::common_enums::{EventType, InvoiceStatus};
use ledger_dashboard_db::models::invoice::InvoiceModel;
use ledger_dashboard_db::models::payment::PaymentModel;
use ledger_dashboard_db::repository::append_log::AppendActivity;
use ledger_dashboard_db::repository::count::Count;
use ledger_dashboard_db::repository::status_filter::StatusFilter;

use crate::domain::assistant::AssistantReply;
use crate::error::ApiResult;
use crate::service::activity::log_activity;

/// Deterministic keyword classifier standing in for an assistant
///
/// An ordered rule list over the lowercased query plus live record
/// counts; not a language model, and deliberately kept that way so the
/// responses are reproducible. Upgrading this to real language
/// understanding is a separate project.
pub struct AssistantService<P, I, L> {
    payments: Arc<P>,
    invoices: Arc<I>,
    activity: Arc<L>,
}

impl<P, I, L> AssistantService<P, I, L>
where
    P: Count<PaymentModel>,
    I: Count<InvoiceModel>,
    L: AppendActivity,
{
    pub fn new(payments: Arc<P>, invoices: Arc<I>, activity: Arc<L>) -> Self {
        Self {
            payments,
            invoices,
            activity,
        }
    }

    /// Answer a free-text question; this cannot fail on any input, so
    /// the audit entry's error field is always null
    pub async fn ask(&self, query: &str) -> ApiResult<AssistantReply> {
        let lowered = query.to_lowercase();

        // First match wins; the branch order is part of the contract.
        let response = if lowered.contains("invoice") {
            let total = self.invoices.count(StatusFilter::Any).await?;
            let unpaid = self
                .invoices
                .count(StatusFilter::Is(InvoiceStatus::Unpaid))
                .await?;
            format!("I found {total} invoices in total. There are {unpaid} unpaid invoices currently.")
        } else if lowered.contains("payment") {
            let total = self.payments.count(StatusFilter::Any).await?;
            format!("There are {total} payment records in the system.")
        } else if lowered.contains("summary") || lowered.contains("overview") {
            "The summary shows we are tracking payments and invoices. You can check the dashboard for charts."
                .to_string()
        } else {
            "I can help you with questions about invoices and payments. Try asking 'How many unpaid invoices are there?'"
                .to_string()
        };

        log_activity(
            &*self.activity,
            NewActivityLog::new(EventType::AssistantQuery, &format!("Query: {query}")),
        )
        .await;

        Ok(AssistantReply {
            response,
            timestamp: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::test_support::{invoice, payment, store};
    use ledger_dashboard_db::models::common_enums::PaymentStatus;
    use ledger_dashboard_db::repository::list_recent::ListRecentActivity;

    async fn seeded_service() -> (
        std::sync::Arc<ledger_dashboard_db::repository::memory::MemoryStore>,
        AssistantService<
            ledger_dashboard_db::repository::memory::MemoryStore,
            ledger_dashboard_db::repository::memory::MemoryStore,
            ledger_dashboard_db::repository::memory::MemoryStore,
        >,
    ) {
        let store = store();
        store.push_payment(payment(10_000, 2024, 1, PaymentStatus::Paid));
        store.push_payment(payment(20_000, 2024, 2, PaymentStatus::Failed));
        store.push_invoice(invoice(30_000, 2024, 1, InvoiceStatus::Unpaid));
        store.push_invoice(invoice(40_000, 2024, 2, InvoiceStatus::Overdue));
        store.push_invoice(invoice(50_000, 2024, 3, InvoiceStatus::Unpaid));
        let service = AssistantService::new(store.clone(), store.clone(), store.clone());
        (store, service)
    }

    #[tokio::test]
    async fn invoice_questions_report_live_counts_case_insensitively() {
        let (_store, service) = seeded_service().await;

        let reply = service.ask("How many UNPAID Invoices are there?").await.unwrap();
        assert_eq!(
            reply.response,
            "I found 3 invoices in total. There are 2 unpaid invoices currently."
        );
    }

    #[tokio::test]
    async fn invoice_branch_wins_over_payment_branch() {
        let (_store, service) = seeded_service().await;

        let reply = service.ask("invoice or payment?").await.unwrap();
        assert!(reply.response.starts_with("I found 3 invoices"));
    }

    #[tokio::test]
    async fn payment_questions_report_the_record_count() {
        let (_store, service) = seeded_service().await;

        let reply = service.ask("payment status").await.unwrap();
        assert_eq!(reply.response, "There are 2 payment records in the system.");
    }

    #[tokio::test]
    async fn overview_questions_point_at_the_summary() {
        let (_store, service) = seeded_service().await;

        let reply = service.ask("give me an overview").await.unwrap();
        assert_eq!(
            reply.response,
            "The summary shows we are tracking payments and invoices. You can check the dashboard for charts."
        );
    }

    #[tokio::test]
    async fn anything_else_gets_the_fallback() {
        let (_store, service) = seeded_service().await;

        let reply = service.ask("hello").await.unwrap();
        assert_eq!(
            reply.response,
            "I can help you with questions about invoices and payments. Try asking 'How many unpaid invoices are there?'"
        );
    }

    #[tokio::test]
    async fn every_question_appends_one_assistant_query_entry() {
        let (store, service) = seeded_service().await;

        service.ask("hello").await.unwrap();
        service.ask("How many unpaid invoices?").await.unwrap();

        let entries = store.list_recent(10).await.unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries
            .iter()
            .all(|e| e.event_type == EventType::AssistantQuery && e.error.is_none()));
        // The original query text is preserved, not the lowercased copy.
        assert_eq!(entries[0].details.as_str(), "Query: How many unpaid invoices?");
    }
}
