use std::collections::BTreeMap;
use std::sync::Arc;

use ledger_dashboard_db::models::activity_log::NewActivityLog;
use ledger_dashboard_db::models::common_enums::{EventType, InvoiceStatus};
use ledger_dashboard_db::models::invoice::InvoiceModel;
use ledger_dashboard_db::models::payment::PaymentModel;
use ledger_dashboard_db::models::record::Record;
use ledger_dashboard_db::repository::append_log::AppendActivity;
use ledger_dashboard_db::repository::scan::Scan;
use rust_decimal::Decimal;

use crate::domain::summary::{period_key, MonthlyTotals, Summary};
use crate::error::ApiResult;
use crate::service::activity::log_activity;

/// The aggregation engine: folds every payment and invoice record into
/// the Summary view
///
/// One full scan per record kind, no caching, no hidden state; for a
/// fixed store snapshot the result is exactly reproducible. One
/// `summary_call` audit entry is appended after computation, also when
/// the store is empty.
pub struct SummaryService<P, I, L> {
    payments: Arc<P>,
    invoices: Arc<I>,
    activity: Arc<L>,
}

impl<P, I, L> SummaryService<P, I, L>
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

    pub async fn summarize(&self) -> ApiResult<Summary> {
        let payments = self.payments.scan_all().await?;
        let invoices = self.invoices.scan_all().await?;

        let unpaid: Vec<&InvoiceModel> = invoices
            .iter()
            .filter(|invoice| invoice.status == InvoiceStatus::Unpaid)
            .collect();

        let mut monthly_breakdown = BTreeMap::new();
        accumulate(&mut monthly_breakdown, &payments, |bucket| {
            &mut bucket.payments
        });
        accumulate(&mut monthly_breakdown, &invoices, |bucket| {
            &mut bucket.invoices
        });

        let summary = Summary {
            total_payments: total(&payments),
            total_invoices: total(&invoices),
            unpaid_invoices_count: unpaid.len() as u64,
            unpaid_invoices_amount: unpaid.iter().map(|invoice| invoice.amount).sum(),
            monthly_breakdown,
        };

        log_activity(
            &*self.activity,
            NewActivityLog::new(EventType::SummaryCall, "Generated summary"),
        )
        .await;

        Ok(summary)
    }
}

fn total<R: Record>(records: &[R]) -> Decimal {
    records.iter().map(Record::amount).sum()
}

// Month-bucket one record kind; `side` picks which half of the bucket
// this kind accumulates into, leaving the other half at zero.
fn accumulate<R: Record>(
    buckets: &mut BTreeMap<String, MonthlyTotals>,
    records: &[R],
    side: fn(&mut MonthlyTotals) -> &mut Decimal,
) {
    for record in records {
        let bucket = buckets.entry(period_key(&record.recorded_at())).or_default();
        *side(bucket) += record.amount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::test_support::{invoice, payment, store};
    use ledger_dashboard_db::models::common_enums::PaymentStatus;
    use ledger_dashboard_db::repository::list_recent::ListRecentActivity;

    #[tokio::test]
    async fn summarizes_the_reference_scenario() {
        let store = store();
        store.push_payment(payment(10_000, 2024, 1, PaymentStatus::Paid));
        store.push_payment(payment(20_000, 2024, 1, PaymentStatus::Pending));
        store.push_invoice(invoice(50_000, 2024, 2, InvoiceStatus::Unpaid));
        let service = SummaryService::new(store.clone(), store.clone(), store.clone());

        let summary = service.summarize().await.unwrap();

        assert_eq!(summary.total_payments, Decimal::new(30_000, 2));
        assert_eq!(summary.total_invoices, Decimal::new(50_000, 2));
        assert_eq!(summary.unpaid_invoices_count, 1);
        assert_eq!(summary.unpaid_invoices_amount, Decimal::new(50_000, 2));

        assert_eq!(summary.monthly_breakdown.len(), 2);
        let january = &summary.monthly_breakdown["2024-01"];
        assert_eq!(january.payments, Decimal::new(30_000, 2));
        assert_eq!(january.invoices, Decimal::ZERO);
        let february = &summary.monthly_breakdown["2024-02"];
        assert_eq!(february.payments, Decimal::ZERO);
        assert_eq!(february.invoices, Decimal::new(50_000, 2));
    }

    #[tokio::test]
    async fn empty_store_yields_zeros_and_still_logs() {
        let store = store();
        let service = SummaryService::new(store.clone(), store.clone(), store.clone());

        let summary = service.summarize().await.unwrap();

        assert_eq!(summary, Summary::default());
        let entries = store.list_recent(10).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].event_type, EventType::SummaryCall);
        assert_eq!(entries[0].details.as_str(), "Generated summary");
    }

    #[tokio::test]
    async fn breakdown_partitions_the_totals() {
        let store = store();
        for (cents, month, status) in [
            (12_345, 1, PaymentStatus::Paid),
            (60_000, 2, PaymentStatus::Failed),
            (7_500, 2, PaymentStatus::Pending),
            (99_999, 7, PaymentStatus::Paid),
        ] {
            store.push_payment(payment(cents, 2023, month, status));
        }
        for (cents, month, status) in [
            (150_000, 1, InvoiceStatus::Paid),
            (25_000, 4, InvoiceStatus::Overdue),
            (41_000, 7, InvoiceStatus::Unpaid),
        ] {
            store.push_invoice(invoice(cents, 2023, month, status));
        }
        let service = SummaryService::new(store.clone(), store.clone(), store.clone());

        let summary = service.summarize().await.unwrap();

        let payments_across_months: Decimal = summary
            .monthly_breakdown
            .values()
            .map(|bucket| bucket.payments)
            .sum();
        let invoices_across_months: Decimal = summary
            .monthly_breakdown
            .values()
            .map(|bucket| bucket.invoices)
            .sum();
        assert_eq!(payments_across_months, summary.total_payments);
        assert_eq!(invoices_across_months, summary.total_invoices);
    }

    #[tokio::test]
    async fn overdue_invoices_are_not_counted_as_unpaid() {
        let store = store();
        store.push_invoice(invoice(10_000, 2024, 1, InvoiceStatus::Overdue));
        store.push_invoice(invoice(20_000, 2024, 1, InvoiceStatus::Unpaid));
        store.push_invoice(invoice(30_000, 2024, 1, InvoiceStatus::Paid));
        let service = SummaryService::new(store.clone(), store.clone(), store.clone());

        let summary = service.summarize().await.unwrap();

        assert_eq!(summary.unpaid_invoices_count, 1);
        assert_eq!(summary.unpaid_invoices_amount, Decimal::new(20_000, 2));
    }

    #[tokio::test]
    async fn summarize_is_idempotent_without_intervening_writes() {
        let store = store();
        store.push_payment(payment(10_000, 2024, 5, PaymentStatus::Paid));
        store.push_invoice(invoice(20_000, 2024, 6, InvoiceStatus::Unpaid));
        let service = SummaryService::new(store.clone(), store.clone(), store.clone());

        let first = service.summarize().await.unwrap();
        let second = service.summarize().await.unwrap();

        // Identical up to the audit entries each call appends.
        assert_eq!(first, second);
        assert_eq!(store.list_recent(10).await.unwrap().len(), 2);
    }

    #[test]
    fn summary_serializes_with_the_wire_field_names() {
        let mut monthly_breakdown = BTreeMap::new();
        monthly_breakdown.insert(
            "2024-01".to_string(),
            MonthlyTotals {
                payments: Decimal::new(30_000, 2),
                invoices: Decimal::ZERO,
            },
        );
        let summary = Summary {
            total_payments: Decimal::new(30_000, 2),
            total_invoices: Decimal::ZERO,
            unpaid_invoices_count: 0,
            unpaid_invoices_amount: Decimal::ZERO,
            monthly_breakdown,
        };

        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["total_payments"], serde_json::json!("300.00"));
        assert_eq!(value["monthly_breakdown"]["2024-01"]["invoices"], serde_json::json!("0"));
    }
}
