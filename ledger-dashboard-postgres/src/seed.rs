//! One-time demo-data bootstrap
//!
//! Convenience for local development and demos; nothing in the core
//! depends on seeded data being present.

use chrono::{Duration, Utc};
use heapless::String as HeaplessString;
use ledger_dashboard_db::models::common_enums::{InvoiceStatus, PaymentStatus};
use ledger_dashboard_db::models::invoice::InvoiceModel;
use ledger_dashboard_db::models::payment::PaymentModel;
use ledger_dashboard_db::repository::count::Count;
use ledger_dashboard_db::repository::insert::Insert;
use ledger_dashboard_db::repository::status_filter::StatusFilter;
use rand::Rng;
use rust_decimal::Decimal;

use crate::postgres_repositories::PostgresStore;

const SEED_RECORDS: usize = 30;

const PAYMENT_DESCRIPTIONS: &[&str] = &[
    "Acme Logistics",
    "Northwind Traders",
    "Globex Corporation",
    "Initech Services",
    "Stark Industries",
    "Wayne Enterprises",
    "Umbrella Supplies",
    "Cyberdyne Systems",
];

const CUSTOMER_NAMES: &[&str] = &[
    "Ada Lovelace",
    "Grace Hopper",
    "Alan Turing",
    "Katherine Johnson",
    "Edsger Dijkstra",
    "Barbara Liskov",
    "Donald Knuth",
    "Margaret Hamilton",
];

/// Populate an empty store with randomized demo records, once
///
/// A store that already holds payments is left untouched, so repeated
/// startups do not multiply the data.
pub async fn seed_demo_data(
    store: &PostgresStore,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let session = store.begin_session().await?;
    if session.payments.count(StatusFilter::Any).await? > 0 {
        session.rollback().await?;
        return Ok(());
    }

    let (payments, invoices) = generate_records()?;

    for record in payments {
        session.payments.insert(record).await?;
    }
    for record in invoices {
        session.invoices.insert(record).await?;
    }
    session.commit().await?;

    tracing::info!(records = SEED_RECORDS * 2, "seeded demo data");
    Ok(())
}

// Draw every random value before the first await; ThreadRng is not
// Send and must not be held across a suspension point.
fn generate_records(
) -> Result<(Vec<PaymentModel>, Vec<InvoiceModel>), Box<dyn std::error::Error + Send + Sync>> {
    let mut rng = rand::thread_rng();
    let now = Utc::now();

    let payment_statuses = [
        PaymentStatus::Paid,
        PaymentStatus::Pending,
        PaymentStatus::Failed,
    ];
    let invoice_statuses = [
        InvoiceStatus::Paid,
        InvoiceStatus::Unpaid,
        InvoiceStatus::Overdue,
    ];

    let mut payments = Vec::with_capacity(SEED_RECORDS);
    for _ in 0..SEED_RECORDS {
        payments.push(PaymentModel {
            id: 0,
            amount: Decimal::new(rng.gen_range(10_000..=500_000), 2),
            date: now
                - Duration::days(rng.gen_range(0..30))
                - Duration::minutes(rng.gen_range(0..1_440)),
            status: payment_statuses[rng.gen_range(0..payment_statuses.len())],
            description: seed_text(PAYMENT_DESCRIPTIONS[rng.gen_range(0..PAYMENT_DESCRIPTIONS.len())])?,
        });
    }

    let mut invoices = Vec::with_capacity(SEED_RECORDS);
    for _ in 0..SEED_RECORDS {
        let date = now
            - Duration::days(rng.gen_range(0..60))
            - Duration::minutes(rng.gen_range(0..1_440));
        invoices.push(InvoiceModel {
            id: 0,
            amount: Decimal::new(rng.gen_range(50_000..=1_000_000), 2),
            date,
            due_date: date + Duration::days(30),
            status: invoice_statuses[rng.gen_range(0..invoice_statuses.len())],
            customer_name: seed_text(CUSTOMER_NAMES[rng.gen_range(0..CUSTOMER_NAMES.len())])?,
        });
    }

    Ok((payments, invoices))
}

fn seed_text<const N: usize>(
    text: &str,
) -> Result<HeaplessString<N>, Box<dyn std::error::Error + Send + Sync>> {
    HeaplessString::try_from(text).map_err(|_| format!("seed text longer than {N} chars").into())
}
