use std::sync::Arc;

use sqlx::PgPool;

use crate::executor::Executor;
use crate::repository::activity_log_repository::ActivityLogRepositoryImpl;
use crate::repository::invoice_repository::InvoiceRepositoryImpl;
use crate::repository::payment_repository::PaymentRepositoryImpl;

/// Entry point to the Postgres-backed record store
pub struct PostgresStore {
    pool: Arc<PgPool>,
}

impl PostgresStore {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Open one transaction-scoped session with repositories over it
    ///
    /// Each request gets its own session for the duration of the call.
    /// Dropping the session without committing rolls the transaction
    /// back, so every exit path, failure included, releases the
    /// connection.
    pub async fn begin_session(&self) -> Result<StoreSession, sqlx::Error> {
        let tx = self.pool.begin().await?;
        let executor = Executor::new(tx);

        Ok(StoreSession {
            payments: Arc::new(PaymentRepositoryImpl::new(executor.clone())),
            invoices: Arc::new(InvoiceRepositoryImpl::new(executor.clone())),
            activity: Arc::new(ActivityLogRepositoryImpl::new(executor.clone())),
            executor,
        })
    }
}

/// Repositories sharing a single transaction
pub struct StoreSession {
    executor: Executor,
    pub payments: Arc<PaymentRepositoryImpl>,
    pub invoices: Arc<InvoiceRepositoryImpl>,
    pub activity: Arc<ActivityLogRepositoryImpl>,
}

impl StoreSession {
    /// Commit the session's transaction
    pub async fn commit(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.executor.commit().await
    }

    /// Roll the session's transaction back explicitly; dropping the
    /// session has the same effect
    pub async fn rollback(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.executor.rollback().await
    }
}
