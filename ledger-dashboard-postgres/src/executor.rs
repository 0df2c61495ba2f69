use std::sync::Arc;

use sqlx::{Postgres, Transaction};
use tokio::sync::Mutex;

/// Shared handle to one open database transaction
///
/// Every repository built for a request clones this handle; whoever
/// finishes the request commits or rolls back, which consumes the
/// transaction. Operations attempted afterwards fail with
/// "Transaction has been consumed".
#[derive(Clone)]
pub struct Executor {
    pub tx: Arc<Mutex<Option<Transaction<'static, Postgres>>>>,
}

impl Executor {
    pub fn new(tx: Transaction<'static, Postgres>) -> Self {
        Self {
            tx: Arc::new(Mutex::new(Some(tx))),
        }
    }

    /// Commit the transaction, consuming it
    pub async fn commit(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let tx = self
            .tx
            .lock()
            .await
            .take()
            .ok_or("Transaction has been consumed")?;
        tx.commit().await?;
        Ok(())
    }

    /// Roll the transaction back, consuming it
    pub async fn rollback(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let tx = self
            .tx
            .lock()
            .await
            .take()
            .ok_or("Transaction has been consumed")?;
        tx.rollback().await?;
        Ok(())
    }
}
