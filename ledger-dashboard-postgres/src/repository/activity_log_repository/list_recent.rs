use async_trait::async_trait;
use ledger_dashboard_db::models::activity_log::ActivityLogModel;
use ledger_dashboard_db::repository::list_recent::ListRecentActivity;
use std::error::Error;

use super::repo_impl::ActivityLogRepositoryImpl;
use crate::utils::TryFromRow;

#[async_trait]
impl ListRecentActivity for ActivityLogRepositoryImpl {
    async fn list_recent(
        &self,
        limit: usize,
    ) -> Result<Vec<ActivityLogModel>, Box<dyn Error + Send + Sync>> {
        Self::list_recent_impl(self, limit).await
    }
}

impl ActivityLogRepositoryImpl {
    pub(super) async fn list_recent_impl(
        repo: &ActivityLogRepositoryImpl,
        limit: usize,
    ) -> Result<Vec<ActivityLogModel>, Box<dyn Error + Send + Sync>> {
        // Ids are strictly increasing in insertion order, so descending
        // id is newest-first without timestamp tie ambiguity.
        let query = sqlx::query(r#"SELECT * FROM activity_log ORDER BY id DESC LIMIT $1"#)
            .bind(limit as i64);

        let rows = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            query.fetch_all(&mut **transaction).await?
        };

        let mut entries = Vec::with_capacity(rows.len());
        for row in rows {
            entries.push(ActivityLogModel::try_from_row(&row)?);
        }
        Ok(entries)
    }
}
