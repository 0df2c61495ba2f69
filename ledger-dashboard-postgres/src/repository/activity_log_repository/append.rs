use async_trait::async_trait;
use ledger_dashboard_db::models::activity_log::{ActivityLogModel, NewActivityLog};
use ledger_dashboard_db::repository::append_log::AppendActivity;
use sqlx::Row;
use std::error::Error;

use super::repo_impl::ActivityLogRepositoryImpl;

#[async_trait]
impl AppendActivity for ActivityLogRepositoryImpl {
    async fn append(
        &self,
        entry: NewActivityLog,
    ) -> Result<ActivityLogModel, Box<dyn Error + Send + Sync>> {
        Self::append_impl(self, entry).await
    }
}

impl ActivityLogRepositoryImpl {
    pub(super) async fn append_impl(
        repo: &ActivityLogRepositoryImpl,
        entry: NewActivityLog,
    ) -> Result<ActivityLogModel, Box<dyn Error + Send + Sync>> {
        // Insert only; the trail has no update or delete path.
        let query = sqlx::query(
            r#"
            INSERT INTO activity_log (event_type, details, error)
            VALUES ($1, $2, $3)
            RETURNING id, timestamp
            "#,
        )
        .bind(entry.event_type)
        .bind(entry.details.as_str())
        .bind(entry.error.as_ref().map(|e| e.as_str()));

        let row = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            query.fetch_one(&mut **transaction).await?
        };

        Ok(ActivityLogModel {
            id: row.try_get("id")?,
            timestamp: row.try_get("timestamp")?,
            event_type: entry.event_type,
            details: entry.details,
            error: entry.error,
        })
    }
}

#[cfg(test)]
#[serial_test::serial]
mod tests {
    use crate::test_helper::setup_test_context;
    use ledger_dashboard_db::models::activity_log::NewActivityLog;
    use ledger_dashboard_db::models::common_enums::EventType;
    use ledger_dashboard_db::repository::append_log::AppendActivity;
    use ledger_dashboard_db::repository::list_recent::ListRecentActivity;

    #[tokio::test]
    #[ignore]
    async fn test_appended_entries_come_back_newest_first(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let activity_repo = &ctx.session.activity;

        let first = activity_repo
            .append(NewActivityLog::new(EventType::SummaryCall, "Generated summary"))
            .await?;
        let second = activity_repo
            .append(NewActivityLog::new(
                EventType::AgentRequest,
                "Fetched payments. Skip: 0, Limit: 10, Status: any",
            ))
            .await?;
        assert!(second.id > first.id);

        let recent = activity_repo.list_recent(2).await?;
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].id, second.id);
        assert_eq!(recent[1].id, first.id);

        Ok(())
    }
}
