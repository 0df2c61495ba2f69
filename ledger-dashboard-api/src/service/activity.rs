use std::sync::Arc;

use ledger_dashboard_db::models::activity_log::{ActivityLogModel, NewActivityLog};
use ledger_dashboard_db::repository::append_log::AppendActivity;
use ledger_dashboard_db::repository::list_recent::ListRecentActivity;

use crate::error::ApiResult;

/// Audit window handed out when the caller does not name one
pub const DEFAULT_RECENT_LIMIT: usize = 50;

/// Audit-trail access: append entries and read the newest ones back
pub struct ActivityService<L> {
    log: Arc<L>,
}

impl<L> ActivityService<L>
where
    L: AppendActivity + ListRecentActivity,
{
    pub fn new(log: Arc<L>) -> Self {
        Self { log }
    }

    /// Append one immutable audit entry
    pub async fn record(&self, entry: NewActivityLog) -> ApiResult<ActivityLogModel> {
        Ok(self.log.append(entry).await?)
    }

    /// Newest entries first. Reading the trail is itself not audited.
    pub async fn recent(&self, limit: usize) -> ApiResult<Vec<ActivityLogModel>> {
        Ok(self.log.list_recent(limit).await?)
    }
}

/// Best-effort audit append used by the query-side services
///
/// The primary operation's result is already computed when this runs.
/// A failed append must not take that result away from the caller, but
/// it must not vanish silently either.
pub(crate) async fn log_activity<L: AppendActivity>(log: &L, entry: NewActivityLog) {
    let event_type = entry.event_type;
    if let Err(err) = log.append(entry).await {
        tracing::error!(%event_type, error = %err, "failed to append activity log entry");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::test_support::store;
    use ledger_dashboard_db::models::common_enums::EventType;

    #[tokio::test]
    async fn recent_returns_newest_first_and_honors_the_limit() {
        let store = store();
        let service = ActivityService::new(store.clone());

        for n in 1..=5 {
            let entry = NewActivityLog::new(EventType::SummaryCall, &format!("call {n}"));
            service.record(entry).await.unwrap();
        }

        let entries = service.recent(3).await.unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].details.as_str(), "call 5");
        assert_eq!(entries[2].details.as_str(), "call 3");
        // Ids are strictly increasing in insertion order.
        assert!(entries[0].id > entries[1].id);
    }

    #[tokio::test]
    async fn recorded_errors_are_kept() {
        let store = store();
        let service = ActivityService::new(store.clone());

        let entry = NewActivityLog::with_error(
            EventType::AgentRequest,
            "Fetched payments",
            "store unavailable",
        );
        let saved = service.record(entry).await.unwrap();
        assert_eq!(
            saved.error.as_ref().map(|e| e.as_str()),
            Some("store unavailable")
        );

        let entries = service.recent(1).await.unwrap();
        assert_eq!(entries[0].error.as_ref().map(|e| e.as_str()), Some("store unavailable"));
    }

    #[tokio::test]
    async fn reading_the_trail_appends_nothing() {
        let store = store();
        let service = ActivityService::new(store.clone());

        service
            .record(NewActivityLog::new(EventType::SummaryCall, "Generated summary"))
            .await
            .unwrap();
        service.recent(10).await.unwrap();
        service.recent(10).await.unwrap();

        assert_eq!(service.recent(10).await.unwrap().len(), 1);
    }
}
