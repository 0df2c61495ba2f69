use async_trait::async_trait;

use crate::models::activity_log::ActivityLogModel;

/// Repository trait for reading the audit trail back, newest first
#[async_trait]
pub trait ListRecentActivity: Send + Sync {
    /// The most recent entries (descending id), capped at `limit`
    async fn list_recent(
        &self,
        limit: usize,
    ) -> Result<Vec<ActivityLogModel>, Box<dyn std::error::Error + Send + Sync>>;
}
