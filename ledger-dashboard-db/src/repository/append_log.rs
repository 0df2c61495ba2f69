use async_trait::async_trait;

use crate::models::activity_log::{ActivityLogModel, NewActivityLog};

/// Repository trait for appending to the audit trail
///
/// The trail is append-only: entries are never updated or deleted.
/// The store assigns the id (strictly increasing in insertion order)
/// and the timestamp (store clock).
#[async_trait]
pub trait AppendActivity: Send + Sync {
    /// Append one immutable audit entry
    async fn append(
        &self,
        entry: NewActivityLog,
    ) -> Result<ActivityLogModel, Box<dyn std::error::Error + Send + Sync>>;
}
