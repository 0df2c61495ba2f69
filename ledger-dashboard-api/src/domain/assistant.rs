use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reply returned by the canned assistant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantReply {
    pub response: String,
    pub timestamp: DateTime<Utc>,
}
