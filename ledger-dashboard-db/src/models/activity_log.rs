use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};

use crate::models::common_enums::EventType;
use crate::models::identifiable::Identifiable;

/// # Documentation
/// ActivityLog is the append-only audit trail of the dashboard: one
/// entry per externally observable query operation. Entries are never
/// updated or deleted; ids are strictly increasing in insertion order
/// and the timestamp comes from the store clock at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLogModel {
    pub id: i64,

    /// Assigned by the store when the entry is appended
    pub timestamp: DateTime<Utc>,

    pub event_type: EventType,

    /// Human-readable description of the operation
    pub details: HeaplessString<500>,

    /// Error text; None when the operation succeeded
    pub error: Option<HeaplessString<500>>,
}

impl Identifiable for ActivityLogModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}

/// Audit entry before the store has assigned id and timestamp
#[derive(Debug, Clone, PartialEq)]
pub struct NewActivityLog {
    pub event_type: EventType,
    pub details: HeaplessString<500>,
    pub error: Option<HeaplessString<500>>,
}

impl NewActivityLog {
    /// Entry for a successful operation. Over-long details are clipped
    /// rather than rejected; losing the tail of a detail string must
    /// never fail the audited operation.
    pub fn new(event_type: EventType, details: &str) -> Self {
        Self {
            event_type,
            details: clip(details),
            error: None,
        }
    }

    /// Entry carrying the error text of a failed operation
    pub fn with_error(event_type: EventType, details: &str, error: &str) -> Self {
        Self {
            event_type,
            details: clip(details),
            error: Some(clip(error)),
        }
    }
}

// Char-boundary-safe truncation into a bounded string.
fn clip<const N: usize>(text: &str) -> HeaplessString<N> {
    let mut out = HeaplessString::new();
    for ch in text.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_details_are_kept_verbatim() {
        let entry = NewActivityLog::new(EventType::SummaryCall, "Generated summary");
        assert_eq!(entry.details.as_str(), "Generated summary");
        assert!(entry.error.is_none());
    }

    #[test]
    fn overlong_details_are_clipped_not_rejected() {
        let long = "x".repeat(2_000);
        let entry = NewActivityLog::new(EventType::AssistantQuery, &long);
        assert_eq!(entry.details.len(), 500);
    }

    #[test]
    fn with_error_keeps_the_error_text() {
        let entry =
            NewActivityLog::with_error(EventType::AgentRequest, "Fetched payments", "store gone");
        assert_eq!(entry.error.as_ref().map(|e| e.as_str()), Some("store gone"));
    }
}
