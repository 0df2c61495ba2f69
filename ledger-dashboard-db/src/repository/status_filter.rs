use std::fmt;
use std::str::FromStr;

/// Status filter applied to listing scans and counts
///
/// Listings accept an optional raw status string from the caller. An
/// absent value filters nothing; a token naming no known status value
/// becomes `Unmatched`, which matches no record, so listing endpoints
/// stay total over their input domain ("no matches", never an error).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter<S> {
    /// No filtering; every record of the kind is a candidate
    Any,
    /// Only records whose status equals the given value
    Is(S),
    /// Filter text that names no known status; matches nothing
    Unmatched,
}

impl<S: FromStr> StatusFilter<S> {
    /// Parse the raw optional status parameter of a listing request
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None => StatusFilter::Any,
            Some(text) => text
                .parse()
                .map(StatusFilter::Is)
                .unwrap_or(StatusFilter::Unmatched),
        }
    }
}

impl<S: Copy + PartialEq> StatusFilter<S> {
    /// Whether a record with the given status passes the filter
    pub fn matches(&self, status: S) -> bool {
        match self {
            StatusFilter::Any => true,
            StatusFilter::Is(wanted) => *wanted == status,
            StatusFilter::Unmatched => false,
        }
    }
}

impl<S: fmt::Display> fmt::Display for StatusFilter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::Any => write!(f, "any"),
            StatusFilter::Is(status) => write!(f, "{status}"),
            StatusFilter::Unmatched => write!(f, "unmatched"),
        }
    }
}
