//! Error types for the API client.

use crate::request::Subject;

/// Errors that can occur when building or executing API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, or an unbuildable URL).
    #[error("Request failed: {0}")]
    RequestFailed(String),
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response body was not the expected JSON.
    #[error("Failed to parse response: {0}")]
    Parse(String),
    /// The login call returned an error field.
    #[error("Authentication failed: {0}")]
    Authentication(String),
    /// A query or result request was misused before anything was sent.
    #[error(transparent)]
    Contract(#[from] ContractViolation),
}

/// Misuse of a query or result request, detected before any network call.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractViolation {
    /// A count-like option exceeded its inclusive upper bound.
    #[error("{param} must be at most {max}, got {value}")]
    BoundExceeded {
        param: &'static str,
        value: i64,
        max: i64,
    },
    /// A result request was attached to a query of a different subject.
    #[error("{action} queries only accept {expected} result requests, got a {found} request")]
    FamilyMismatch {
        action: &'static str,
        expected: Subject,
        found: Subject,
    },
    /// The query has no result requests attached.
    #[error("The query does not request any result type")]
    NoResultRequested,
    /// An info-inclusion flag name that the family does not define.
    #[error("Unknown {family} flag `{flag}`")]
    UnknownFlag { family: &'static str, flag: String },
    /// A date bound that is not in `YYYY-MM-DD` form.
    #[error("Invalid date `{0}`, expected YYYY-MM-DD")]
    InvalidDate(String),
}
