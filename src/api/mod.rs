//! Generative-text skill suggestion client
//!
//! Request/response types and retry policy are pure and tested natively;
//! the `fetch` transport is wasm-only. Failures surface as inline page
//! messages, never as faults that take down the page.

pub mod policy;
#[cfg(target_arch = "wasm32")]
pub mod transport;
pub mod types;

pub use policy::{AttemptOutcome, Backoff};
pub use types::{
    GenerateRequest, GenerateResponse, endpoint_url, parse_skill_list, skill_detail_request,
    skill_list_request,
};

use std::fmt;

/// Suggestion request failure
#[derive(Debug)]
pub enum SuggestError {
    /// 4xx response; retrying will not help
    ClientError(u16),
    /// Every attempt failed with a transient error
    RetriesExhausted,
    /// Response body was not the expected shape
    MalformedResponse,
}

impl fmt::Display for SuggestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuggestError::ClientError(status) => {
                write!(f, "suggestion request rejected with status {status}")
            }
            SuggestError::RetriesExhausted => write!(f, "suggestion request retries exhausted"),
            SuggestError::MalformedResponse => write!(f, "suggestion response was malformed"),
        }
    }
}

impl std::error::Error for SuggestError {}
