//! Reverse geocoding
//!
//! Provides the lookup outcome model and the transport abstraction the
//! [`nominatim`] client talks through. The transport is injected so tests
//! can substitute a fake without touching global state.

pub mod http;
pub mod nominatim;

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Raw transport-level response: HTTP status plus body bytes
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Whether the status code is in the 2xx success range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Async HTTP transport used to reach the geocoding service
pub trait Transport: Send + Sync {
    /// Issue a single GET request and return the raw response
    ///
    /// Transport-level failures (DNS, connection, timeout, TLS) are errors;
    /// a response with a non-success status is returned as a response.
    fn get(&self, url: &str) -> impl std::future::Future<Output = Result<TransportResponse>> + Send;
}

/// Outcome of one reverse-geocode lookup
///
/// Exactly one variant per lookup. Errors are folded into this model at the
/// client boundary; callers never see raw transport or parse failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AddressLookupResult {
    /// The service resolved a non-empty address
    Found { display_name: String },
    /// Valid response with no address at the location
    NotFound,
    /// Network failure or non-success HTTP status
    TransportError { detail: String },
    /// Response body was not a JSON object
    ParseError { detail: String },
}

impl AddressLookupResult {
    /// The single user-facing message for this outcome
    ///
    /// Error details are for logs; users get a generic failure message.
    pub fn user_message(&self) -> &str {
        match self {
            Self::Found { display_name } => display_name,
            Self::NotFound => "No address found",
            Self::TransportError { .. } | Self::ParseError { .. } => "Address lookup failed",
        }
    }

    /// Whether this outcome is a failure (`NotFound` is a valid answer)
    pub fn is_error(&self) -> bool {
        matches!(self, Self::TransportError { .. } | Self::ParseError { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        let found = AddressLookupResult::Found {
            display_name: "10 Downing Street, London".to_string(),
        };
        assert_eq!(found.user_message(), "10 Downing Street, London");
        assert_eq!(AddressLookupResult::NotFound.user_message(), "No address found");

        let error = AddressLookupResult::TransportError {
            detail: "connection refused".to_string(),
        };
        assert_eq!(error.user_message(), "Address lookup failed");
        assert!(!error.user_message().contains("refused"));
    }

    #[test]
    fn test_error_classification() {
        assert!(!AddressLookupResult::NotFound.is_error());
        assert!(AddressLookupResult::ParseError {
            detail: "bad body".to_string()
        }
        .is_error());
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = AddressLookupResult::Found {
            display_name: "Paris, France".to_string(),
        };

        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("\"status\":\"found\""));

        let parsed: AddressLookupResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, outcome);
    }
}
