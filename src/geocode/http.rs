//! reqwest-backed HTTP transport
//!
//! Production transport implementation. The wrapped [`reqwest::Client`] is a
//! cheap handle onto a shared connection pool, so hosts can hand the same
//! client to every session.

use crate::constants::api::USER_AGENT;
use crate::error::{Error, Result};
use crate::geocode::{Transport, TransportResponse};

/// HTTP transport over a shared reqwest client
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with the default user agent
    pub fn new() -> Self {
        Self::with_user_agent(USER_AGENT)
    }

    /// Create a transport sending the given user agent
    pub fn with_user_agent(user_agent: &str) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self { client }
    }

    /// Borrow an existing client and its connection pool
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Transport(format!("Request failed: {}", e)))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Transport(format!("Failed to read response body: {}", e)))?;

        Ok(TransportResponse {
            status,
            body: body.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_creation() {
        let transport = HttpTransport::new();
        assert!(format!("{:?}", transport).contains("HttpTransport"));
    }

    #[test]
    fn test_shared_client() {
        let client = reqwest::Client::new();
        let transport = HttpTransport::with_client(client);
        assert!(format!("{:?}", transport).contains("Client"));
    }
}
