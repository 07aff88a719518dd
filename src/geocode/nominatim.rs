//! Nominatim reverse-geocoding client (OpenStreetMap)
//!
//! Uses the free Nominatim API. Rate limit: 1 request per second
//! (enforced by User-Agent requirement)

use crate::constants::api::NOMINATIM_URL;
use crate::coord::GeoPoint;
use crate::geocode::{AddressLookupResult, Transport};
use serde::Deserialize;

/// Reverse-geocoding client over an injected transport
#[derive(Debug, Clone)]
pub struct ReverseGeocodeClient<T: Transport> {
    transport: T,
    endpoint: String,
}

/// Nominatim reverse response; only the display name is consumed
#[derive(Debug, Deserialize)]
struct ReverseResponse {
    display_name: Option<String>,
}

impl<T: Transport> ReverseGeocodeClient<T> {
    /// Create a client against the public Nominatim endpoint
    pub fn new(transport: T) -> Self {
        Self::with_endpoint(transport, NOMINATIM_URL)
    }

    /// Create a client against a custom endpoint
    pub fn with_endpoint(transport: T, endpoint: impl Into<String>) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
        }
    }

    /// Format the request URL for one lookup
    ///
    /// Latitude and longitude are written as plain decimal degrees at full
    /// precision; the query shape is fixed by the service.
    fn reverse_url(&self, point: &GeoPoint) -> String {
        format!(
            "{}/reverse?format=json&lat={}&lon={}",
            self.endpoint, point.lat, point.lon
        )
    }

    /// Resolve a WGS84 point to an address
    ///
    /// Issues exactly one GET request per call; no retry, no caching. Every
    /// failure is folded into the returned [`AddressLookupResult`], so this
    /// never surfaces a raw transport or parse error.
    pub async fn lookup(&self, point: &GeoPoint) -> AddressLookupResult {
        let url = self.reverse_url(point);

        let response = match self.transport.get(&url).await {
            Ok(response) => response,
            Err(e) => {
                return AddressLookupResult::TransportError {
                    detail: e.to_string(),
                }
            }
        };

        if !response.is_success() {
            return AddressLookupResult::TransportError {
                detail: format!("Service returned status {}", response.status),
            };
        }

        match serde_json::from_slice::<ReverseResponse>(&response.body) {
            Ok(ReverseResponse {
                display_name: Some(name),
            }) if !name.is_empty() => AddressLookupResult::Found { display_name: name },
            Ok(_) => AddressLookupResult::NotFound,
            Err(e) => AddressLookupResult::ParseError {
                detail: e.to_string(),
            },
        }
    }
}
