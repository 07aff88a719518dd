//! Centralized constants for the reveal-address crate
//!
//! This module consolidates constants that are used across multiple modules
//! to avoid duplication and ensure consistency.

/// External API endpoints
pub mod api {
    /// OpenStreetMap Nominatim geocoding API
    pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

    /// User agent sent with every request (Nominatim requires one)
    pub const USER_AGENT: &str = "reveal-address/0.1.0";
}

/// Well-known EPSG codes
pub mod epsg {
    /// WGS84 geographic latitude/longitude
    pub const WGS84: u16 = 4326;

    /// Web Mercator, the usual web-map display projection
    pub const WEB_MERCATOR: u16 = 3857;
}
