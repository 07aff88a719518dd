//! reveal-address: reverse geocoding for map clicks
//!
//! A library and CLI tool that takes a point clicked on a map in an
//! arbitrary projection, reprojects it into WGS84 latitude/longitude, and
//! asks the OpenStreetMap Nominatim service for the address at that
//! location.
//!
//! ## Features
//!
//! - Coordinate reprojection over the embedded EPSG database
//! - Reverse-geocoding client over an injectable async transport
//! - Single-use click-to-address interaction controller with
//!   exactly-once outcome delivery
//! - CLI interface acting as a minimal host
//!
//! ## Quick Start
//!
//! ```rust
//! use reveal_address::coord::reproject::{ReferenceSystem, Reprojector};
//! use reveal_address::coord::MapPoint;
//!
//! // Central London in Web Mercator map coordinates
//! let source = ReferenceSystem::from_epsg(3857).unwrap();
//! let reprojector = Reprojector::to_wgs84(source).unwrap();
//!
//! let geo = reprojector.reproject(MapPoint::new(-14_205.0, 6_713_485.0)).unwrap();
//! assert!((geo.lat - 51.5).abs() < 0.1);
//! assert!((geo.lon - (-0.128)).abs() < 0.1);
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod coord;
pub mod error;
pub mod geocode;
pub mod interaction;

// Re-export commonly used types
pub use config::Config;
pub use coord::{GeoPoint, MapPoint};
pub use error::{Error, Result};
pub use geocode::AddressLookupResult;
pub use interaction::{ClickToAddressController, SessionState};
