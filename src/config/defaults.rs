//! Default configuration values
//!
//! Named constants for all tunable parameters

use crate::constants::{api, epsg};

/// Default reverse-geocoding endpoint
pub const DEFAULT_ENDPOINT: &str = api::NOMINATIM_URL;

/// Default HTTP user agent
pub const DEFAULT_USER_AGENT: &str = api::USER_AGENT;

/// Default source reference system for lookups
pub const DEFAULT_SOURCE_EPSG: u16 = epsg::WGS84;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "reveal-address";
