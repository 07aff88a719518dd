//! Coordinate reprojection between EPSG reference systems
//!
//! Pure-Rust transforms via proj4rs, with projection definitions resolved
//! from the embedded crs-definitions EPSG database. No side effects; a
//! failed resolution or a point outside the projection's valid domain is an
//! error, fatal to the current interaction.

use crate::constants::epsg::WGS84;
use crate::coord::{GeoPoint, MapPoint};
use crate::error::{Error, Result};
use proj4rs::proj::Proj;
use proj4rs::transform::transform;

/// A coordinate reference system resolved from an EPSG code
///
/// Resolution happens once, at construction; conversions afterwards only
/// borrow the parsed projection.
pub struct ReferenceSystem {
    epsg: u16,
    proj: Proj,
    geographic: bool,
}

impl ReferenceSystem {
    /// Resolve an EPSG code against the embedded CRS database
    pub fn from_epsg(epsg: u16) -> Result<Self> {
        let def = crs_definitions::from_code(epsg).ok_or_else(|| {
            Error::Reprojection(format!("EPSG:{} is not in the CRS database", epsg))
        })?;

        let proj = Proj::from_proj_string(def.proj4).map_err(|e| {
            Error::Reprojection(format!(
                "Invalid projection definition for EPSG:{}: {:?}",
                epsg, e
            ))
        })?;

        Ok(Self {
            epsg,
            proj,
            geographic: def.proj4.contains("+proj=longlat"),
        })
    }

    /// The fixed WGS84 geographic system (EPSG:4326)
    pub fn wgs84() -> Result<Self> {
        Self::from_epsg(WGS84)
    }

    /// The EPSG code this system was resolved from
    pub fn epsg(&self) -> u16 {
        self.epsg
    }

    /// Whether coordinates in this system are longitude/latitude degrees
    pub fn is_geographic(&self) -> bool {
        self.geographic
    }
}

impl std::fmt::Debug for ReferenceSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReferenceSystem")
            .field("epsg", &self.epsg)
            .field("geographic", &self.geographic)
            .finish()
    }
}

/// Converts points from a source reference system into a target one
pub struct Reprojector {
    source: ReferenceSystem,
    target: ReferenceSystem,
}

impl Reprojector {
    /// Create a reprojector between two resolved reference systems
    pub fn new(source: ReferenceSystem, target: ReferenceSystem) -> Self {
        Self { source, target }
    }

    /// Create a reprojector from the given system into WGS84
    pub fn to_wgs84(source: ReferenceSystem) -> Result<Self> {
        Ok(Self::new(source, ReferenceSystem::wgs84()?))
    }

    /// The source reference system
    pub fn source(&self) -> &ReferenceSystem {
        &self.source
    }

    /// The target reference system
    pub fn target(&self) -> &ReferenceSystem {
        &self.target
    }

    /// Transform a raw coordinate pair from the source to the target system
    ///
    /// Same-EPSG pairs short-circuit to the identity. proj4rs works in
    /// radians for geographic systems, so degrees are converted on the way
    /// in and out.
    pub fn transform(&self, x: f64, y: f64) -> Result<(f64, f64)> {
        if self.source.epsg == self.target.epsg {
            return Ok((x, y));
        }

        let (x_in, y_in) = if self.source.geographic {
            (x.to_radians(), y.to_radians())
        } else {
            (x, y)
        };

        let mut point = (x_in, y_in, 0.0);
        transform(&self.source.proj, &self.target.proj, &mut point).map_err(|e| {
            Error::Reprojection(format!(
                "Transform from EPSG:{} to EPSG:{} failed: {:?}",
                self.source.epsg, self.target.epsg, e
            ))
        })?;

        let (x_out, y_out) = if self.target.geographic {
            (point.0.to_degrees(), point.1.to_degrees())
        } else {
            (point.0, point.1)
        };

        if !x_out.is_finite() || !y_out.is_finite() {
            return Err(Error::Reprojection(format!(
                "Point ({}, {}) is outside the valid domain of EPSG:{}",
                x, y, self.source.epsg
            )));
        }

        Ok((x_out, y_out))
    }

    /// Reproject a map point into geographic latitude/longitude
    ///
    /// The target system must be geographic; the result is range-checked
    /// before it is returned.
    pub fn reproject(&self, point: MapPoint) -> Result<GeoPoint> {
        if !self.target.geographic {
            return Err(Error::Reprojection(format!(
                "Target EPSG:{} is not a geographic system",
                self.target.epsg
            )));
        }

        let (lon, lat) = self.transform(point.x, point.y)?;
        let geo = GeoPoint::new(lat, lon);
        geo.validate()?;
        Ok(geo)
    }
}

impl std::fmt::Debug for Reprojector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reprojector")
            .field("source", &self.source)
            .field("target", &self.target)
            .finish()
    }
}
