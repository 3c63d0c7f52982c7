//! Database geometry value
//!
//! Wraps a geometry the way a driver hands it across the SQL boundary: read
//! from either hex EWKB or `SRID=<n>;<WKT>` text, written back as hex EWKB.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::warn;

use crate::codec::{self, CodecError, Endianness};
use crate::geometry::Geometry;
use crate::wkt::{read_wkt, WktError};

/// SQL type name carried by every `GeometryValue`
pub const GEOMETRY_TYPE: &str = "geometry";

#[derive(Debug, Error)]
pub enum ValueError {
    #[error("error parsing geometry data: {0}")]
    Ewkb(#[from] CodecError),

    #[error("error parsing geometry data: {0}")]
    Wkt(#[from] WktError),

    #[error("error parsing geometry data: invalid SRID prefix '{0}'")]
    InvalidSrid(String),
}

/// A possibly-absent geometry with its SQL type name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryValue {
    geometry: Option<Geometry>,
}

impl GeometryValue {
    pub fn new(geometry: Geometry) -> Self {
        Self { geometry: Some(geometry) }
    }

    /// Parse hex EWKB or `SRID=<n>;<WKT>` text
    pub fn parse(text: &str) -> Result<Self, ValueError> {
        Ok(Self { geometry: Some(geometry_from_str(text)?) })
    }

    pub fn set_value(&mut self, text: &str) -> Result<(), ValueError> {
        self.geometry = Some(geometry_from_str(text)?);
        Ok(())
    }

    pub fn type_name(&self) -> &'static str {
        GEOMETRY_TYPE
    }

    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    pub fn into_geometry(self) -> Option<Geometry> {
        self.geometry
    }

    /// Little-endian hex EWKB of the wrapped geometry
    pub fn value(&self) -> Result<String, CodecError> {
        codec::encode_hex(self.geometry.as_ref(), Endianness::Little)
    }
}

impl From<Geometry> for GeometryValue {
    fn from(geometry: Geometry) -> Self {
        Self::new(geometry)
    }
}

impl FromStr for GeometryValue {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for GeometryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.geometry {
            Some(g) => write!(f, "{}", g),
            None => write!(f, "NULL"),
        }
    }
}

/// Hex EWKB when the text starts with an endian byte, otherwise EWKT
pub fn geometry_from_str(text: &str) -> Result<Geometry, ValueError> {
    let result = parse_text(text.trim());
    if let Err(e) = &result {
        warn!(error = %e, "failed to parse geometry text");
    }
    result
}

fn parse_text(text: &str) -> Result<Geometry, ValueError> {
    if text.starts_with("00") || text.starts_with("01") {
        return Ok(codec::decode_hex(text)?);
    }

    let (srid, wkt) = match text.strip_prefix("SRID=") {
        Some(rest) => {
            let (srid, wkt) = rest
                .split_once(';')
                .ok_or_else(|| ValueError::InvalidSrid(rest.to_string()))?;
            let srid = srid
                .trim()
                .parse::<i32>()
                .map_err(|_| ValueError::InvalidSrid(srid.to_string()))?;
            (srid, wkt.trim())
        }
        None => (0, text),
    };

    let mut geom = read_wkt(wkt)?;
    geom.set_srid_recursive(srid);
    Ok(geom)
}
