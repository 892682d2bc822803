//! Spatial reference handles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::GeometryError;

/// Well-known spatial references a raster or tile may be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SpatialReference {
    /// WGS84 Geographic (lat/lon in degrees)
    Epsg4326,
    /// Web Mercator (meters)
    Epsg3857,
    /// NAD83 Geographic
    Epsg4269,
    /// CONUS Albers Equal Area (meters)
    Epsg5070,
    /// Polar Stereographic North
    Epsg3413,
    /// Polar Stereographic South
    Epsg3031,
}

impl SpatialReference {
    /// Look up a spatial reference by its EPSG well-known ID.
    pub fn from_wkid(wkid: u32) -> Option<Self> {
        match wkid {
            4326 => Some(Self::Epsg4326),
            3857 | 900913 | 102100 => Some(Self::Epsg3857),
            4269 => Some(Self::Epsg4269),
            5070 => Some(Self::Epsg5070),
            3413 => Some(Self::Epsg3413),
            3031 => Some(Self::Epsg3031),
            _ => None,
        }
    }

    /// EPSG well-known ID.
    pub fn wkid(&self) -> u32 {
        match self {
            Self::Epsg4326 => 4326,
            Self::Epsg3857 => 3857,
            Self::Epsg4269 => 4269,
            Self::Epsg5070 => 5070,
            Self::Epsg3413 => 3413,
            Self::Epsg3031 => 3031,
        }
    }

    /// Check if this is a geographic (lat/lon) reference.
    pub fn is_geographic(&self) -> bool {
        matches!(self, Self::Epsg4326 | Self::Epsg4269)
    }
}

impl FromStr for SpatialReference {
    type Err = GeometryError;

    /// Accepts "EPSG:4326", "epsg:4326", "CRS:84", or a bare "4326".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        if normalized == "CRS:84" {
            return Ok(Self::Epsg4326);
        }

        let code = normalized.strip_prefix("EPSG:").unwrap_or(&normalized);
        code.parse::<u32>()
            .ok()
            .and_then(Self::from_wkid)
            .ok_or_else(|| GeometryError::UnsupportedSpatialReference(s.to_string()))
    }
}

impl TryFrom<String> for SpatialReference {
    type Error = GeometryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SpatialReference> for String {
    fn from(sr: SpatialReference) -> Self {
        sr.to_string()
    }
}

impl fmt::Display for SpatialReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EPSG:{}", self.wkid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_spatial_reference() {
        assert_eq!(
            "EPSG:4326".parse::<SpatialReference>().unwrap(),
            SpatialReference::Epsg4326
        );
        assert_eq!(
            "epsg:3857".parse::<SpatialReference>().unwrap(),
            SpatialReference::Epsg3857
        );
        assert_eq!(
            "CRS:84".parse::<SpatialReference>().unwrap(),
            SpatialReference::Epsg4326
        );
        assert_eq!(
            "102100".parse::<SpatialReference>().unwrap(),
            SpatialReference::Epsg3857
        );
        assert!("EPSG:99999".parse::<SpatialReference>().is_err());
    }


    #[test]
    fn test_is_geographic() {
        assert!(SpatialReference::Epsg4326.is_geographic());
        assert!(SpatialReference::Epsg4269.is_geographic());
        assert!(!SpatialReference::Epsg3857.is_geographic());
    }

    #[test]
    fn test_display_roundtrips_through_from_str() {
        let sr = SpatialReference::Epsg5070;
        assert_eq!(sr.to_string(), "EPSG:5070");
        assert_eq!(sr.to_string().parse::<SpatialReference>().unwrap(), sr);
    }
}
