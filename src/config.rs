//! Writer settings loaded from JSON

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::codec::{self, Endianness};
use crate::geometry::Geometry;

/// How geometries are written
///
/// ```json
/// { "endian": "big", "hex": false }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    pub endian: Endianness,
    pub hex: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            endian: Endianness::Little,
            hex: true,
        }
    }
}

impl WriterConfig {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read writer config {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse writer config {}", path.display()))?;
        Ok(config)
    }

    pub fn encode(&self, geom: &Geometry) -> codec::Result<Vec<u8>> {
        codec::encode(geom, self.endian)
    }

    pub fn encode_hex(&self, geom: &Geometry) -> codec::Result<String> {
        codec::encode_hex(geom, self.endian)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{make_point, Coordinate};

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config: WriterConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, WriterConfig::default());

        let config: WriterConfig = serde_json::from_str(r#"{ "endian": "xdr" }"#).unwrap();
        assert_eq!(config.endian, Endianness::Big);
        assert!(config.hex);
    }

    #[test]
    fn test_encode_uses_configured_order() {
        let config = WriterConfig { endian: Endianness::Big, hex: true };
        let geom = Geometry::Point(make_point(vec![Coordinate::xy(10.0, -20.0)].into()));
        let hex = config.encode_hex(&geom).unwrap();
        assert!(hex.starts_with("0000000001"));
        assert_eq!(config.encode(&geom).unwrap()[0], 0);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = WriterConfig::from_json_file("does/not/exist.json").unwrap_err();
        assert!(err.to_string().contains("does/not/exist.json"));
    }
}
