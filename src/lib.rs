//! EWKB geometry codec
//!
//! Reads and writes the Extended Well-Known-Binary form used by PostGIS,
//! as raw bytes or hex text, with SRID and Z support.
//!
//! ```ignore
//! let geom = ewkb_codec::decode_hex("0101000020E6100000000000000000244000000000000034C0")?;
//! assert_eq!(geom.srid(), 4326);
//! let hex = ewkb_codec::encode_hex(&geom, Endianness::Little)?;
//! ```
//!
//! # Modules
//! - `geometry` - In-memory geometry model
//! - `codec` - EWKB reader, writer and size estimation
//! - `wkt` - Well-Known-Text reader and writer
//! - `value` - Database-facing geometry value
//! - `config` - Writer settings
//! - `batch` - Parallel coding of many geometries

pub mod geometry;
pub mod codec;
pub mod wkt;
pub mod value;
pub mod config;
pub mod batch;

pub use geometry::{Coordinate, CoordinateSequence, Geometry};
pub use codec::{decode, decode_hex, encode, encode_hex, estimate_size, CodecError, Endianness, Malformed};
pub use value::{GeometryValue, ValueError};
pub use config::WriterConfig;
