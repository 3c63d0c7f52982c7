//! Extended Well-Known-Binary (EWKB) codec
//!
//! Wire layout of every geometry, nested members included:
//!
//! ```text
//! endian_byte  1 byte   0 = big-endian (XDR), 1 = little-endian (NDR)
//! type_word    4 bytes  bits 0-28 variant code 1..7
//!                       bit 29 SRID present, bit 30 M present, bit 31 Z present
//! [srid]       4 bytes  only when bit 29 is set
//! payload
//! ```
//!
//! # Submodules
//! - `endian` - Byte order names and codes
//! - `cursor` - Sequential reader over bytes or hex text
//! - `builder` - Pre-sized writer producing bytes or hex text
//! - `size` - Exact output size and coordinate dimension
//! - `decoder` - Recursive EWKB reader
//! - `encoder` - Recursive EWKB writer
//! - `error` - Error taxonomy

mod endian;
mod cursor;
mod builder;
mod size;
mod decoder;
mod encoder;
mod error;

/// Low 29 bits of the type word
pub const WKB_TYPE_MASK: u32 = 0x1FFF_FFFF;
pub const WKB_SRID_FLAG: u32 = 0x2000_0000;
pub const WKB_M_FLAG: u32 = 0x4000_0000;
pub const WKB_Z_FLAG: u32 = 0x8000_0000;

pub const WKB_POINT: u32 = 1;
pub const WKB_LINESTRING: u32 = 2;
pub const WKB_POLYGON: u32 = 3;
pub const WKB_MULTIPOINT: u32 = 4;
pub const WKB_MULTILINESTRING: u32 = 5;
pub const WKB_MULTIPOLYGON: u32 = 6;
pub const WKB_GEOMETRYCOLLECTION: u32 = 7;

pub use endian::Endianness;

pub use cursor::{
    ByteSource,
    ByteCursor,
    select_endianness,
};

pub use builder::{
    ByteSink,
    HexSink,
    ByteBuilder,
    BinaryBuilder,
    HexBuilder,
};

pub use size::{
    estimate_size,
    coordinate_dimension,
    sequence_dimension,
};

pub(crate) use size::coordinate_dimension_ref;

pub use decoder::{
    decode,
    decode_hex,
    decode_source,
};

pub use encoder::{
    encode,
    encode_hex,
    write_geometry,
};

pub use error::{
    CodecError,
    Malformed,
    Result,
};
