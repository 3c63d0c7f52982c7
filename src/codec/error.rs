//! Codec error taxonomy

use thiserror::Error;

/// Why an encoded geometry could not be read
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Malformed {
    #[error("unknown endian type: {0}")]
    UnknownEndian(u8),

    #[error("endian inconsistency at offset {offset}")]
    EndianInconsistency { offset: usize },

    #[error("unknown geometry type: {0}")]
    UnknownGeometryType(u32),

    #[error("inconsistent SRID in nested geometry: {parent}, {nested}")]
    InconsistentSrid { parent: i32, nested: i32 },

    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEnd { offset: usize },

    #[error("invalid hex digit at offset {offset}")]
    InvalidHex { offset: usize },

    #[error("hex input has odd length {0}")]
    OddHexLength(usize),

    #[error("negative count {0}")]
    NegativeCount(i32),

    #[error("polygon without shell")]
    MissingShell,

    #[error("{found} member in {container}")]
    UnexpectedMember {
        container: &'static str,
        found: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("malformed encoding: {0}")]
    MalformedEncoding(#[from] Malformed),

    #[error("unsupported geometry dimensionality: {0}")]
    UnsupportedDimensionality(usize),

    #[error("no geometry to encode")]
    NullGeometry,

    #[error("count {0} does not fit the 32-bit wire field")]
    CountOverflow(usize),
}

impl CodecError {
    pub fn is_malformed(&self) -> bool {
        matches!(self, CodecError::MalformedEncoding(_))
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;
