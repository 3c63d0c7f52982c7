//! Sequential byte reader
//!
//! Reads bytes, 4-byte integers and 8-byte doubles from either a raw byte
//! slice or a string of hex digit pairs, in the byte order fixed by the
//! first byte of the input.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use super::endian::Endianness;
use super::error::Malformed;

/// Immutable input, addressed by byte offset
#[derive(Debug, Clone, Copy)]
pub enum ByteSource<'a> {
    Binary(&'a [u8]),
    /// Two hex digits per byte, either case
    Hex(&'a [u8]),
}

impl<'a> ByteSource<'a> {
    pub fn binary(bytes: &'a [u8]) -> Self {
        ByteSource::Binary(bytes)
    }

    pub fn hex(text: &'a str) -> Result<Self, Malformed> {
        if text.len() % 2 != 0 {
            return Err(Malformed::OddHexLength(text.len()));
        }
        Ok(ByteSource::Hex(text.as_bytes()))
    }

    /// Length in bytes (not hex digits)
    pub fn len(&self) -> usize {
        match self {
            ByteSource::Binary(b) => b.len(),
            ByteSource::Hex(h) => h.len() / 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Result<u8, Malformed> {
        match self {
            ByteSource::Binary(b) => b
                .get(index)
                .copied()
                .ok_or(Malformed::UnexpectedEnd { offset: index }),
            ByteSource::Hex(h) => {
                let pair = h
                    .get(index * 2..index * 2 + 2)
                    .ok_or(Malformed::UnexpectedEnd { offset: index })?;
                let mut out = [0u8; 1];
                hex::decode_to_slice(pair, &mut out)
                    .map_err(|_| Malformed::InvalidHex { offset: index })?;
                Ok(out[0])
            }
        }
    }
}

/// Endianness-aware reader over a `ByteSource`
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    source: ByteSource<'a>,
    endian: Endianness,
    position: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(source: ByteSource<'a>, endian: Endianness) -> Self {
        Self { source, endian, position: 0 }
    }

    pub fn endian(&self) -> Endianness {
        self.endian
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.source.len().saturating_sub(self.position)
    }

    pub fn read_byte(&mut self) -> Result<u8, Malformed> {
        let b = self.source.get(self.position)?;
        self.position += 1;
        Ok(b)
    }

    pub fn read_i32(&mut self) -> Result<i32, Malformed> {
        let buf = self.read_array::<4>()?;
        Ok(match self.endian {
            Endianness::Big => BigEndian::read_i32(&buf),
            Endianness::Little => LittleEndian::read_i32(&buf),
        })
    }

    pub fn read_u32(&mut self) -> Result<u32, Malformed> {
        let buf = self.read_array::<4>()?;
        Ok(match self.endian {
            Endianness::Big => BigEndian::read_u32(&buf),
            Endianness::Little => LittleEndian::read_u32(&buf),
        })
    }

    pub fn read_f64(&mut self) -> Result<f64, Malformed> {
        let buf = self.read_array::<8>()?;
        Ok(match self.endian {
            Endianness::Big => BigEndian::read_f64(&buf),
            Endianness::Little => LittleEndian::read_f64(&buf),
        })
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], Malformed> {
        // Fail before consuming anything so the reported offset is the start
        if self.remaining() < N {
            return Err(Malformed::UnexpectedEnd { offset: self.position });
        }
        let mut buf = [0u8; N];
        for b in buf.iter_mut() {
            *b = self.read_byte()?;
        }
        Ok(buf)
    }
}

/// Build a cursor whose byte order is named by the first input byte
///
/// The cursor starts at offset 0; the decoder reads the same leading byte
/// again as part of the first geometry header.
pub fn select_endianness(source: ByteSource<'_>) -> Result<ByteCursor<'_>, Malformed> {
    let first = source.get(0)?;
    let endian = Endianness::from_code(first).ok_or(Malformed::UnknownEndian(first))?;
    Ok(ByteCursor::new(source, endian))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_endianness() {
        let cursor = select_endianness(ByteSource::binary(&[0, 1, 2])).unwrap();
        assert_eq!(cursor.endian(), Endianness::Big);
        assert_eq!(cursor.position(), 0);

        let cursor = select_endianness(ByteSource::hex("01").unwrap()).unwrap();
        assert_eq!(cursor.endian(), Endianness::Little);

        let err = select_endianness(ByteSource::binary(&[7])).unwrap_err();
        assert_eq!(err, Malformed::UnknownEndian(7));

        let err = select_endianness(ByteSource::binary(&[])).unwrap_err();
        assert_eq!(err, Malformed::UnexpectedEnd { offset: 0 });
    }

    #[test]
    fn test_reads_both_orders() {
        let mut big = ByteCursor::new(ByteSource::binary(&[0, 0, 0, 42]), Endianness::Big);
        assert_eq!(big.read_i32().unwrap(), 42);

        let mut little = ByteCursor::new(ByteSource::binary(&[42, 0, 0, 0]), Endianness::Little);
        assert_eq!(little.read_i32().unwrap(), 42);

        // 10.0 little-endian
        let mut f = ByteCursor::new(ByteSource::binary(&[0, 0, 0, 0, 0, 0, 0x24, 0x40]), Endianness::Little);
        assert_eq!(f.read_f64().unwrap(), 10.0);
    }

    #[test]
    fn test_hex_source_is_case_insensitive() {
        let mut cursor = ByteCursor::new(ByteSource::hex("e6100000").unwrap(), Endianness::Little);
        assert_eq!(cursor.read_i32().unwrap(), 4326);
        let mut cursor = ByteCursor::new(ByteSource::hex("E6100000").unwrap(), Endianness::Little);
        assert_eq!(cursor.read_i32().unwrap(), 4326);
    }

    #[test]
    fn test_hex_errors() {
        assert_eq!(ByteSource::hex("010").unwrap_err(), Malformed::OddHexLength(3));
        let mut cursor = ByteCursor::new(ByteSource::hex("01zz").unwrap(), Endianness::Little);
        assert_eq!(cursor.read_byte().unwrap(), 1);
        assert_eq!(cursor.read_byte().unwrap_err(), Malformed::InvalidHex { offset: 1 });
    }

    #[test]
    fn test_truncated_read() {
        let mut cursor = ByteCursor::new(ByteSource::binary(&[1, 2, 3]), Endianness::Big);
        assert_eq!(cursor.read_i32().unwrap_err(), Malformed::UnexpectedEnd { offset: 0 });
        assert_eq!(cursor.position(), 0);
    }
}
