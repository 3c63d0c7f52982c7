//! Byte writer
//!
//! Fills a buffer allocated up front from the size estimate, either as raw
//! bytes or as upper-case hex digit pairs.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use super::endian::Endianness;

/// Destination for encoded bytes
pub trait ByteSink {
    type Output;

    /// Allocate room for `len` encoded bytes
    fn with_capacity(len: usize) -> Self;
    fn put(&mut self, bytes: &[u8]);
    /// Encoded length so far, in bytes
    fn written(&self) -> usize;
    fn finish(self) -> Self::Output;
}

impl ByteSink for Vec<u8> {
    type Output = Vec<u8>;

    fn with_capacity(len: usize) -> Self {
        Vec::with_capacity(len)
    }

    fn put(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }

    fn written(&self) -> usize {
        self.len()
    }

    fn finish(self) -> Vec<u8> {
        self
    }
}

/// Hex text sink, two digits per byte
#[derive(Debug, Default)]
pub struct HexSink(String);

impl ByteSink for HexSink {
    type Output = String;

    fn with_capacity(len: usize) -> Self {
        HexSink(String::with_capacity(len * 2))
    }

    fn put(&mut self, bytes: &[u8]) {
        // Primitives are at most 8 bytes wide
        let mut digits = [0u8; 16];
        for chunk in bytes.chunks(8) {
            let out = &mut digits[..chunk.len() * 2];
            let encoded = hex::encode_to_slice(chunk, out);
            debug_assert!(encoded.is_ok());
            out.make_ascii_uppercase();
            self.0.extend(out.iter().map(|&d| d as char));
        }
    }

    fn written(&self) -> usize {
        self.0.len() / 2
    }

    fn finish(self) -> String {
        self.0
    }
}

/// Endianness-aware writer over a `ByteSink`
#[derive(Debug)]
pub struct ByteBuilder<S: ByteSink> {
    sink: S,
    endian: Endianness,
}

impl<S: ByteSink> ByteBuilder<S> {
    pub fn with_capacity(len: usize, endian: Endianness) -> Self {
        Self { sink: S::with_capacity(len), endian }
    }

    pub fn endian(&self) -> Endianness {
        self.endian
    }

    pub fn written(&self) -> usize {
        self.sink.written()
    }

    pub fn write_byte(&mut self, value: u8) {
        self.sink.put(&[value]);
    }

    pub fn write_u32(&mut self, value: u32) {
        let mut buf = [0u8; 4];
        match self.endian {
            Endianness::Big => BigEndian::write_u32(&mut buf, value),
            Endianness::Little => LittleEndian::write_u32(&mut buf, value),
        }
        self.sink.put(&buf);
    }

    pub fn write_i32(&mut self, value: i32) {
        let mut buf = [0u8; 4];
        match self.endian {
            Endianness::Big => BigEndian::write_i32(&mut buf, value),
            Endianness::Little => LittleEndian::write_i32(&mut buf, value),
        }
        self.sink.put(&buf);
    }

    pub fn write_f64(&mut self, value: f64) {
        let mut buf = [0u8; 8];
        match self.endian {
            Endianness::Big => BigEndian::write_f64(&mut buf, value),
            Endianness::Little => LittleEndian::write_f64(&mut buf, value),
        }
        self.sink.put(&buf);
    }

    pub fn finish(self) -> S::Output {
        self.sink.finish()
    }
}

pub type BinaryBuilder = ByteBuilder<Vec<u8>>;
pub type HexBuilder = ByteBuilder<HexSink>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_builder_orders() {
        let mut big = BinaryBuilder::with_capacity(4, Endianness::Big);
        big.write_i32(4326);
        assert_eq!(big.finish(), vec![0x00, 0x00, 0x10, 0xE6]);

        let mut little = BinaryBuilder::with_capacity(4, Endianness::Little);
        little.write_i32(4326);
        assert_eq!(little.finish(), vec![0xE6, 0x10, 0x00, 0x00]);
    }

    #[test]
    fn test_hex_builder_is_upper_case() {
        let mut builder = HexBuilder::with_capacity(9, Endianness::Little);
        builder.write_byte(1);
        builder.write_f64(-20.0);
        assert_eq!(builder.written(), 9);
        assert_eq!(builder.finish(), "0100000000000034C0");
    }

    #[test]
    fn test_hex_sink_splits_wide_input() {
        let mut sink = HexSink::with_capacity(12);
        sink.put(&[0xAB; 12]);
        assert_eq!(sink.written(), 12);
        assert_eq!(sink.finish(), "AB".repeat(12));
    }
}
