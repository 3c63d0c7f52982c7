//! Parallel encode/decode of independent geometries
//!
//! Each item is coded on its own, so results keep input order and one bad
//! item does not affect the others.

use rayon::prelude::*;
use tracing::debug;

use crate::codec::{self, Endianness, Result};
use crate::geometry::Geometry;

pub fn decode_batch<B: AsRef<[u8]> + Sync>(items: &[B]) -> Vec<Result<Geometry>> {
    let start = std::time::Instant::now();
    let results: Vec<_> = items
        .par_iter()
        .map(|bytes| codec::decode(bytes.as_ref()))
        .collect();
    debug!(count = items.len(), elapsed_ms = start.elapsed().as_millis() as u64, "decoded batch");
    results
}

pub fn decode_hex_batch<S: AsRef<str> + Sync>(items: &[S]) -> Vec<Result<Geometry>> {
    let start = std::time::Instant::now();
    let results: Vec<_> = items
        .par_iter()
        .map(|text| codec::decode_hex(text.as_ref()))
        .collect();
    debug!(count = items.len(), elapsed_ms = start.elapsed().as_millis() as u64, "decoded hex batch");
    results
}

pub fn encode_batch(geoms: &[Geometry], endian: Endianness) -> Vec<Result<Vec<u8>>> {
    let start = std::time::Instant::now();
    let results: Vec<_> = geoms
        .par_iter()
        .map(|geom| codec::encode(geom, endian))
        .collect();
    debug!(count = geoms.len(), elapsed_ms = start.elapsed().as_millis() as u64, "encoded batch");
    results
}

pub fn encode_hex_batch(geoms: &[Geometry], endian: Endianness) -> Vec<Result<String>> {
    let start = std::time::Instant::now();
    let results: Vec<_> = geoms
        .par_iter()
        .map(|geom| codec::encode_hex(geom, endian))
        .collect();
    debug!(count = geoms.len(), elapsed_ms = start.elapsed().as_millis() as u64, "encoded hex batch");
    results
}
