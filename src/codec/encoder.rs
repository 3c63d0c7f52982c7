//! Geometry to EWKB
//!
//! Every geometry, nested or not, is written with its own endian byte and
//! type word, so the output is self-describing at each level.

use tracing::trace;

use crate::geometry::{CoordinateSequence, Geometry, GeometryRef};

use super::builder::{BinaryBuilder, ByteBuilder, ByteSink, HexBuilder};
use super::endian::Endianness;
use super::error::{CodecError, Result};
use super::size::{coordinate_dimension_ref, estimate_ref};
use super::{WKB_GEOMETRYCOLLECTION, WKB_M_FLAG, WKB_SRID_FLAG, WKB_Z_FLAG};

/// Encode to raw bytes
pub fn encode<'a>(geom: impl Into<Option<&'a Geometry>>, endian: Endianness) -> Result<Vec<u8>> {
    let geom = geom.into().ok_or(CodecError::NullGeometry)?;
    let len = estimate_ref(geom.view());
    trace!(kind = geom.kind_name(), len, %endian, "encoding geometry");
    let mut builder = BinaryBuilder::with_capacity(len, endian);
    write_geometry(geom.view(), &mut builder)?;
    debug_assert_eq!(builder.written(), len);
    Ok(builder.finish())
}

/// Encode to upper-case hex digit pairs
pub fn encode_hex<'a>(geom: impl Into<Option<&'a Geometry>>, endian: Endianness) -> Result<String> {
    let geom = geom.into().ok_or(CodecError::NullGeometry)?;
    let len = estimate_ref(geom.view());
    trace!(kind = geom.kind_name(), len, %endian, "encoding geometry as hex");
    let mut builder = HexBuilder::with_capacity(len, endian);
    write_geometry(geom.view(), &mut builder)?;
    debug_assert_eq!(builder.written(), len);
    Ok(builder.finish())
}

/// Write one geometry, header included
pub fn write_geometry<S: ByteSink>(geom: GeometryRef<'_>, dest: &mut ByteBuilder<S>) -> Result<()> {
    let empty = geom.is_empty();
    let dim = coordinate_dimension_ref(geom);
    if !empty && !(2..=4).contains(&dim) {
        return Err(CodecError::UnsupportedDimensionality(dim));
    }

    let plain_type = if empty { WKB_GEOMETRYCOLLECTION } else { geom.variant_code() };
    let mut type_word = plain_type;
    if dim == 3 || dim == 4 {
        type_word |= WKB_Z_FLAG;
    }
    if dim == 4 {
        type_word |= WKB_M_FLAG;
    }
    let srid = geom.srid();
    if srid > 0 {
        type_word |= WKB_SRID_FLAG;
    }

    dest.write_byte(dest.endian().code());
    dest.write_u32(type_word);
    if srid > 0 {
        dest.write_i32(srid);
    }

    if empty {
        dest.write_u32(0);
        return Ok(());
    }

    match geom {
        GeometryRef::Point(p) => write_point(&p.coords, dim, dest),
        GeometryRef::LineString(l) => write_line(&l.coords, dim, dest)?,
        GeometryRef::LinearRing(r) => write_line(&r.coords, dim, dest)?,
        GeometryRef::Polygon(p) => {
            write_count(p.holes.len() + 1, dest)?;
            for ring in p.rings() {
                write_line(&ring.coords, dim, dest)?;
            }
        }
        GeometryRef::MultiPoint(_)
        | GeometryRef::MultiLineString(_)
        | GeometryRef::MultiPolygon(_)
        | GeometryRef::GeometryCollection(_) => {
            let count = geom.num_geometries();
            write_count(count, dest)?;
            for member in (0..count).filter_map(|i| geom.nth_geometry(i)) {
                write_geometry(member, dest)?;
            }
        }
    }
    Ok(())
}

/// A point carries exactly one coordinate on the wire; extra ones are not written
fn write_point<S: ByteSink>(seq: &CoordinateSequence, dim: usize, dest: &mut ByteBuilder<S>) {
    write_coordinates(seq, 0..seq.len().min(1), dim, dest);
}

fn write_line<S: ByteSink>(seq: &CoordinateSequence, dim: usize, dest: &mut ByteBuilder<S>) -> Result<()> {
    write_count(seq.len(), dest)?;
    write_coordinates(seq, 0..seq.len(), dim, dest);
    Ok(())
}

fn write_coordinates<S: ByteSink>(
    seq: &CoordinateSequence,
    indices: std::ops::Range<usize>,
    dim: usize,
    dest: &mut ByteBuilder<S>,
) {
    for i in indices {
        for d in 0..dim {
            dest.write_f64(seq.ordinate(i, d));
        }
    }
}

fn write_count<S: ByteSink>(count: usize, dest: &mut ByteBuilder<S>) -> Result<()> {
    dest.write_i32(wire_count(count)?);
    Ok(())
}

/// Counts are signed 32-bit on the wire
fn wire_count(count: usize) -> Result<i32> {
    i32::try_from(count).map_err(|_| CodecError::CountOverflow(count))
}
