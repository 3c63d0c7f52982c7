//! Exact encoded-size computation
//!
//! Mirrors the encoder's layout without writing, so the output buffer can
//! be allocated once at its final size.

use crate::geometry::{CoordinateSequence, Geometry, GeometryRef};

/// Endian byte plus type word
const HEADER_SIZE: usize = 1 + 4;
const SRID_SIZE: usize = 4;
const COUNT_SIZE: usize = 4;
const ORDINATE_SIZE: usize = 8;

/// Number of bytes `encode` will produce for `geom`
pub fn estimate_size(geom: &Geometry) -> usize {
    estimate_ref(geom.view())
}

pub(crate) fn estimate_ref(geom: GeometryRef<'_>) -> usize {
    let mut size = HEADER_SIZE;
    if geom.srid() > 0 {
        size += SRID_SIZE;
    }

    // Empty geometries go out as a memberless collection
    if geom.is_empty() {
        return size + COUNT_SIZE;
    }

    let dim = coordinate_dimension_ref(geom);
    size + match geom {
        GeometryRef::Point(_) => ORDINATE_SIZE * dim,
        GeometryRef::LineString(g) => sequence_size(&g.coords, dim),
        GeometryRef::LinearRing(g) => sequence_size(&g.coords, dim),
        GeometryRef::Polygon(p) => {
            COUNT_SIZE + p.rings().map(|r| sequence_size(&r.coords, dim)).sum::<usize>()
        }
        GeometryRef::MultiPoint(_)
        | GeometryRef::MultiLineString(_)
        | GeometryRef::MultiPolygon(_)
        | GeometryRef::GeometryCollection(_) => {
            COUNT_SIZE
                + (0..geom.num_geometries())
                    .filter_map(|i| geom.nth_geometry(i))
                    .map(estimate_ref)
                    .sum::<usize>()
        }
    }
}

fn sequence_size(seq: &CoordinateSequence, dim: usize) -> usize {
    COUNT_SIZE + ORDINATE_SIZE * dim * seq.len()
}

/// Coordinate dimension used on the wire
///
/// 0 for empty geometries. Collections take the dimension of their first
/// member.
pub fn coordinate_dimension(geom: &Geometry) -> usize {
    coordinate_dimension_ref(geom.view())
}

pub(crate) fn coordinate_dimension_ref(geom: GeometryRef<'_>) -> usize {
    if geom.is_empty() {
        return 0;
    }
    match geom {
        GeometryRef::Point(g) => sequence_dimension(&g.coords),
        GeometryRef::LineString(g) => sequence_dimension(&g.coords),
        GeometryRef::LinearRing(g) => sequence_dimension(&g.coords),
        GeometryRef::Polygon(p) => sequence_dimension(&p.shell.coords),
        _ => geom.nth_geometry(0).map(coordinate_dimension_ref).unwrap_or(0),
    }
}

/// Declared dimension, with a 3D sequence whose first Z is NaN treated as 2D
pub fn sequence_dimension(seq: &CoordinateSequence) -> usize {
    if seq.is_empty() {
        return 0;
    }
    match seq.dimension() {
        3 if seq.ordinate(0, 2).is_nan() => 2,
        dim => dim,
    }
}
