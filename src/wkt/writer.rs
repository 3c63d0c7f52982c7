//! Well-Known-Text writer
//!
//! Output looks like `POINT (1.4 -3.7)`, `POINT Z (1 2 3)` or
//! `POLYGON ((0 0, 1 0, 1 1, 0 0))`. Numbers use the shortest text that
//! reads back to the same value.

use std::fmt::{self, Write};

use crate::codec::coordinate_dimension_ref;
use crate::geometry::{CoordinateSequence, Geometry, GeometryRef, Polygon};

/// Render a geometry as WKT
pub fn write_wkt(geom: &Geometry) -> String {
    geom.to_string()
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tagged(f, self.view())
    }
}

fn keyword(geom: GeometryRef<'_>) -> &'static str {
    match geom {
        GeometryRef::Point(_) => "POINT",
        GeometryRef::LineString(_) => "LINESTRING",
        GeometryRef::LinearRing(_) => "LINEARRING",
        GeometryRef::Polygon(_) => "POLYGON",
        GeometryRef::MultiPoint(_) => "MULTIPOINT",
        GeometryRef::MultiLineString(_) => "MULTILINESTRING",
        GeometryRef::MultiPolygon(_) => "MULTIPOLYGON",
        GeometryRef::GeometryCollection(_) => "GEOMETRYCOLLECTION",
    }
}

/// Keyword, dimension tag and body
fn write_tagged<W: Write>(out: &mut W, geom: GeometryRef<'_>) -> fmt::Result {
    out.write_str(keyword(geom))?;
    if geom.is_empty() {
        return out.write_str(" EMPTY");
    }
    let dim = coordinate_dimension_ref(geom).min(3);
    if dim == 3 {
        out.write_str(" Z")?;
    }
    out.write_char(' ')?;

    match geom {
        GeometryRef::Point(p) => write_sequence(out, &p.coords, dim),
        GeometryRef::LineString(l) => write_sequence(out, &l.coords, dim),
        GeometryRef::LinearRing(r) => write_sequence(out, &r.coords, dim),
        GeometryRef::Polygon(p) => write_polygon(out, p, dim),
        GeometryRef::MultiPoint(m) => write_list(out, &m.points, |out, p| {
            if p.coords.is_empty() {
                out.write_str("EMPTY")
            } else {
                write_sequence(out, &p.coords, dim)
            }
        }),
        GeometryRef::MultiLineString(m) => write_list(out, &m.line_strings, |out, l| {
            if l.coords.is_empty() {
                out.write_str("EMPTY")
            } else {
                write_sequence(out, &l.coords, dim)
            }
        }),
        GeometryRef::MultiPolygon(m) => write_list(out, &m.polygons, |out, p| {
            if p.shell.coords.is_empty() {
                out.write_str("EMPTY")
            } else {
                write_polygon(out, p, dim)
            }
        }),
        GeometryRef::GeometryCollection(c) => {
            write_list(out, &c.geometries, |out, g| write_tagged(out, g.view()))
        }
    }
}

fn write_polygon<W: Write>(out: &mut W, polygon: &Polygon, dim: usize) -> fmt::Result {
    let rings: Vec<_> = polygon.rings().collect();
    write_list(out, &rings, |out, r| write_sequence(out, &r.coords, dim))
}

fn write_list<W: Write, T>(
    out: &mut W,
    items: &[T],
    mut item: impl FnMut(&mut W, &T) -> fmt::Result,
) -> fmt::Result {
    out.write_char('(')?;
    for (i, it) in items.iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        item(out, it)?;
    }
    out.write_char(')')
}

fn write_sequence<W: Write>(out: &mut W, seq: &CoordinateSequence, dim: usize) -> fmt::Result {
    out.write_char('(')?;
    for i in 0..seq.len() {
        if i > 0 {
            out.write_str(", ")?;
        }
        write!(out, "{} {}", seq.ordinate(i, 0), seq.ordinate(i, 1))?;
        if dim == 3 {
            write!(out, " {}", seq.ordinate(i, 2))?;
        }
    }
    out.write_char(')')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wkt::read_wkt;

    #[test]
    fn test_write_simple_kinds() {
        for text in [
            "POINT (1.4 -3.7)",
            "POINT Z (1 2 3)",
            "LINESTRING (0 0, 1 0, 1 1)",
            "POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0), (2 2, 4 2, 4 4, 2 4, 2 2))",
            "MULTIPOINT ((1 2), (3 4))",
            "MULTIPOLYGON (((0 0, 1 0, 1 1, 0 0)), ((5 5, 6 5, 6 6, 5 5)))",
            "GEOMETRYCOLLECTION (POINT (1 2), LINESTRING (0 0, 1 1))",
            "POLYGON EMPTY",
        ] {
            let geom = read_wkt(text).unwrap();
            assert_eq!(write_wkt(&geom), text);
        }
    }

    #[test]
    fn test_nan_z_written_as_2d() {
        let geom = Geometry::LineString(crate::geometry::make_line_string(
            CoordinateSequence::with_dimension(
                vec![crate::geometry::Coordinate::xy(0.0, 0.0), crate::geometry::Coordinate::xy(1.0, 1.0)],
                3,
            ),
        ));
        assert_eq!(geom.to_string(), "LINESTRING (0 0, 1 1)");
    }
}
