//! Geometry constructors
//!
//! Plain functions with no shared state. Every constructed value starts
//! without an SRID (0).

use super::types::*;

pub fn make_point(coords: CoordinateSequence) -> Point {
    Point { coords, srid: 0 }
}

pub fn make_line_string(coords: CoordinateSequence) -> LineString {
    LineString { coords, srid: 0 }
}

pub fn make_linear_ring(coords: CoordinateSequence) -> LinearRing {
    LinearRing { coords, srid: 0 }
}

pub fn make_polygon(shell: LinearRing, holes: Vec<LinearRing>) -> Polygon {
    Polygon { shell, holes, srid: 0 }
}

pub fn make_multi_point(points: Vec<Point>) -> MultiPoint {
    MultiPoint { points, srid: 0 }
}

pub fn make_multi_line_string(line_strings: Vec<LineString>) -> MultiLineString {
    MultiLineString { line_strings, srid: 0 }
}

pub fn make_multi_polygon(polygons: Vec<Polygon>) -> MultiPolygon {
    MultiPolygon { polygons, srid: 0 }
}

pub fn make_geometry_collection(geometries: Vec<Geometry>) -> GeometryCollection {
    GeometryCollection { geometries, srid: 0 }
}
