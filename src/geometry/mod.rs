//! Geometry value model
//!
//! The in-memory geometries the codec reads into and writes from.
//!
//! # Submodules
//! - `types` - Coordinates, coordinate sequences and the geometry kinds
//! - `factory` - Free-function constructors

mod types;
mod factory;

pub use types::{
    Coordinate,
    CoordinateSequence,
    Point,
    LineString,
    LinearRing,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
    Geometry,
    GeometryRef,
};

pub use factory::{
    make_point,
    make_line_string,
    make_linear_ring,
    make_polygon,
    make_multi_point,
    make_multi_line_string,
    make_multi_polygon,
    make_geometry_collection,
};
