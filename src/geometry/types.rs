//! Core geometry types
//!
//! A closed set of geometry kinds, each tagged with a spatial reference
//! identifier. Coordinates carry X, Y and an optional Z; M ordinates are
//! never stored.

use serde::{Deserialize, Serialize};

/// A single position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
}

impl Coordinate {
    pub fn xy(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    pub fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z: Some(z) }
    }
}

/// Ordered coordinates with a declared dimension
///
/// The declared dimension is what the geometry library reports for the
/// sequence; the effective dimension used on the wire may be lower (see
/// `codec::coordinate_dimension`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinateSequence {
    dimension: usize,
    coords: Vec<Coordinate>,
}

impl CoordinateSequence {
    /// Build a sequence, declaring 3 dimensions if any coordinate has a Z
    pub fn new(coords: Vec<Coordinate>) -> Self {
        let dimension = if coords.iter().any(|c| c.z.is_some()) { 3 } else { 2 };
        Self { dimension, coords }
    }

    /// Build a sequence with an explicit declared dimension
    pub fn with_dimension(coords: Vec<Coordinate>, dimension: usize) -> Self {
        Self { dimension, coords }
    }

    pub fn empty() -> Self {
        Self { dimension: 2, coords: Vec::new() }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn coords(&self) -> &[Coordinate] {
        &self.coords
    }

    pub fn get(&self, index: usize) -> Option<&Coordinate> {
        self.coords.get(index)
    }

    /// Ordinate `dim` (0=X, 1=Y, 2=Z, 3=M) of coordinate `index`
    ///
    /// Missing Z and every M read as NaN.
    pub fn ordinate(&self, index: usize, dim: usize) -> f64 {
        let c = &self.coords[index];
        match dim {
            0 => c.x,
            1 => c.y,
            2 => c.z.unwrap_or(f64::NAN),
            _ => f64::NAN,
        }
    }
}

impl From<Vec<Coordinate>> for CoordinateSequence {
    fn from(coords: Vec<Coordinate>) -> Self {
        Self::new(coords)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub coords: CoordinateSequence,
    pub srid: i32,
}

impl Point {
    pub fn coordinate(&self) -> Option<&Coordinate> {
        self.coords.get(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineString {
    pub coords: CoordinateSequence,
    pub srid: i32,
}

/// A closed line; closure is the caller's concern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRing {
    pub coords: CoordinateSequence,
    pub srid: i32,
}

/// One shell plus zero or more holes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub shell: LinearRing,
    pub holes: Vec<LinearRing>,
    pub srid: i32,
}

impl Polygon {
    /// Shell followed by holes, the order rings take on the wire
    pub fn rings(&self) -> impl Iterator<Item = &LinearRing> {
        std::iter::once(&self.shell).chain(self.holes.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiPoint {
    pub points: Vec<Point>,
    pub srid: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiLineString {
    pub line_strings: Vec<LineString>,
    pub srid: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiPolygon {
    pub polygons: Vec<Polygon>,
    pub srid: i32,
}

/// Heterogeneous collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryCollection {
    pub geometries: Vec<Geometry>,
    pub srid: i32,
}

/// Any geometry value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    LinearRing(LinearRing),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

/// Borrowed view of any geometry or collection member
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryRef<'a> {
    Point(&'a Point),
    LineString(&'a LineString),
    LinearRing(&'a LinearRing),
    Polygon(&'a Polygon),
    MultiPoint(&'a MultiPoint),
    MultiLineString(&'a MultiLineString),
    MultiPolygon(&'a MultiPolygon),
    GeometryCollection(&'a GeometryCollection),
}

impl<'a> GeometryRef<'a> {
    /// Wire variant code (1..=7); rings share the LineString code
    pub fn variant_code(self) -> u32 {
        match self {
            GeometryRef::Point(_) => 1,
            GeometryRef::LineString(_) | GeometryRef::LinearRing(_) => 2,
            GeometryRef::Polygon(_) => 3,
            GeometryRef::MultiPoint(_) => 4,
            GeometryRef::MultiLineString(_) => 5,
            GeometryRef::MultiPolygon(_) => 6,
            GeometryRef::GeometryCollection(_) => 7,
        }
    }

    pub fn kind_name(self) -> &'static str {
        match self {
            GeometryRef::Point(_) => "Point",
            GeometryRef::LineString(_) => "LineString",
            GeometryRef::LinearRing(_) => "LinearRing",
            GeometryRef::Polygon(_) => "Polygon",
            GeometryRef::MultiPoint(_) => "MultiPoint",
            GeometryRef::MultiLineString(_) => "MultiLineString",
            GeometryRef::MultiPolygon(_) => "MultiPolygon",
            GeometryRef::GeometryCollection(_) => "GeometryCollection",
        }
    }

    pub fn srid(self) -> i32 {
        match self {
            GeometryRef::Point(g) => g.srid,
            GeometryRef::LineString(g) => g.srid,
            GeometryRef::LinearRing(g) => g.srid,
            GeometryRef::Polygon(g) => g.srid,
            GeometryRef::MultiPoint(g) => g.srid,
            GeometryRef::MultiLineString(g) => g.srid,
            GeometryRef::MultiPolygon(g) => g.srid,
            GeometryRef::GeometryCollection(g) => g.srid,
        }
    }

    pub fn is_empty(self) -> bool {
        match self {
            GeometryRef::Polygon(p) => p.shell.coords.is_empty(),
            _ => match self.coordinate_sequence() {
                Some(seq) => seq.is_empty(),
                None => (0..self.num_geometries())
                    .filter_map(|i| self.nth_geometry(i))
                    .all(GeometryRef::is_empty),
            },
        }
    }

    /// Backing coordinates of a point, line or ring
    pub fn coordinate_sequence(self) -> Option<&'a CoordinateSequence> {
        match self {
            GeometryRef::Point(g) => Some(&g.coords),
            GeometryRef::LineString(g) => Some(&g.coords),
            GeometryRef::LinearRing(g) => Some(&g.coords),
            _ => None,
        }
    }

    /// Member count; a non-collection counts as one geometry
    pub fn num_geometries(self) -> usize {
        match self {
            GeometryRef::MultiPoint(m) => m.points.len(),
            GeometryRef::MultiLineString(m) => m.line_strings.len(),
            GeometryRef::MultiPolygon(m) => m.polygons.len(),
            GeometryRef::GeometryCollection(c) => c.geometries.len(),
            _ => 1,
        }
    }

    /// The `n`th member; a non-collection is its own only member
    pub fn nth_geometry(self, n: usize) -> Option<GeometryRef<'a>> {
        match self {
            GeometryRef::MultiPoint(m) => m.points.get(n).map(GeometryRef::Point),
            GeometryRef::MultiLineString(m) => m.line_strings.get(n).map(GeometryRef::LineString),
            GeometryRef::MultiPolygon(m) => m.polygons.get(n).map(GeometryRef::Polygon),
            GeometryRef::GeometryCollection(c) => c.geometries.get(n).map(Geometry::view),
            _ if n == 0 => Some(self),
            _ => None,
        }
    }

    /// Total number of coordinates
    pub fn num_points(self) -> usize {
        match self {
            GeometryRef::Polygon(p) => p.rings().map(|r| r.coords.len()).sum(),
            _ => match self.coordinate_sequence() {
                Some(seq) => seq.len(),
                None => (0..self.num_geometries())
                    .filter_map(|i| self.nth_geometry(i))
                    .map(GeometryRef::num_points)
                    .sum(),
            },
        }
    }

    pub fn to_geometry(self) -> Geometry {
        match self {
            GeometryRef::Point(g) => Geometry::Point(g.clone()),
            GeometryRef::LineString(g) => Geometry::LineString(g.clone()),
            GeometryRef::LinearRing(g) => Geometry::LinearRing(g.clone()),
            GeometryRef::Polygon(g) => Geometry::Polygon(g.clone()),
            GeometryRef::MultiPoint(g) => Geometry::MultiPoint(g.clone()),
            GeometryRef::MultiLineString(g) => Geometry::MultiLineString(g.clone()),
            GeometryRef::MultiPolygon(g) => Geometry::MultiPolygon(g.clone()),
            GeometryRef::GeometryCollection(g) => Geometry::GeometryCollection(g.clone()),
        }
    }
}

impl Geometry {
    /// An empty collection with no SRID
    pub fn empty() -> Self {
        Geometry::GeometryCollection(GeometryCollection { geometries: Vec::new(), srid: 0 })
    }

    pub fn view(&self) -> GeometryRef<'_> {
        match self {
            Geometry::Point(g) => GeometryRef::Point(g),
            Geometry::LineString(g) => GeometryRef::LineString(g),
            Geometry::LinearRing(g) => GeometryRef::LinearRing(g),
            Geometry::Polygon(g) => GeometryRef::Polygon(g),
            Geometry::MultiPoint(g) => GeometryRef::MultiPoint(g),
            Geometry::MultiLineString(g) => GeometryRef::MultiLineString(g),
            Geometry::MultiPolygon(g) => GeometryRef::MultiPolygon(g),
            Geometry::GeometryCollection(g) => GeometryRef::GeometryCollection(g),
        }
    }

    pub fn variant_code(&self) -> u32 {
        self.view().variant_code()
    }

    pub fn kind_name(&self) -> &'static str {
        self.view().kind_name()
    }

    pub fn is_empty(&self) -> bool {
        self.view().is_empty()
    }

    pub fn srid(&self) -> i32 {
        self.view().srid()
    }

    /// Tag this geometry only; members keep their own SRIDs
    pub fn set_srid(&mut self, srid: i32) {
        match self {
            Geometry::Point(g) => g.srid = srid,
            Geometry::LineString(g) => g.srid = srid,
            Geometry::LinearRing(g) => g.srid = srid,
            Geometry::Polygon(g) => g.srid = srid,
            Geometry::MultiPoint(g) => g.srid = srid,
            Geometry::MultiLineString(g) => g.srid = srid,
            Geometry::MultiPolygon(g) => g.srid = srid,
            Geometry::GeometryCollection(g) => g.srid = srid,
        }
    }

    /// Tag this geometry, every member, and every polygon ring
    pub fn set_srid_recursive(&mut self, srid: i32) {
        self.set_srid(srid);
        match self {
            Geometry::Polygon(p) => p.set_srid_recursive(srid),
            Geometry::MultiPoint(m) => m.points.iter_mut().for_each(|p| p.srid = srid),
            Geometry::MultiLineString(m) => m.line_strings.iter_mut().for_each(|l| l.srid = srid),
            Geometry::MultiPolygon(m) => m.polygons.iter_mut().for_each(|p| p.set_srid_recursive(srid)),
            Geometry::GeometryCollection(c) => {
                c.geometries.iter_mut().for_each(|g| g.set_srid_recursive(srid))
            }
            _ => {}
        }
    }

    pub fn num_points(&self) -> usize {
        self.view().num_points()
    }

    pub fn num_geometries(&self) -> usize {
        self.view().num_geometries()
    }

    pub fn nth_geometry(&self, n: usize) -> Option<GeometryRef<'_>> {
        self.view().nth_geometry(n)
    }

    /// The `n`th coordinate of a point, line or ring
    pub fn nth_coordinate(&self, n: usize) -> Option<&Coordinate> {
        self.view().coordinate_sequence().and_then(|seq| seq.get(n))
    }
}

impl Polygon {
    fn set_srid_recursive(&mut self, srid: i32) {
        self.srid = srid;
        self.shell.srid = srid;
        self.holes.iter_mut().for_each(|h| h.srid = srid);
    }
}

impl From<Point> for Geometry {
    fn from(g: Point) -> Self {
        Geometry::Point(g)
    }
}

impl From<LineString> for Geometry {
    fn from(g: LineString) -> Self {
        Geometry::LineString(g)
    }
}

impl From<LinearRing> for Geometry {
    fn from(g: LinearRing) -> Self {
        Geometry::LinearRing(g)
    }
}

impl From<Polygon> for Geometry {
    fn from(g: Polygon) -> Self {
        Geometry::Polygon(g)
    }
}

impl From<MultiPoint> for Geometry {
    fn from(g: MultiPoint) -> Self {
        Geometry::MultiPoint(g)
    }
}

impl From<MultiLineString> for Geometry {
    fn from(g: MultiLineString) -> Self {
        Geometry::MultiLineString(g)
    }
}

impl From<MultiPolygon> for Geometry {
    fn from(g: MultiPolygon) -> Self {
        Geometry::MultiPolygon(g)
    }
}

impl From<GeometryCollection> for Geometry {
    fn from(g: GeometryCollection) -> Self {
        Geometry::GeometryCollection(g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> LinearRing {
        LinearRing {
            coords: CoordinateSequence::new(vec![
                Coordinate::xy(0.0, 0.0),
                Coordinate::xy(1.0, 0.0),
                Coordinate::xy(1.0, 1.0),
                Coordinate::xy(0.0, 0.0),
            ]),
            srid: 0,
        }
    }

    #[test]
    fn test_ordinate_reads_nan_for_missing_z_and_m() {
        let seq = CoordinateSequence::new(vec![Coordinate::xy(1.0, 2.0)]);
        assert_eq!(seq.dimension(), 2);
        assert_eq!(seq.ordinate(0, 0), 1.0);
        assert_eq!(seq.ordinate(0, 1), 2.0);
        assert!(seq.ordinate(0, 2).is_nan());
        assert!(seq.ordinate(0, 3).is_nan());
    }

    #[test]
    fn test_declared_dimension_follows_z() {
        let seq = CoordinateSequence::new(vec![Coordinate::xy(1.0, 2.0), Coordinate::xyz(1.0, 2.0, 3.0)]);
        assert_eq!(seq.dimension(), 3);
    }

    #[test]
    fn test_set_srid_recursive_reaches_rings() {
        let polygon = Polygon { shell: square(), holes: vec![square()], srid: 0 };
        let mut geom = Geometry::MultiPolygon(MultiPolygon { polygons: vec![polygon], srid: 0 });
        geom.set_srid_recursive(2154);

        let Geometry::MultiPolygon(mp) = &geom else { panic!("expected MultiPolygon") };
        assert_eq!(mp.srid, 2154);
        assert_eq!(mp.polygons[0].srid, 2154);
        assert_eq!(mp.polygons[0].shell.srid, 2154);
        assert_eq!(mp.polygons[0].holes[0].srid, 2154);
    }

    #[test]
    fn test_emptiness() {
        assert!(Geometry::empty().is_empty());
        let empty_points = Geometry::MultiPoint(MultiPoint {
            points: vec![Point { coords: CoordinateSequence::empty(), srid: 0 }],
            srid: 0,
        });
        assert!(empty_points.is_empty());
        assert!(!Geometry::LinearRing(square()).is_empty());
    }

    #[test]
    fn test_counts() {
        let polygon = Polygon { shell: square(), holes: vec![square()], srid: 0 };
        let geom = Geometry::Polygon(polygon);
        assert_eq!(geom.num_points(), 8);
        assert_eq!(geom.num_geometries(), 1);
        assert!(matches!(geom.nth_geometry(0), Some(GeometryRef::Polygon(_))));
        assert!(geom.nth_geometry(1).is_none());
        assert_eq!(geom.variant_code(), 3);
    }
}
