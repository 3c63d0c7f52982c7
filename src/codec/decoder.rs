//! EWKB to geometry
//!
//! The first byte fixes the byte order for the whole input. SRID
//! inheritance is threaded down the recursion as an immutable context.

use tracing::trace;

use crate::geometry::*;

use super::*;

/// SRID seen by a nested geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SridContext {
    srid: i32,
    /// Set beneath a collection: members must match `srid` or omit theirs
    inherit: bool,
}

impl SridContext {
    const TOP: SridContext = SridContext { srid: 0, inherit: false };

    fn nested(srid: i32) -> Self {
        SridContext { srid, inherit: true }
    }
}

/// Decoded type word
#[derive(Debug, Clone, Copy)]
struct Header {
    variant: u32,
    has_z: bool,
    has_m: bool,
    has_srid: bool,
}

impl Header {
    fn parse(type_word: u32) -> Self {
        Header {
            variant: type_word & WKB_TYPE_MASK,
            has_z: type_word & WKB_Z_FLAG != 0,
            has_m: type_word & WKB_M_FLAG != 0,
            has_srid: type_word & WKB_SRID_FLAG != 0,
        }
    }

    fn dims(&self) -> usize {
        if self.has_z { 3 } else { 2 }
    }
}

/// Decode raw bytes
pub fn decode(bytes: &[u8]) -> Result<Geometry> {
    trace!(len = bytes.len(), "decoding geometry");
    decode_source(ByteSource::binary(bytes))
}

/// Decode hex digit pairs, either case
pub fn decode_hex(text: &str) -> Result<Geometry> {
    trace!(len = text.len() / 2, "decoding hex geometry");
    decode_source(ByteSource::hex(text)?)
}

pub fn decode_source(source: ByteSource<'_>) -> Result<Geometry> {
    let mut cursor = select_endianness(source)?;
    decode_one(&mut cursor, SridContext::TOP)
}

fn decode_one(cursor: &mut ByteCursor<'_>, ctx: SridContext) -> Result<Geometry> {
    let offset = cursor.position();
    if cursor.read_byte()? != cursor.endian().code() {
        return Err(Malformed::EndianInconsistency { offset }.into());
    }

    let header = Header::parse(cursor.read_u32()?);
    let srid = if header.has_srid {
        let srid = normalize_srid(cursor.read_i32()?);
        if ctx.inherit && srid != ctx.srid {
            return Err(Malformed::InconsistentSrid { parent: ctx.srid, nested: srid }.into());
        }
        srid
    } else if ctx.inherit {
        ctx.srid
    } else {
        0
    };

    let mut geom = match header.variant {
        WKB_POINT => Geometry::Point(make_point(read_point(cursor, &header)?)),
        WKB_LINESTRING => Geometry::LineString(make_line_string(read_sequence(cursor, &header)?)),
        WKB_POLYGON => Geometry::Polygon(read_polygon(cursor, &header, srid)?),
        WKB_MULTIPOINT => {
            Geometry::MultiPoint(make_multi_point(read_members(cursor, srid, "MultiPoint", as_point)?))
        }
        WKB_MULTILINESTRING => Geometry::MultiLineString(make_multi_line_string(read_members(
            cursor,
            srid,
            "MultiLineString",
            as_line_string,
        )?)),
        WKB_MULTIPOLYGON => {
            Geometry::MultiPolygon(make_multi_polygon(read_members(cursor, srid, "MultiPolygon", as_polygon)?))
        }
        WKB_GEOMETRYCOLLECTION => Geometry::GeometryCollection(make_geometry_collection(read_members(
            cursor,
            srid,
            "GeometryCollection",
            Ok,
        )?)),
        other => return Err(Malformed::UnknownGeometryType(other).into()),
    };

    geom.set_srid(srid);
    Ok(geom)
}

/// Negative SRIDs mean "unknown"
fn normalize_srid(srid: i32) -> i32 {
    srid.max(0)
}

fn read_count(cursor: &mut ByteCursor<'_>) -> Result<usize> {
    let count = cursor.read_i32()?;
    usize::try_from(count).map_err(|_| Malformed::NegativeCount(count).into())
}

fn read_coordinate(cursor: &mut ByteCursor<'_>, header: &Header) -> Result<Coordinate> {
    let x = cursor.read_f64()?;
    let y = cursor.read_f64()?;
    let z = if header.has_z { Some(cursor.read_f64()?) } else { None };
    if header.has_m {
        cursor.read_f64()?;
    }
    Ok(Coordinate { x, y, z })
}

fn read_point(cursor: &mut ByteCursor<'_>, header: &Header) -> Result<CoordinateSequence> {
    let coord = read_coordinate(cursor, header)?;
    Ok(CoordinateSequence::with_dimension(vec![coord], header.dims()))
}

fn read_sequence(cursor: &mut ByteCursor<'_>, header: &Header) -> Result<CoordinateSequence> {
    let count = read_count(cursor)?;
    let mut coords = Vec::with_capacity(count.min(cursor.remaining()));
    for _ in 0..count {
        coords.push(read_coordinate(cursor, header)?);
    }
    Ok(CoordinateSequence::with_dimension(coords, header.dims()))
}

fn read_ring(cursor: &mut ByteCursor<'_>, header: &Header, srid: i32) -> Result<LinearRing> {
    let mut ring = make_linear_ring(read_sequence(cursor, header)?);
    ring.srid = srid;
    Ok(ring)
}

fn read_polygon(cursor: &mut ByteCursor<'_>, header: &Header, srid: i32) -> Result<Polygon> {
    let hole_count = read_count(cursor)?
        .checked_sub(1)
        .ok_or(Malformed::MissingShell)?;
    let shell = read_ring(cursor, header, srid)?;
    let mut holes = Vec::with_capacity(hole_count.min(cursor.remaining()));
    for _ in 0..hole_count {
        holes.push(read_ring(cursor, header, srid)?);
    }
    Ok(make_polygon(shell, holes))
}

fn as_point(g: Geometry) -> std::result::Result<Point, &'static str> {
    match g {
        Geometry::Point(p) => Ok(p),
        other => Err(other.kind_name()),
    }
}

fn as_line_string(g: Geometry) -> std::result::Result<LineString, &'static str> {
    match g {
        Geometry::LineString(l) => Ok(l),
        other => Err(other.kind_name()),
    }
}

fn as_polygon(g: Geometry) -> std::result::Result<Polygon, &'static str> {
    match g {
        Geometry::Polygon(p) => Ok(p),
        other => Err(other.kind_name()),
    }
}

fn read_members<T>(
    cursor: &mut ByteCursor<'_>,
    srid: i32,
    container: &'static str,
    pick: impl Fn(Geometry) -> std::result::Result<T, &'static str>,
) -> Result<Vec<T>> {
    let count = read_count(cursor)?;
    let mut members = Vec::with_capacity(count.min(cursor.remaining()));
    for _ in 0..count {
        let member = decode_one(cursor, SridContext::nested(srid))?;
        let member = pick(member).map_err(|found| Malformed::UnexpectedMember { container, found })?;
        members.push(member);
    }
    Ok(members)
}
