use ewkb_codec::codec::{decode, decode_hex, encode, Endianness, WKB_SRID_FLAG};
use ewkb_codec::geometry::{make_linear_ring, make_multi_polygon, make_polygon, Coordinate, LinearRing};
use ewkb_codec::{CodecError, Geometry, GeometryValue, Malformed};

fn ring(points: &[(f64, f64)]) -> LinearRing {
    make_linear_ring(points.iter().map(|&(x, y)| Coordinate::xy(x, y)).collect::<Vec<_>>().into())
}

fn multi_polygon_4326() -> Geometry {
    GeometryValue::parse(
        "SRID=4326;MULTIPOLYGON (((0 0, 10 0, 10 10, 0 0), (1 1, 2 1, 2 2, 1 1)), ((20 20, 30 20, 30 30, 20 20)))",
    )
    .expect("fixture EWKT should parse")
    .into_geometry()
    .expect("parsed value holds a geometry")
}

#[test]
fn test_srid_reaches_every_polygon_and_ring() {
    let bytes = encode(&multi_polygon_4326(), Endianness::Little).unwrap();
    let geom = decode(&bytes).unwrap();

    assert_eq!(geom.srid(), 4326);
    let Geometry::MultiPolygon(mp) = &geom else { panic!("expected MultiPolygon, got {}", geom.kind_name()) };
    assert_eq!(mp.polygons.len(), 2);
    for polygon in &mp.polygons {
        assert_eq!(polygon.srid, 4326);
        for ring in polygon.rings() {
            assert_eq!(ring.srid, 4326);
        }
    }
}

#[test]
fn test_top_level_srid_is_inherited_by_polygons_and_rings() {
    let shell = ring(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)]);
    let hole = ring(&[(2.0, 2.0), (4.0, 2.0), (4.0, 4.0), (2.0, 4.0), (2.0, 2.0)]);
    let other = ring(&[(20.0, 20.0), (30.0, 20.0), (30.0, 30.0), (20.0, 20.0)]);
    let mut geom = Geometry::MultiPolygon(make_multi_polygon(vec![
        make_polygon(shell, vec![hole]),
        make_polygon(other, vec![]),
    ]));
    geom.set_srid(4326);

    for endian in [Endianness::Big, Endianness::Little] {
        let bytes = encode(&geom, endian).expect("encode should succeed");
        let decoded = decode(&bytes).expect("decode should succeed");

        assert_eq!(decoded.srid(), 4326);
        let Geometry::MultiPolygon(mp) = &decoded else { panic!("expected MultiPolygon, got {}", decoded.kind_name()) };
        assert_eq!(mp.polygons.len(), 2);
        assert_eq!(mp.polygons[0].holes.len(), 1);
        for polygon in &mp.polygons {
            assert_eq!(polygon.srid, 4326);
            assert_eq!(polygon.shell.srid, 4326);
            for hole in &polygon.holes {
                assert_eq!(hole.srid, 4326);
            }
        }
        println!("✓ SRID inherited through {} MultiPolygon", endian);
    }
}

#[test]
fn test_members_without_srid_inherit_parent() {
    // SRID=4326 MultiPoint with one member that carries no SRID of its own
    let mut bytes = vec![1u8];
    bytes.extend_from_slice(&(4u32 | WKB_SRID_FLAG).to_le_bytes());
    bytes.extend_from_slice(&4326i32.to_le_bytes());
    bytes.extend_from_slice(&1i32.to_le_bytes());
    bytes.push(1);
    bytes.extend_from_slice(&1u32.to_le_bytes());
    bytes.extend_from_slice(&1.0f64.to_le_bytes());
    bytes.extend_from_slice(&2.0f64.to_le_bytes());

    let geom = decode(&bytes).unwrap();
    assert_eq!(geom.srid(), 4326);
    assert_eq!(geom.nth_geometry(0).map(|g| g.srid()), Some(4326));
}

#[test]
fn test_conflicting_member_srid_is_rejected() {
    // SRID=4326 MultiPoint whose member claims SRID=3857
    let mut bytes = vec![1u8];
    bytes.extend_from_slice(&(4u32 | WKB_SRID_FLAG).to_le_bytes());
    bytes.extend_from_slice(&4326i32.to_le_bytes());
    bytes.extend_from_slice(&1i32.to_le_bytes());
    bytes.push(1);
    bytes.extend_from_slice(&(1u32 | WKB_SRID_FLAG).to_le_bytes());
    bytes.extend_from_slice(&3857i32.to_le_bytes());
    bytes.extend_from_slice(&1.0f64.to_le_bytes());
    bytes.extend_from_slice(&2.0f64.to_le_bytes());

    let err = decode(&bytes).unwrap_err();
    assert_eq!(err, CodecError::from(Malformed::InconsistentSrid { parent: 4326, nested: 3857 }));
    assert!(err.is_malformed());
}

#[test]
fn test_member_srid_under_srid_less_parent_is_rejected() {
    // MultiPoint without SRID, member with SRID=4326
    let err = decode_hex("0104000000010000000101000020E6100000000000000000F03F0000000000000040").unwrap_err();
    assert_eq!(err, CodecError::from(Malformed::InconsistentSrid { parent: 0, nested: 4326 }));
}
