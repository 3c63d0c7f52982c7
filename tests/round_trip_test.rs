use ewkb_codec::codec::{decode, decode_hex, encode, encode_hex, estimate_size, Endianness};
use ewkb_codec::wkt::read_wkt;
use ewkb_codec::Geometry;
use rstest::rstest;

fn wkt(text: &str) -> Geometry {
    read_wkt(text).expect("fixture WKT should parse")
}

#[rstest]
#[case::point("POINT (1.4 -3.7)")]
#[case::point_z("POINT Z (1 2 3)")]
#[case::line("LINESTRING (0 0, 1 0, 1 1)")]
#[case::polygon_with_hole("POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0), (2 2, 4 2, 4 4, 2 4, 2 2))")]
#[case::multi_point("MULTIPOINT ((1 2), (3 4))")]
#[case::multi_line("MULTILINESTRING ((0 0, 1 1), (2 2, 3 3, 4 4))")]
#[case::multi_polygon("MULTIPOLYGON (((0 0, 1 0, 1 1, 0 0)), ((5 5, 6 5, 6 6, 5 5)))")]
#[case::collection("GEOMETRYCOLLECTION (POINT (1 2), LINESTRING (0 0, 1 1))")]
fn test_round_trip(#[case] text: &str, #[values(Endianness::Big, Endianness::Little)] endian: Endianness) {
    let geom = wkt(text);

    let bytes = encode(&geom, endian).expect("encode should succeed");
    assert_eq!(bytes.len(), estimate_size(&geom), "estimate must match output for {}", text);
    assert_eq!(bytes[0], endian.code());
    assert_eq!(decode(&bytes).expect("decode should succeed"), geom);

    let hex = encode_hex(&geom, endian).expect("hex encode should succeed");
    assert_eq!(hex.len(), bytes.len() * 2);
    assert_eq!(decode_hex(&hex).expect("hex decode should succeed"), geom);

    println!("✓ {} ({}): {}", text, endian, hex);
}

#[test]
fn test_decoded_value_independent_of_byte_order() {
    let geom = wkt("POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0), (2 2, 4 2, 4 4, 2 4, 2 2))");
    let big = encode(&geom, Endianness::Big).unwrap();
    let little = encode(&geom, Endianness::Little).unwrap();
    assert_ne!(big, little);
    assert_eq!(decode(&big).unwrap(), decode(&little).unwrap());
}

#[test]
fn test_hex_matches_binary() {
    let geom = wkt("GEOMETRYCOLLECTION (POINT (1 2), LINESTRING (0 0, 1 1))");
    let bytes = encode(&geom, Endianness::Little).unwrap();
    let hex = encode_hex(&geom, Endianness::Little).unwrap();
    assert_eq!(hex, hex::encode_upper(&bytes));
    assert_eq!(decode_hex(&hex.to_lowercase()).unwrap(), decode(&bytes).unwrap());
}

#[test]
fn test_empty_geometries_come_back_as_empty_collection() {
    for text in ["POINT EMPTY", "LINESTRING EMPTY", "POLYGON EMPTY", "GEOMETRYCOLLECTION EMPTY"] {
        let geom = wkt(text);
        let bytes = encode(&geom, Endianness::Little).unwrap();
        assert_eq!(bytes, vec![1, 7, 0, 0, 0, 0, 0, 0, 0]);
        let back = decode(&bytes).unwrap();
        assert!(back.is_empty());
        assert_eq!(back.kind_name(), "GeometryCollection");
    }
}
