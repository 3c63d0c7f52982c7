//! Well-Known-Text reader
//!
//! Recursive descent over a small tokenizer. Keywords are case-insensitive;
//! `Z`, `M` and `ZM` tags may follow the kind either as a separate word or
//! glued to it (`POINTZ`). M values are accepted and dropped.

use crate::geometry::*;

use super::error::WktError;

#[derive(Debug, Clone, PartialEq)]
enum Token<'a> {
    Word(&'a str),
    Number(&'a str),
    LParen,
    RParen,
    Comma,
}

struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.input[self.pos..];
        self.pos += rest.len() - rest.trim_start().len();
    }

    /// Offset of the next token
    fn offset(&mut self) -> usize {
        self.skip_whitespace();
        self.pos
    }

    fn peek(&mut self) -> Option<Token<'a>> {
        let save = self.pos;
        let token = self.next();
        self.pos = save;
        token
    }

    fn next(&mut self) -> Option<Token<'a>> {
        self.skip_whitespace();
        let rest = &self.input[self.pos..];
        let first = rest.chars().next()?;
        let (token, len) = match first {
            '(' => (Token::LParen, 1),
            ')' => (Token::RParen, 1),
            ',' => (Token::Comma, 1),
            c if c.is_ascii_alphabetic() => {
                let len = rest
                    .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
                    .unwrap_or(rest.len());
                (Token::Word(&rest[..len]), len)
            }
            _ => {
                let len = rest
                    .find(|c: char| c.is_whitespace() || matches!(c, '(' | ')' | ','))
                    .unwrap_or(rest.len());
                (Token::Number(&rest[..len]), len)
            }
        };
        self.pos += len;
        Some(token)
    }
}

/// Ordinates present per coordinate, from the dimension tag
#[derive(Debug, Clone, Copy, PartialEq)]
enum Tag {
    /// No tag: 2, 3 (Z) or 4 (Z, M) ordinates
    Inferred,
    Z,
    M,
    ZM,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Kind {
    Point,
    LineString,
    LinearRing,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

impl Kind {
    fn from_keyword(word: &str) -> Option<Self> {
        Some(match word {
            "POINT" => Kind::Point,
            "LINESTRING" => Kind::LineString,
            "LINEARRING" => Kind::LinearRing,
            "POLYGON" => Kind::Polygon,
            "MULTIPOINT" => Kind::MultiPoint,
            "MULTILINESTRING" => Kind::MultiLineString,
            "MULTIPOLYGON" => Kind::MultiPolygon,
            "GEOMETRYCOLLECTION" => Kind::GeometryCollection,
            _ => return None,
        })
    }
}

/// Parse one geometry; trailing input is an error
pub fn read_wkt(input: &str) -> Result<Geometry, WktError> {
    let mut parser = Parser { tokens: Tokenizer::new(input) };
    let geom = parser.geometry()?;
    let offset = parser.tokens.offset();
    if parser.tokens.next().is_some() {
        return Err(WktError::TrailingInput { offset });
    }
    Ok(geom)
}

struct Parser<'a> {
    tokens: Tokenizer<'a>,
}

impl<'a> Parser<'a> {
    fn geometry(&mut self) -> Result<Geometry, WktError> {
        let (kind, glued) = self.kind()?;
        let tag = match glued {
            Some(tag) => tag,
            None => self.tag(),
        };
        if self.empty_keyword() {
            return Ok(empty_of(kind));
        }

        Ok(match kind {
            Kind::Point => {
                self.expect_lparen()?;
                let coord = self.coordinate(tag)?;
                self.expect_rparen()?;
                Geometry::Point(make_point(CoordinateSequence::new(vec![coord])))
            }
            Kind::LineString => Geometry::LineString(make_line_string(self.sequence(tag)?)),
            Kind::LinearRing => Geometry::LinearRing(make_linear_ring(self.sequence(tag)?)),
            Kind::Polygon => Geometry::Polygon(self.polygon_body(tag)?),
            Kind::MultiPoint => {
                let points = self.list(|p| p.multi_point_member(tag))?;
                Geometry::MultiPoint(make_multi_point(points))
            }
            Kind::MultiLineString => {
                let lines = self.list(|p| {
                    if p.empty_keyword() {
                        return Ok(make_line_string(CoordinateSequence::empty()));
                    }
                    Ok(make_line_string(p.sequence(tag)?))
                })?;
                Geometry::MultiLineString(make_multi_line_string(lines))
            }
            Kind::MultiPolygon => {
                let polygons = self.list(|p| {
                    if p.empty_keyword() {
                        return Ok(empty_polygon());
                    }
                    p.polygon_body(tag)
                })?;
                Geometry::MultiPolygon(make_multi_polygon(polygons))
            }
            Kind::GeometryCollection => {
                let members = self.list(|p| p.geometry())?;
                Geometry::GeometryCollection(make_geometry_collection(members))
            }
        })
    }

    /// Kind keyword, plus a dimension tag glued to it
    fn kind(&mut self) -> Result<(Kind, Option<Tag>), WktError> {
        let offset = self.tokens.offset();
        let word = match self.tokens.next() {
            Some(Token::Word(w)) => w.to_ascii_uppercase(),
            Some(other) => {
                return Err(WktError::UnexpectedToken {
                    offset,
                    found: describe(&other),
                    expected: "geometry type",
                })
            }
            None => return Err(WktError::UnexpectedEnd { expected: "geometry type" }),
        };
        if let Some(kind) = Kind::from_keyword(&word) {
            return Ok((kind, None));
        }
        for (suffix, tag) in [("ZM", Tag::ZM), ("Z", Tag::Z), ("M", Tag::M)] {
            if let Some(kind) = word.strip_suffix(suffix).and_then(Kind::from_keyword) {
                return Ok((kind, Some(tag)));
            }
        }
        Err(WktError::UnknownKind { offset, name: word })
    }

    fn tag(&mut self) -> Tag {
        let tag = match self.tokens.peek() {
            Some(Token::Word(w)) if w.eq_ignore_ascii_case("Z") => Tag::Z,
            Some(Token::Word(w)) if w.eq_ignore_ascii_case("M") => Tag::M,
            Some(Token::Word(w)) if w.eq_ignore_ascii_case("ZM") => Tag::ZM,
            _ => return Tag::Inferred,
        };
        self.tokens.next();
        tag
    }

    fn empty_keyword(&mut self) -> bool {
        match self.tokens.peek() {
            Some(Token::Word(w)) if w.eq_ignore_ascii_case("EMPTY") => {
                self.tokens.next();
                true
            }
            _ => false,
        }
    }

    fn polygon_body(&mut self, tag: Tag) -> Result<Polygon, WktError> {
        let mut rings = self
            .list(|p| Ok(make_linear_ring(p.sequence(tag)?)))?
            .into_iter();
        let shell = rings
            .next()
            .unwrap_or_else(|| make_linear_ring(CoordinateSequence::empty()));
        Ok(make_polygon(shell, rings.collect()))
    }

    /// `(x y)`, bare `x y`, or `EMPTY`
    fn multi_point_member(&mut self, tag: Tag) -> Result<Point, WktError> {
        if self.empty_keyword() {
            return Ok(make_point(CoordinateSequence::empty()));
        }
        let wrapped = self.tokens.peek() == Some(Token::LParen);
        if wrapped {
            self.tokens.next();
        }
        let coord = self.coordinate(tag)?;
        if wrapped {
            self.expect_rparen()?;
        }
        Ok(make_point(CoordinateSequence::new(vec![coord])))
    }

    fn sequence(&mut self, tag: Tag) -> Result<CoordinateSequence, WktError> {
        let coords = self.list(|p| p.coordinate(tag))?;
        Ok(CoordinateSequence::new(coords))
    }

    /// `( item, item, ... )`
    fn list<T>(&mut self, mut item: impl FnMut(&mut Self) -> Result<T, WktError>) -> Result<Vec<T>, WktError> {
        self.expect_lparen()?;
        let mut items = vec![item(self)?];
        loop {
            let offset = self.tokens.offset();
            match self.tokens.next() {
                Some(Token::Comma) => items.push(item(self)?),
                Some(Token::RParen) => return Ok(items),
                Some(other) => {
                    return Err(WktError::UnexpectedToken {
                        offset,
                        found: describe(&other),
                        expected: "',' or ')'",
                    })
                }
                None => return Err(WktError::UnexpectedEnd { expected: "')'" }),
            }
        }
    }

    fn coordinate(&mut self, tag: Tag) -> Result<Coordinate, WktError> {
        let x = self.number()?;
        let y = self.number()?;
        let z = match tag {
            Tag::Z | Tag::ZM => Some(self.number()?),
            Tag::M => {
                self.number()?;
                None
            }
            Tag::Inferred => {
                if self.at_number() {
                    let z = self.number()?;
                    if self.at_number() {
                        self.number()?;
                    }
                    Some(z)
                } else {
                    None
                }
            }
        };
        if tag == Tag::ZM {
            self.number()?;
        }
        Ok(Coordinate { x, y, z })
    }

    fn at_number(&mut self) -> bool {
        match self.tokens.peek() {
            Some(Token::Number(_)) => true,
            Some(Token::Word(w)) => w.eq_ignore_ascii_case("NaN"),
            _ => false,
        }
    }

    fn number(&mut self) -> Result<f64, WktError> {
        let offset = self.tokens.offset();
        match self.tokens.next() {
            Some(Token::Number(text)) | Some(Token::Word(text)) => text
                .parse::<f64>()
                .map_err(|_| WktError::InvalidNumber { offset, text: text.to_string() }),
            Some(other) => Err(WktError::UnexpectedToken {
                offset,
                found: describe(&other),
                expected: "number",
            }),
            None => Err(WktError::UnexpectedEnd { expected: "number" }),
        }
    }

    fn expect_lparen(&mut self) -> Result<(), WktError> {
        self.expect(Token::LParen, "'('")
    }

    fn expect_rparen(&mut self) -> Result<(), WktError> {
        self.expect(Token::RParen, "')'")
    }

    fn expect(&mut self, wanted: Token<'_>, expected: &'static str) -> Result<(), WktError> {
        let offset = self.tokens.offset();
        match self.tokens.next() {
            Some(t) if t == wanted => Ok(()),
            Some(other) => Err(WktError::UnexpectedToken { offset, found: describe(&other), expected }),
            None => Err(WktError::UnexpectedEnd { expected }),
        }
    }
}

fn describe(token: &Token<'_>) -> String {
    match token {
        Token::Word(w) | Token::Number(w) => w.to_string(),
        Token::LParen => "(".to_string(),
        Token::RParen => ")".to_string(),
        Token::Comma => ",".to_string(),
    }
}

fn empty_polygon() -> Polygon {
    make_polygon(make_linear_ring(CoordinateSequence::empty()), Vec::new())
}

fn empty_of(kind: Kind) -> Geometry {
    match kind {
        Kind::Point => Geometry::Point(make_point(CoordinateSequence::empty())),
        Kind::LineString => Geometry::LineString(make_line_string(CoordinateSequence::empty())),
        Kind::LinearRing => Geometry::LinearRing(make_linear_ring(CoordinateSequence::empty())),
        Kind::Polygon => Geometry::Polygon(empty_polygon()),
        Kind::MultiPoint => Geometry::MultiPoint(make_multi_point(Vec::new())),
        Kind::MultiLineString => Geometry::MultiLineString(make_multi_line_string(Vec::new())),
        Kind::MultiPolygon => Geometry::MultiPolygon(make_multi_polygon(Vec::new())),
        Kind::GeometryCollection => Geometry::GeometryCollection(make_geometry_collection(Vec::new())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_point() {
        let g = read_wkt("POINT (1.4 -3.7)").unwrap();
        assert_eq!(g.nth_coordinate(0), Some(&Coordinate::xy(1.4, -3.7)));

        let g = read_wkt("point z(1 2 3)").unwrap();
        assert_eq!(g.nth_coordinate(0), Some(&Coordinate::xyz(1.0, 2.0, 3.0)));

        let g = read_wkt("POINTM (1 2 9)").unwrap();
        assert_eq!(g.nth_coordinate(0), Some(&Coordinate::xy(1.0, 2.0)));

        let g = read_wkt("POINT (1 2 3 4)").unwrap();
        assert_eq!(g.nth_coordinate(0), Some(&Coordinate::xyz(1.0, 2.0, 3.0)));
    }

    #[test]
    fn test_read_polygon_with_hole() {
        let g = read_wkt("POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0), (2 2, 4 2, 4 4, 2 4, 2 2))").unwrap();
        let Geometry::Polygon(p) = g else { panic!("expected Polygon") };
        assert_eq!(p.shell.coords.len(), 5);
        assert_eq!(p.holes.len(), 1);
        assert_eq!(p.holes[0].coords.get(1), Some(&Coordinate::xy(4.0, 2.0)));
    }

    #[test]
    fn test_read_multipoint_forms() {
        let a = read_wkt("MULTIPOINT ((1 2), (3 4))").unwrap();
        let b = read_wkt("MULTIPOINT (1 2, 3 4)").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.num_geometries(), 2);
    }

    #[test]
    fn test_read_collection_and_empty() {
        let g = read_wkt("GEOMETRYCOLLECTION (POINT (1 2), LINESTRING EMPTY)").unwrap();
        assert_eq!(g.num_geometries(), 2);
        assert!(read_wkt("POLYGON EMPTY").unwrap().is_empty());
        assert!(read_wkt("MULTIPOLYGON (EMPTY)").unwrap().is_empty());
    }

    #[test]
    fn test_read_errors() {
        assert!(matches!(read_wkt("CIRCLE (1 2)"), Err(WktError::UnknownKind { offset: 0, .. })));
        assert!(matches!(read_wkt("POINT (1 2"), Err(WktError::UnexpectedEnd { .. })));
        assert!(matches!(read_wkt("POINT (1 x)"), Err(WktError::InvalidNumber { offset: 9, .. })));
        assert!(matches!(read_wkt("POINT (1 2) POINT"), Err(WktError::TrailingInput { offset: 12 })));
        assert!(matches!(read_wkt(""), Err(WktError::UnexpectedEnd { .. })));
    }
}
