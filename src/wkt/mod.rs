//! Well-Known-Text surface
//!
//! The textual geometry form accepted and produced by `GeometryValue`.
//!
//! # Submodules
//! - `reader` - WKT parser
//! - `writer` - WKT rendering (also backs `Display` for `Geometry`)
//! - `error` - Parse errors

mod reader;
mod writer;
mod error;

pub use reader::read_wkt;
pub use writer::write_wkt;
pub use error::WktError;
