use thiserror::Error;

/// WKT parse failure, positioned by byte offset
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WktError {
    #[error("unexpected '{found}' at offset {offset}, expected {expected}")]
    UnexpectedToken {
        offset: usize,
        found: String,
        expected: &'static str,
    },

    #[error("unexpected end of text, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("invalid number '{text}' at offset {offset}")]
    InvalidNumber { offset: usize, text: String },

    #[error("unknown geometry type '{name}' at offset {offset}")]
    UnknownKind { offset: usize, name: String },

    #[error("trailing text at offset {offset}")]
    TrailingInput { offset: usize },
}
