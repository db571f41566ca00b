use crate::escape::EscapeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Unterminated string literal at byte {0}")]
    UnterminatedLiteral(usize),

    #[error("Invalid string literal: {0}")]
    Escape(#[from] EscapeError),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },

    #[error("Unexpected end of document")]
    UnexpectedEnd,

    #[error("Table `{0}` not found")]
    MissingTable(String),

    #[error("Table ends without a guard entry")]
    MissingGuard,

    #[error("Entry {index} has no `{field}` field")]
    MissingField { index: usize, field: String },

    #[error("Array declared twice: {0}")]
    DuplicateSymbol(String),

    #[error("Reference to undeclared array: {0}")]
    UnknownSymbol(String),

    #[error("Array element out of byte range: {0}")]
    ByteOutOfRange(u64),

    #[error("Entry {name}: declared len {declared}, payload has {actual} bytes")]
    LengthMismatch {
        name: String,
        declared: u64,
        actual: usize,
    },

    #[error("Entry {0} has a name that is not valid UTF-8")]
    InvalidName(usize),
}
