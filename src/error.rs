use thiserror::Error;

/// Errors from reading short card notation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty card token")]
    Empty,

    #[error("unknown face in card {0:?}")]
    Face(String),

    #[error("unknown suit in card {0:?}")]
    Suit(String),
}
