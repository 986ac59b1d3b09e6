use thiserror::Error;

/// Raw textual input could not be read as a number
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Input is empty")]
    Empty,
    #[error("Not a number: '{0}'")]
    NotANumber(String),
}
