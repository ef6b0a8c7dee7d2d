use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid rank symbol: {symbol}")]
    InvalidRank { symbol: char },
    #[error("Invalid suit symbol: {symbol}")]
    InvalidSuit { symbol: char },
    #[error("Invalid card token: {token}")]
    InvalidToken { token: String },
    #[error("Expected {expected} cards, got {found}")]
    WrongCardCount { expected: usize, found: usize },
}
