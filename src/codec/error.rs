use crate::alphabet;
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall,
    OutOfRange { offset: usize, length: usize, available: usize },
    InvalidSymbol { symbol: char, index: usize },
    InvalidPadding { symbol: char, index: usize },
    MissingPadding { symbols: usize, block_size: usize },
    InvalidAlphabetSize { size: usize },
    IgnoredSymbolConflict { symbol: char },
    PaddingSymbolConflict { symbol: char },
    Alphabet(alphabet::Error),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferTooSmall => write!(f, "Output buffer too small"),
            Self::OutOfRange { offset, length, available } => {
                write!(f, "Range {}..{} out of bounds for length {}", offset, offset.saturating_add(*length), available)
            }
            Self::InvalidSymbol { symbol, index } => write!(f, "Invalid symbol {:?} at index {}", symbol, index),
            Self::InvalidPadding { symbol, index } => write!(f, "Invalid symbol {:?} in padding at index {}", symbol, index),
            Self::MissingPadding { symbols, block_size } => {
                write!(f, "Input of {} symbols is not padded to a multiple of {}", symbols, block_size)
            }
            Self::InvalidAlphabetSize { size } => write!(f, "Invalid alphabet size {}", size),
            Self::IgnoredSymbolConflict { symbol } => {
                write!(f, "Ignored symbol {:?} is also an alphabet or padding symbol", symbol)
            }
            Self::PaddingSymbolConflict { symbol } => write!(f, "Padding symbol {:?} is also an alphabet symbol", symbol),
            Self::Alphabet(error) => write!(f, "{}", error),
        }
    }
}

impl From<alphabet::Error> for Error {
    fn from(error: alphabet::Error) -> Self {
        Error::Alphabet(error)
    }
}
