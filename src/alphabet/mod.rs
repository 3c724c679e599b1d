mod array;
mod base32;
mod base64;
mod binary;
mod hexadecimal;

pub use array::ArrayAlphabet;
pub use base32::Base32Alphabet;
pub use base64::Base64Alphabet;
pub use binary::BinaryAlphabet;
pub use hexadecimal::HexadecimalAlphabet;

use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    DuplicateSymbol { symbol: char, first: usize, second: usize },
    InvalidSymbol { symbol: char },
    TooManySymbols { size: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateSymbol { symbol, first, second } => {
                write!(f, "Duplicate symbol {:?} at indexes {} and {}", symbol, first, second)
            }
            Self::InvalidSymbol { symbol } => write!(f, "Invalid symbol {:?}", symbol),
            Self::TooManySymbols { size } => write!(f, "Too many symbols ({}), at most 256 are supported", size),
        }
    }
}

/// Bijective mapping between the values `0..size()` and a set of display symbols.
pub trait Alphabet: fmt::Debug {
    fn size(&self) -> usize;

    /// Symbol for `value`. The caller guarantees `value < self.size()`.
    fn symbol_for(&self, value: u8) -> char;

    fn value_for(&self, symbol: char) -> Result<u8, Error>;
}

impl<A: Alphabet + ?Sized> Alphabet for &A {
    fn size(&self) -> usize {
        (**self).size()
    }

    fn symbol_for(&self, value: u8) -> char {
        (**self).symbol_for(value)
    }

    fn value_for(&self, symbol: char) -> Result<u8, Error> {
        (**self).value_for(symbol)
    }
}

impl<A: Alphabet + ?Sized> Alphabet for Box<A> {
    fn size(&self) -> usize {
        (**self).size()
    }

    fn symbol_for(&self, value: u8) -> char {
        (**self).symbol_for(value)
    }

    fn value_for(&self, symbol: char) -> Result<u8, Error> {
        (**self).value_for(symbol)
    }
}

#[cfg(test)]
pub(crate) fn assert_bijection(alphabet: &impl Alphabet) {
    for value in 0..alphabet.size() {
        let symbol = alphabet.symbol_for(value as u8);
        assert_eq!(alphabet.value_for(symbol), Ok(value as u8));
    }
    // Every accepted symbol maps back to its canonical form, which differs at most by ASCII case.
    let mut canonical = 0;
    for symbol in (0..0x3000).filter_map(char::from_u32) {
        if let Ok(value) = alphabet.value_for(symbol) {
            let normalized = alphabet.symbol_for(value);
            assert!(normalized.eq_ignore_ascii_case(&symbol), "{:?} normalized to {:?}", symbol, normalized);
            if normalized == symbol {
                canonical += 1;
            }
        }
    }
    assert_eq!(canonical, alphabet.size());
}
