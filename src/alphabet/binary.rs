use super::{Alphabet, Error};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct BinaryAlphabet {
    zero: char,
    one: char,
}

impl BinaryAlphabet {
    pub const fn new(zero: char, one: char) -> Result<Self, Error> {
        if zero == one {
            return Err(Error::DuplicateSymbol {
                symbol: zero,
                first: 0,
                second: 1,
            });
        }
        Ok(Self { zero, one })
    }

    pub const fn zero(&self) -> char {
        self.zero
    }

    pub const fn one(&self) -> char {
        self.one
    }
}

impl Default for BinaryAlphabet {
    fn default() -> Self {
        Self { zero: '0', one: '1' }
    }
}

impl Alphabet for BinaryAlphabet {
    fn size(&self) -> usize {
        2
    }

    fn symbol_for(&self, value: u8) -> char {
        if value == 0 {
            self.zero
        } else {
            self.one
        }
    }

    fn value_for(&self, symbol: char) -> Result<u8, Error> {
        if symbol == self.zero {
            Ok(0)
        } else if symbol == self.one {
            Ok(1)
        } else {
            Err(Error::InvalidSymbol { symbol })
        }
    }
}
