use super::{Alphabet, Error};

const UPPER: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
const LOWER: &[u8; 32] = b"abcdefghijklmnopqrstuvwxyz234567";

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Base32Alphabet {
    table: &'static [u8; 32],
}

impl Base32Alphabet {
    pub const fn upper() -> Self {
        Self { table: UPPER }
    }

    pub const fn lower() -> Self {
        Self { table: LOWER }
    }
}

impl Default for Base32Alphabet {
    fn default() -> Self {
        Self::upper()
    }
}

impl Alphabet for Base32Alphabet {
    fn size(&self) -> usize {
        32
    }

    fn symbol_for(&self, value: u8) -> char {
        self.table[value as usize] as char
    }

    fn value_for(&self, symbol: char) -> Result<u8, Error> {
        match symbol {
            'a'..='z' => Ok(symbol as u8 - b'a'),
            'A'..='Z' => Ok(symbol as u8 - b'A'),
            '2'..='7' => Ok(symbol as u8 - b'2' + 26),
            _ => Err(Error::InvalidSymbol { symbol }),
        }
    }
}
