use super::{Alphabet, Error};

const UPPER: &[u8; 16] = b"0123456789ABCDEF";
const LOWER: &[u8; 16] = b"0123456789abcdef";

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct HexadecimalAlphabet {
    table: &'static [u8; 16],
}

impl HexadecimalAlphabet {
    pub const fn upper() -> Self {
        Self { table: UPPER }
    }

    pub const fn lower() -> Self {
        Self { table: LOWER }
    }
}

impl Default for HexadecimalAlphabet {
    fn default() -> Self {
        Self::upper()
    }
}

impl Alphabet for HexadecimalAlphabet {
    fn size(&self) -> usize {
        16
    }

    fn symbol_for(&self, value: u8) -> char {
        self.table[value as usize] as char
    }

    fn value_for(&self, symbol: char) -> Result<u8, Error> {
        match symbol {
            '0'..='9' => Ok(symbol as u8 - b'0'),
            'a'..='f' => Ok(symbol as u8 - b'a' + 10),
            'A'..='F' => Ok(symbol as u8 - b'A' + 10),
            _ => Err(Error::InvalidSymbol { symbol }),
        }
    }
}
