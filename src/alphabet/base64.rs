use super::{Alphabet, Error};

const TABLE: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Base64Alphabet {
    c62: char,
    c63: char,
}

impl Base64Alphabet {
    pub const fn standard() -> Self {
        Self { c62: '+', c63: '/' }
    }

    pub const fn url_safe() -> Self {
        Self { c62: '-', c63: '_' }
    }
}

impl Default for Base64Alphabet {
    fn default() -> Self {
        Self::standard()
    }
}

impl Alphabet for Base64Alphabet {
    fn size(&self) -> usize {
        64
    }

    fn symbol_for(&self, value: u8) -> char {
        match value {
            62 => self.c62,
            63 => self.c63,
            _ => TABLE[value as usize] as char,
        }
    }

    fn value_for(&self, symbol: char) -> Result<u8, Error> {
        match symbol {
            'A'..='Z' => Ok(symbol as u8 - b'A'),
            'a'..='z' => Ok(symbol as u8 - b'a' + 26),
            '0'..='9' => Ok(symbol as u8 - b'0' + 52),
            _ if symbol == self.c62 => Ok(62),
            _ if symbol == self.c63 => Ok(63),
            _ => Err(Error::InvalidSymbol { symbol }),
        }
    }
}
