use super::{Alphabet, Error};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ArrayAlphabet {
    encode: Vec<char>,
    decode: [Option<u8>; 128],
}

impl ArrayAlphabet {
    pub fn new(symbols: impl IntoIterator<Item = char>) -> Result<Self, Error> {
        let encode: Vec<char> = symbols.into_iter().collect();
        if encode.len() > 256 {
            return Err(Error::TooManySymbols { size: encode.len() });
        }
        let mut decode: [Option<u8>; 128] = [None; 128];

        for (index, &symbol) in encode.iter().enumerate() {
            if let Some(first) = encode[..index].iter().position(|&other| other == symbol) {
                return Err(Error::DuplicateSymbol { symbol, first, second: index });
            }
            if symbol.is_ascii() {
                decode[symbol as usize] = Some(index as u8);
            }
        }

        Ok(Self { encode, decode })
    }

    pub fn symbols(&self) -> &[char] {
        &self.encode
    }
}

impl Alphabet for ArrayAlphabet {
    fn size(&self) -> usize {
        self.encode.len()
    }

    fn symbol_for(&self, value: u8) -> char {
        self.encode[value as usize]
    }

    fn value_for(&self, symbol: char) -> Result<u8, Error> {
        let value = if symbol.is_ascii() {
            self.decode[symbol as usize]
        } else {
            self.encode.iter().position(|&other| other == symbol).map(|index| index as u8)
        };
        value.ok_or(Error::InvalidSymbol { symbol })
    }
}
