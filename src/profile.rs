use crate::Error;
use bincodec::{
    codec::IGNORE_SPACES,
    random::{generate_random, QRCODE_ALPHANUMERIC_NO_SPACE},
    Alphabet, ArrayAlphabet, Base2NCodec, Base32Alphabet, Base64Alphabet, BinaryAlphabet, HexadecimalAlphabet,
};
use serde::Deserialize;

pub type DynamicCodec = Base2NCodec<Box<dyn Alphabet>>;

fn default_zero() -> char {
    '0'
}

fn default_one() -> char {
    '1'
}

fn default_rounds() -> usize {
    4
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "alphabet", rename_all = "snake_case")]
pub enum AlphabetProfile {
    Base64 {
        #[serde(default)]
        url_safe: bool,
    },
    Base32 {
        #[serde(default)]
        lower_case: bool,
    },
    Hexadecimal {
        #[serde(default)]
        lower_case: bool,
    },
    Binary {
        #[serde(default = "default_zero")]
        zero: char,
        #[serde(default = "default_one")]
        one: char,
    },
    Array {
        symbols: String,
    },
    Random {
        seed: i64,
        #[serde(default = "default_rounds")]
        rounds: usize,
        #[serde(default)]
        candidates: Option<String>,
        size: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PaddingProfile {
    pub symbol: char,
    pub block_size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CodecProfile {
    #[serde(flatten)]
    pub alphabet: AlphabetProfile,
    #[serde(default)]
    pub padding: Option<PaddingProfile>,
    #[serde(default)]
    pub ignored: String,
}

impl CodecProfile {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn preset(name: &str) -> Result<Self, Error> {
        let (alphabet, padding) = match name {
            "base64" => (AlphabetProfile::Base64 { url_safe: false }, Some(('=', 4))),
            "base64url" => (AlphabetProfile::Base64 { url_safe: true }, None),
            "base32" => (AlphabetProfile::Base32 { lower_case: false }, Some(('=', 8))),
            "base32-lower" => (AlphabetProfile::Base32 { lower_case: true }, Some(('=', 8))),
            "hex" => (AlphabetProfile::Hexadecimal { lower_case: true }, None),
            "hex-upper" => (AlphabetProfile::Hexadecimal { lower_case: false }, None),
            "binary" => (AlphabetProfile::Binary { zero: '0', one: '1' }, None),
            _ => return Err(Error::new(format!("Unknown codec {}", name))),
        };
        Ok(Self {
            alphabet,
            padding: padding.map(|(symbol, block_size)| PaddingProfile { symbol, block_size }),
            ignored: IGNORE_SPACES.iter().collect(),
        })
    }

    fn build_alphabet(&self) -> Result<Box<dyn Alphabet>, Error> {
        let alphabet: Box<dyn Alphabet> = match &self.alphabet {
            AlphabetProfile::Base64 { url_safe: false } => Box::new(Base64Alphabet::standard()),
            AlphabetProfile::Base64 { url_safe: true } => Box::new(Base64Alphabet::url_safe()),
            AlphabetProfile::Base32 { lower_case: false } => Box::new(Base32Alphabet::upper()),
            AlphabetProfile::Base32 { lower_case: true } => Box::new(Base32Alphabet::lower()),
            AlphabetProfile::Hexadecimal { lower_case: false } => Box::new(HexadecimalAlphabet::upper()),
            AlphabetProfile::Hexadecimal { lower_case: true } => Box::new(HexadecimalAlphabet::lower()),
            AlphabetProfile::Binary { zero, one } => Box::new(BinaryAlphabet::new(*zero, *one)?),
            AlphabetProfile::Array { symbols } => Box::new(ArrayAlphabet::new(symbols.chars())?),
            AlphabetProfile::Random {
                seed,
                rounds,
                candidates,
                size,
            } => {
                let candidates: Vec<char> = match candidates {
                    Some(candidates) => candidates.chars().collect(),
                    None => QRCODE_ALPHANUMERIC_NO_SPACE.to_vec(),
                };
                Box::new(ArrayAlphabet::new(generate_random(*seed, *rounds, &candidates, *size)?)?)
            }
        };
        Ok(alphabet)
    }

    pub fn build(&self) -> Result<DynamicCodec, Error> {
        let alphabet = self.build_alphabet()?;
        let (symbol, block_size) = match &self.padding {
            Some(padding) => (padding.symbol, padding.block_size),
            None => ('\0', 0),
        };
        let ignored: Vec<char> = self.ignored.chars().collect();
        Ok(Base2NCodec::with_options(alphabet, symbol, block_size, &ignored)?)
    }
}
