use crate::{alphabet::Base32Alphabet, codec::IGNORE_SPACES, Base2NCodec, Codec, Error};
use std::sync::OnceLock;

pub type Base32Codec = Base2NCodec<Base32Alphabet>;

fn build(alphabet: Base32Alphabet) -> Base32Codec {
    match Base2NCodec::with_options(alphabet, '=', 8, IGNORE_SPACES) {
        Ok(codec) => codec,
        Err(_) => panic!("Could not build codec"),
    }
}

pub fn upper() -> &'static Base32Codec {
    static CODEC: OnceLock<Base32Codec> = OnceLock::new();
    CODEC.get_or_init(|| build(Base32Alphabet::upper()))
}

pub fn lower() -> &'static Base32Codec {
    static CODEC: OnceLock<Base32Codec> = OnceLock::new();
    CODEC.get_or_init(|| build(Base32Alphabet::lower()))
}

pub fn encode(input: impl AsRef<[u8]>) -> String {
    upper().encode(input.as_ref())
}

pub fn decode(input: &str) -> Result<Vec<u8>, Error> {
    upper().decode(input)
}

#[cfg(test)]
mod tests {
    use crate::{Codec, Error};

    const SAMPLES: &[(&str, &str)] = &[
        ("", ""),
        ("f", "MY======"),
        ("fo", "MZXQ===="),
        ("foo", "MZXW6==="),
        ("foob", "MZXW6YQ="),
        ("fooba", "MZXW6YTB"),
        ("foobar", "MZXW6YTBOI======"),
    ];

    #[test]
    fn encode() {
        for (plain, encoded) in SAMPLES {
            assert_eq!(super::encode(plain), *encoded);
            assert_eq!(super::lower().encode(plain.as_bytes()), encoded.to_lowercase());
        }
    }

    #[test]
    fn decode() {
        for (plain, encoded) in SAMPLES {
            assert_eq!(super::decode(encoded), Ok(plain.as_bytes().to_vec()));
            assert_eq!(super::decode(&encoded.to_lowercase()), Ok(plain.as_bytes().to_vec()));
        }
        assert_eq!(super::decode("MY====="), Err(Error::MissingPadding { symbols: 7, block_size: 8 }));
        assert_eq!(super::decode("MY1====="), Err(Error::InvalidSymbol { symbol: '1', index: 2 }));
    }
}
