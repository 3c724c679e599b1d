use crate::{alphabet::Base64Alphabet, codec::IGNORE_SPACES, Base2NCodec, Codec, Error};
use std::sync::OnceLock;

pub type Base64Codec = Base2NCodec<Base64Alphabet>;

fn build(alphabet: Base64Alphabet, padding_block_size: usize) -> Base64Codec {
    match Base2NCodec::with_options(alphabet, '=', padding_block_size, IGNORE_SPACES) {
        Ok(codec) => codec,
        Err(_) => panic!("Could not build codec"),
    }
}

pub fn standard() -> &'static Base64Codec {
    static CODEC: OnceLock<Base64Codec> = OnceLock::new();
    CODEC.get_or_init(|| build(Base64Alphabet::standard(), 4))
}

pub fn url_safe() -> &'static Base64Codec {
    static CODEC: OnceLock<Base64Codec> = OnceLock::new();
    CODEC.get_or_init(|| build(Base64Alphabet::url_safe(), 0))
}

pub fn encode(input: impl AsRef<[u8]>) -> String {
    standard().encode(input.as_ref())
}

pub fn decode(input: &str) -> Result<Vec<u8>, Error> {
    standard().decode(input)
}

pub fn decode_into(input: &str, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    let len = input.chars().count();
    standard().decode_into(input, 0, len, output.as_mut(), 0)
}
