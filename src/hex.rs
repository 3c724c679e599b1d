use crate::{alphabet::HexadecimalAlphabet, Base2NCodec, Codec, Error};
use std::sync::OnceLock;

pub type HexCodec = Base2NCodec<HexadecimalAlphabet>;

fn build(alphabet: HexadecimalAlphabet) -> HexCodec {
    match Base2NCodec::new(alphabet) {
        Ok(codec) => codec,
        Err(_) => panic!("Could not build codec"),
    }
}

pub fn lower() -> &'static HexCodec {
    static CODEC: OnceLock<HexCodec> = OnceLock::new();
    CODEC.get_or_init(|| build(HexadecimalAlphabet::lower()))
}

pub fn upper() -> &'static HexCodec {
    static CODEC: OnceLock<HexCodec> = OnceLock::new();
    CODEC.get_or_init(|| build(HexadecimalAlphabet::upper()))
}

pub fn encode(input: impl AsRef<[u8]>) -> String {
    lower().encode(input.as_ref())
}

pub fn decode(input: &str) -> Result<Vec<u8>, Error> {
    lower().decode(input)
}

pub fn decode_into(input: &str, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    let len = input.chars().count();
    lower().decode_into(input, 0, len, output.as_mut(), 0)
}
