use crate::{alphabet::BinaryAlphabet, codec::IGNORE_SPACES, Base2NCodec, Codec, Error};
use std::sync::OnceLock;

pub type BinaryCodec = Base2NCodec<BinaryAlphabet>;

pub fn codec() -> &'static BinaryCodec {
    static CODEC: OnceLock<BinaryCodec> = OnceLock::new();
    CODEC.get_or_init(|| match Base2NCodec::with_options(BinaryAlphabet::default(), '\0', 0, IGNORE_SPACES) {
        Ok(codec) => codec,
        Err(_) => panic!("Could not build codec"),
    })
}

pub fn encode(input: impl AsRef<[u8]>) -> String {
    codec().encode(input.as_ref())
}

pub fn decode(input: &str) -> Result<Vec<u8>, Error> {
    codec().decode(input)
}
