pub mod alphabet;
pub mod base32;
pub mod base64;
pub mod binary;
pub mod char_sequence;
pub mod codec;
pub mod hex;
pub mod random;
pub mod symbol_sink;

pub use self::{
    alphabet::{Alphabet, ArrayAlphabet, Base32Alphabet, Base64Alphabet, BinaryAlphabet, HexadecimalAlphabet},
    char_sequence::{ByteSequence, CharSequence, StrSequence},
    codec::{Base2NCodec, Codec, Error},
    symbol_sink::SymbolSink,
};
