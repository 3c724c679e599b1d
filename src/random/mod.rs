mod alphabet_generator;
mod integer_reader;
mod random_source;

pub use alphabet_generator::{generate_random, shuffle, Error, QRCODE_ALPHANUMERIC, QRCODE_ALPHANUMERIC_NO_SPACE};
pub use integer_reader::{Error as IntegerReaderError, IntegerReader};
pub use random_source::RandomSource;
