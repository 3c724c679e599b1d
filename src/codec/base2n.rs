use super::{check_range, Codec, Error};
use crate::{Alphabet, CharSequence, SymbolSink};

pub const IGNORE_SPACES: &[char] = &[' ', '\t', '\n', '\r'];

pub const IGNORE_NONE: &[char] = &[];

fn symbol_width(size: usize) -> Result<usize, Error> {
    match size {
        2 | 4 | 8 | 16 | 32 | 64 | 128 => Ok(size.trailing_zeros() as usize),
        _ => Err(Error::InvalidAlphabetSize { size }),
    }
}

/// Generic codec for alphabets of 2^n symbols, `n` between 1 and 7.
#[derive(Clone, Debug)]
pub struct Base2NCodec<A> {
    alphabet: A,
    bits: usize,
    clear_mask: u32,
    padding_symbol: char,
    padding_block_size: usize,
    ignored: Vec<char>,
}

impl<A: Alphabet> Base2NCodec<A> {
    pub fn new(alphabet: A) -> Result<Self, Error> {
        Self::with_options(alphabet, '\0', 0, IGNORE_NONE)
    }

    pub fn with_padding(alphabet: A, padding_symbol: char, padding_block_size: usize) -> Result<Self, Error> {
        Self::with_options(alphabet, padding_symbol, padding_block_size, IGNORE_NONE)
    }

    /// Fails when the alphabet size is not supported, or when an ignored symbol or the padding
    /// symbol collides with an alphabet symbol (ignored symbols may not be the padding symbol either).
    pub fn with_options(alphabet: A, padding_symbol: char, padding_block_size: usize, ignored: &[char]) -> Result<Self, Error> {
        let size = alphabet.size();
        let bits = symbol_width(size)?;
        let padding_symbol = if padding_block_size >= 2 { padding_symbol } else { '\0' };
        let codec = Self {
            alphabet,
            bits,
            clear_mask: (size - 1) as u32,
            padding_symbol,
            padding_block_size,
            ignored: ignored.to_vec(),
        };
        if codec.uses_padding() && codec.alphabet.value_for(padding_symbol).is_ok() {
            return Err(Error::PaddingSymbolConflict { symbol: padding_symbol });
        }
        for &symbol in &codec.ignored {
            if codec.is_padding(symbol) || codec.alphabet.value_for(symbol).is_ok() {
                return Err(Error::IgnoredSymbolConflict { symbol });
            }
        }
        Ok(codec)
    }

    pub fn alphabet(&self) -> &A {
        &self.alphabet
    }

    pub fn width(&self) -> usize {
        self.bits
    }

    pub fn uses_padding(&self) -> bool {
        self.padding_block_size >= 2
    }

    pub fn is_padding(&self, symbol: char) -> bool {
        self.uses_padding() && symbol == self.padding_symbol
    }

    pub fn is_ignored(&self, symbol: char) -> bool {
        self.ignored.contains(&symbol)
    }

    pub fn padding_size(&self, total_size: usize) -> usize {
        if self.uses_padding() {
            (self.padding_block_size - (total_size % self.padding_block_size)) % self.padding_block_size
        } else {
            0
        }
    }
}

impl<A: Alphabet> Codec for Base2NCodec<A> {
    fn decoded_size(&self, encoded_length: usize) -> usize {
        (encoded_length * self.bits) / 8
    }

    fn encoded_size(&self, decoded_length: usize) -> usize {
        let total_size = (decoded_length * 8 + self.bits - 1) / self.bits;
        total_size + self.padding_size(total_size)
    }

    fn decode_sequence_into<S: CharSequence + ?Sized>(
        &self,
        src: &S,
        offset: usize,
        length: usize,
        dst: &mut [u8],
        dst_offset: usize,
    ) -> Result<usize, Error> {
        check_range(offset, length, src.len())?;
        let end = offset + length;
        let mut accumulator: u32 = 0;
        let mut bits: usize = 0;
        let mut output_index = dst_offset;
        let mut symbols = 0;
        let mut padded = false;
        let mut index = offset;
        while index < end {
            let symbol = src.char_at(index);
            index += 1;
            if self.is_ignored(symbol) {
                continue;
            }
            symbols += 1;
            if self.is_padding(symbol) {
                padded = true;
                break;
            }
            let value = self
                .alphabet
                .value_for(symbol)
                .map_err(|_| Error::InvalidSymbol { symbol, index: index - 1 })?;
            accumulator = (accumulator << self.bits) | (value as u32);
            bits += self.bits;
            while bits >= 8 {
                bits -= 8;
                *dst.get_mut(output_index).ok_or(Error::BufferTooSmall)? = (accumulator >> bits) as u8;
                output_index += 1;
                accumulator &= (1 << bits) - 1;
            }
        }
        if self.uses_padding() {
            if padded {
                while index < end {
                    let symbol = src.char_at(index);
                    index += 1;
                    if self.is_ignored(symbol) {
                        continue;
                    }
                    symbols += 1;
                    if !self.is_padding(symbol) {
                        return Err(Error::InvalidPadding { symbol, index: index - 1 });
                    }
                }
            }
            if symbols % self.padding_block_size != 0 {
                return Err(Error::MissingPadding {
                    symbols,
                    block_size: self.padding_block_size,
                });
            }
        }
        // Leftover bits are the filler of the last symbol and are dropped unchecked.
        Ok(output_index - dst_offset)
    }

    fn encode_into<K: SymbolSink + ?Sized>(&self, src: &[u8], dst: &mut K) -> usize {
        let mut accumulator: u32 = 0;
        let mut bits: usize = 0;
        let mut count = 0;
        for &value in src {
            accumulator = (accumulator << 8) | (value as u32);
            bits += 8;
            while bits >= self.bits {
                bits -= self.bits;
                dst.push_symbol(self.alphabet.symbol_for(((accumulator >> bits) & self.clear_mask) as u8));
                count += 1;
                accumulator &= (1 << bits) - 1;
            }
        }
        if bits > 0 {
            dst.push_symbol(self.alphabet.symbol_for(((accumulator << (self.bits - bits)) & self.clear_mask) as u8));
            count += 1;
        }
        let padding = self.padding_size(count);
        for _ in 0..padding {
            dst.push_symbol(self.padding_symbol);
        }
        count + padding
    }
}

#[cfg(test)]
mod tests {
    use super::{Base2NCodec, Codec, Error, IGNORE_SPACES};
    use crate::{
        alphabet::{ArrayAlphabet, Base32Alphabet, Base64Alphabet, BinaryAlphabet, HexadecimalAlphabet},
        random::RandomSource,
        Alphabet,
    };

    // (plain, padded, unpadded)
    const SAMPLES: &[(&str, &str, &str)] = &[
        ("", "", ""),
        ("f", "Zg==", "Zg"),
        ("fo", "Zm8=", "Zm8"),
        ("foo", "Zm9v", "Zm9v"),
        ("foob", "Zm9vYg==", "Zm9vYg"),
        ("fooba", "Zm9vYmE=", "Zm9vYmE"),
        ("foobar", "Zm9vYmFy", "Zm9vYmFy"),
        (
            "This is just a test...\n",
            "VGhpcyBpcyBqdXN0IGEgdGVzdC4uLgo=",
            "VGhpcyBpcyBqdXN0IGEgdGVzdC4uLgo",
        ),
    ];

    fn unpadded() -> Base2NCodec<Base64Alphabet> {
        Base2NCodec::new(Base64Alphabet::standard()).unwrap()
    }

    fn padded() -> Base2NCodec<Base64Alphabet> {
        Base2NCodec::with_padding(Base64Alphabet::standard(), '=', 4).unwrap()
    }

    fn padded_ignoring_spaces() -> Base2NCodec<Base64Alphabet> {
        Base2NCodec::with_options(Base64Alphabet::standard(), '=', 4, IGNORE_SPACES).unwrap()
    }

    fn random_bytes(random: &mut RandomSource, len: usize) -> Vec<u8> {
        (0..len).map(|_| (random.next_int() >> 16) as u8).collect()
    }

    fn round_trip<A: Alphabet>(codec: &Base2NCodec<A>) {
        let mut random = RandomSource::new(codec.width() as i64);
        for len in 0..=1024 {
            let input = random_bytes(&mut random, len);
            let encoded = codec.encode(&input);
            assert_eq!(encoded.chars().count(), codec.encoded_size(len));
            assert_eq!(codec.decode(&encoded), Ok(input));
        }
    }

    #[test]
    fn construction() {
        assert!(!unpadded().uses_padding());
        assert!(padded().uses_padding());
        assert!(padded_ignoring_spaces().uses_padding());
        assert!(!Base2NCodec::with_padding(Base64Alphabet::standard(), '=', 1).unwrap().uses_padding());
        assert_eq!(unpadded().width(), 6);
        assert_eq!(padded().alphabet(), &Base64Alphabet::standard());
    }

    #[test]
    fn invalid_alphabet_size() {
        for size in [0, 1, 3, 10, 58, 126, 256] {
            let alphabet = ArrayAlphabet::new((0..size as u32).filter_map(|value| char::from_u32(0x100 + value))).unwrap();
            assert_eq!(Base2NCodec::new(alphabet).err(), Some(Error::InvalidAlphabetSize { size }));
        }
    }

    #[test]
    fn widths() {
        for bits in 1..=7 {
            let alphabet = ArrayAlphabet::new((0..1u32 << bits).filter_map(|value| char::from_u32(0x21 + value))).unwrap();
            assert_eq!(Base2NCodec::new(alphabet).unwrap().width(), bits);
        }
    }

    #[test]
    fn conflicts() {
        assert_eq!(
            Base2NCodec::with_padding(Base64Alphabet::standard(), 'A', 4).err(),
            Some(Error::PaddingSymbolConflict { symbol: 'A' })
        );
        assert_eq!(
            Base2NCodec::with_options(Base64Alphabet::standard(), '=', 4, &[' ', '=']).err(),
            Some(Error::IgnoredSymbolConflict { symbol: '=' })
        );
        assert_eq!(
            Base2NCodec::with_options(Base64Alphabet::standard(), '=', 0, &['+']).err(),
            Some(Error::IgnoredSymbolConflict { symbol: '+' })
        );
        // Without padding the padding symbol is unused and may be anything.
        assert!(Base2NCodec::with_options(Base64Alphabet::standard(), 'A', 0, &['=']).is_ok());
    }

    #[test]
    fn decoded_size() {
        for codec in [unpadded(), padded(), padded_ignoring_spaces()] {
            for size in 0..1024 {
                assert_eq!(codec.decoded_size(size), (size * 6) / 8);
            }
        }
    }

    #[test]
    fn encoded_size() {
        for size in 0..1024 {
            assert_eq!(unpadded().encoded_size(size), (size * 8 + 5) / 6);
        }
        for codec in [padded(), padded_ignoring_spaces()] {
            for size in 0..1024 {
                let expected = (size * 8 + 5) / 6;
                assert_eq!(codec.encoded_size(size), expected + (4 - expected % 4) % 4);
            }
        }
    }

    #[test]
    fn sizes_for_every_width() {
        for bits in 1..=7 {
            let alphabet = ArrayAlphabet::new((0..1u32 << bits).filter_map(|value| char::from_u32(0x21 + value))).unwrap();
            let codec = Base2NCodec::with_padding(alphabet, '\u{2022}', 8).unwrap();
            for size in 0..256 {
                assert_eq!(codec.decoded_size(size), (size * bits) / 8);
                let expected = (size * 8 + bits - 1) / bits;
                assert_eq!(codec.encoded_size(size), expected + (8 - expected % 8) % 8);
            }
        }
    }

    #[test]
    fn padding_size() {
        for size in 0..1024 {
            assert_eq!(unpadded().padding_size(size), 0);
            assert_eq!(padded().padding_size(size), (4 - size % 4) % 4);
            assert_eq!(padded_ignoring_spaces().padding_size(size), (4 - size % 4) % 4);
        }
    }

    #[test]
    fn is_padding() {
        for symbol in (0..256u32).filter_map(char::from_u32) {
            assert!(!unpadded().is_padding(symbol));
            assert_eq!(padded().is_padding(symbol), symbol == '=');
            assert_eq!(padded_ignoring_spaces().is_padding(symbol), symbol == '=');
        }
    }

    #[test]
    fn is_ignored() {
        for symbol in (0..256u32).filter_map(char::from_u32) {
            assert!(!unpadded().is_ignored(symbol));
            assert!(!padded().is_ignored(symbol));
            assert_eq!(padded_ignoring_spaces().is_ignored(symbol), IGNORE_SPACES.contains(&symbol));
        }
    }

    fn decode_samples(codec: &Base2NCodec<Base64Alphabet>, encoded: impl Fn(&(&'static str, &'static str, &'static str)) -> &'static str) {
        for sample in SAMPLES {
            let expected = sample.0.as_bytes();
            let input = encoded(sample);
            let len = input.len();

            let mut output = vec![0u8; expected.len()];
            assert_eq!(codec.decode_into(input, 0, len, &mut output, 0), Ok(expected.len()));
            assert_eq!(output, expected);

            let mut output = vec![0u8; expected.len() + 2];
            assert_eq!(codec.decode_into(input, 0, len, &mut output, 1), Ok(expected.len()));
            assert_eq!(&output[1..expected.len() + 1], expected);
            assert_eq!((output[0], output[expected.len() + 1]), (0, 0));

            let surrounded = format!(" {} ", input);
            let mut output = vec![0u8; expected.len()];
            assert_eq!(codec.decode_into(&surrounded, 1, len, &mut output, 0), Ok(expected.len()));
            assert_eq!(output, expected);

            let mut output = vec![0u8; expected.len() + 2];
            assert_eq!(codec.decode_into(&surrounded, 1, len, &mut output, 1), Ok(expected.len()));
            assert_eq!(&output[1..expected.len() + 1], expected);
        }
    }

    #[test]
    fn decode_unpadded() {
        decode_samples(&unpadded(), |sample| sample.2);
    }

    #[test]
    fn decode_padded() {
        decode_samples(&padded(), |sample| sample.1);
    }

    #[test]
    fn encode() {
        for sample in SAMPLES {
            assert_eq!(unpadded().encode(sample.0.as_bytes()), sample.2);
            assert_eq!(padded().encode(sample.0.as_bytes()), sample.1);

            let mut source = vec![0xffu8];
            source.extend_from_slice(sample.0.as_bytes());
            source.push(0xff);
            let mut output = String::new();
            assert_eq!(padded().encode_range_into(&source, 1, sample.0.len(), &mut output), Ok(sample.1.len()));
            assert_eq!(output, sample.1);
        }
    }

    #[test]
    fn decode_with_ignored() {
        let mut random = RandomSource::new(2015);
        for codec in [
            Base2NCodec::with_options(Base64Alphabet::standard(), '=', 0, IGNORE_SPACES).unwrap(),
            padded_ignoring_spaces(),
        ] {
            for len in 1..=1024 {
                let input = random_bytes(&mut random, len);
                let mut encoded: Vec<char> = codec.encode(&input).chars().collect();
                for &symbol in IGNORE_SPACES {
                    let position = random.next_int() as usize % encoded.len();
                    encoded.insert(position, symbol);
                }
                assert_eq!(codec.decode_chars(&encoded), Ok(input));
            }
        }
    }

    #[test]
    fn ignored_inside_padding() {
        let codec = padded_ignoring_spaces();
        assert_eq!(codec.decode("Zg=\n="), Ok(b"f".to_vec()));
        assert_eq!(codec.decode(" Z g = = \r\n"), Ok(b"f".to_vec()));
        assert_eq!(codec.decode("Zm9v\nYmFy\n"), Ok(b"foobar".to_vec()));
    }

    #[test]
    fn round_trips() {
        round_trip(&unpadded());
        round_trip(&padded());
        round_trip(&padded_ignoring_spaces());
        round_trip(&Base2NCodec::with_padding(Base64Alphabet::standard(), '?', 8).unwrap());
        round_trip(&Base2NCodec::with_padding(Base64Alphabet::url_safe(), '=', 4).unwrap());
        round_trip(&Base2NCodec::with_padding(Base32Alphabet::upper(), '=', 8).unwrap());
        round_trip(&Base2NCodec::new(Base32Alphabet::lower()).unwrap());
        round_trip(&Base2NCodec::new(HexadecimalAlphabet::lower()).unwrap());
        round_trip(&Base2NCodec::new(BinaryAlphabet::default()).unwrap());
    }

    #[test]
    fn round_trips_for_every_width() {
        for bits in 1..=7 {
            let alphabet = ArrayAlphabet::new((0..1u32 << bits).filter_map(|value| char::from_u32(0x3a0 + value))).unwrap();
            round_trip(&Base2NCodec::new(alphabet.clone()).unwrap());
            round_trip(&Base2NCodec::with_padding(alphabet.clone(), '=', 4).unwrap());
            round_trip(&Base2NCodec::with_options(alphabet, '=', 3, IGNORE_SPACES).unwrap());
        }
    }

    #[test]
    fn other_widths() {
        let octal = Base2NCodec::new(ArrayAlphabet::new("01234567".chars()).unwrap()).unwrap();
        assert_eq!(octal.encode(b"f"), "314");
        assert_eq!(octal.decode("314"), Ok(b"f".to_vec()));

        let binary = Base2NCodec::new(BinaryAlphabet::default()).unwrap();
        assert_eq!(binary.encode(&[0x66, 0x01]), "0110011000000001");
        assert_eq!(binary.decode("01100110"), Ok(vec![0x66]));

        let hex = Base2NCodec::new(HexadecimalAlphabet::upper()).unwrap();
        assert_eq!(hex.encode(b"foobar"), "666F6F626172");
        assert_eq!(hex.decode("666f6F626172"), Ok(b"foobar".to_vec()));

        let base32 = Base2NCodec::with_padding(Base32Alphabet::upper(), '=', 8).unwrap();
        assert_eq!(base32.encode(b"foobar"), "MZXW6YTBOI======");
        assert_eq!(base32.decode("mzxw6ytboi======"), Ok(b"foobar".to_vec()));
    }

    #[test]
    fn invalid_symbol() {
        assert_eq!(padded().decode("Zm9v!mFy"), Err(Error::InvalidSymbol { symbol: '!', index: 4 }));
        assert_eq!(unpadded().decode("Zg=="), Err(Error::InvalidSymbol { symbol: '=', index: 2 }));
        assert_eq!(padded().decode("Zm9v YmFy"), Err(Error::InvalidSymbol { symbol: ' ', index: 4 }));
        assert_eq!(padded().decode_range("xx!Zm9v", 2, 5), Err(Error::InvalidSymbol { symbol: '!', index: 2 }));
    }

    #[test]
    fn invalid_padding() {
        assert_eq!(padded().decode("Zg=A"), Err(Error::InvalidPadding { symbol: 'A', index: 3 }));
        assert_eq!(padded().decode("Zm8=Zm8="), Err(Error::InvalidPadding { symbol: 'Z', index: 4 }));
        assert_eq!(
            padded_ignoring_spaces().decode("Zg= A"),
            Err(Error::InvalidPadding { symbol: 'A', index: 4 })
        );
    }

    #[test]
    fn missing_padding() {
        assert_eq!(padded().decode("Zg"), Err(Error::MissingPadding { symbols: 2, block_size: 4 }));
        assert_eq!(padded().decode("Zg="), Err(Error::MissingPadding { symbols: 3, block_size: 4 }));
        assert_eq!(padded().decode("Zm9vY"), Err(Error::MissingPadding { symbols: 5, block_size: 4 }));
        assert_eq!(
            padded_ignoring_spaces().decode("Zg= "),
            Err(Error::MissingPadding { symbols: 3, block_size: 4 })
        );
    }

    #[test]
    fn buffer_too_small() {
        let mut output = [0u8; 2];
        assert_eq!(padded().decode_into("Zm9v", 0, 4, &mut output, 0), Err(Error::BufferTooSmall));
        let mut output = [0u8; 3];
        assert_eq!(padded().decode_into("Zm9v", 0, 4, &mut output, 1), Err(Error::BufferTooSmall));
        assert_eq!(padded().decode_into("", 0, 0, &mut output, 5), Ok(0));
    }

    #[test]
    fn out_of_range() {
        assert_eq!(
            padded().decode_range("Zm9v", 2, 4),
            Err(Error::OutOfRange {
                offset: 2,
                length: 4,
                available: 4
            })
        );
        assert_eq!(
            padded().decode_range("Zm9v", 0, usize::MAX),
            Err(Error::OutOfRange {
                offset: 0,
                length: usize::MAX,
                available: 4
            })
        );
        assert_eq!(
            padded().decode_chars_range(&['Z', 'g', '=', '='], 1, usize::MAX),
            Err(Error::OutOfRange {
                offset: 1,
                length: usize::MAX,
                available: 4
            })
        );
        assert_eq!(
            padded().encode_range(b"foo", 1, usize::MAX),
            Err(Error::OutOfRange {
                offset: 1,
                length: usize::MAX,
                available: 3
            })
        );
    }

    #[test]
    fn lenient_trailing_bits() {
        // "Zh" carries a non-zero filler bit after "f"
        assert_eq!(unpadded().decode("Zh"), Ok(b"f".to_vec()));
    }
}
