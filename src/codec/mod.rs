mod base2n;
mod error;

pub use base2n::{Base2NCodec, IGNORE_NONE, IGNORE_SPACES};
pub use error::Error;

use crate::{char_sequence::StrSequence, CharSequence, SymbolSink};

fn check_range(offset: usize, length: usize, available: usize) -> Result<(), Error> {
    match offset.checked_add(length) {
        Some(end) if end <= available => Ok(()),
        _ => Err(Error::OutOfRange { offset, length, available }),
    }
}

/// Binary-to-text codec. Text offsets and lengths count characters, not bytes.
pub trait Codec {
    fn decoded_size(&self, encoded_length: usize) -> usize;

    fn encoded_size(&self, decoded_length: usize) -> usize;

    /// Decodes `length` characters of `src` starting at `offset` into `dst` starting at
    /// `dst_offset`, and returns the number of bytes written.
    /// `dst` is never grown; `Error::BufferTooSmall` is returned when it cannot hold the output.
    fn decode_sequence_into<S: CharSequence + ?Sized>(
        &self,
        src: &S,
        offset: usize,
        length: usize,
        dst: &mut [u8],
        dst_offset: usize,
    ) -> Result<usize, Error>;

    fn encode_into<K: SymbolSink + ?Sized>(&self, src: &[u8], dst: &mut K) -> usize;

    fn decode_sequence_range<S: CharSequence + ?Sized>(&self, src: &S, offset: usize, length: usize) -> Result<Vec<u8>, Error> {
        check_range(offset, length, src.len())?;
        let mut output = vec![0u8; self.decoded_size(length)];
        let len = self.decode_sequence_into(src, offset, length, &mut output, 0)?;
        output.truncate(len);
        Ok(output)
    }

    fn decode_sequence<S: CharSequence + ?Sized>(&self, src: &S) -> Result<Vec<u8>, Error> {
        self.decode_sequence_range(src, 0, src.len())
    }

    fn decode(&self, src: &str) -> Result<Vec<u8>, Error> {
        self.decode_sequence(&StrSequence::new(src))
    }

    fn decode_range(&self, src: &str, offset: usize, length: usize) -> Result<Vec<u8>, Error> {
        self.decode_sequence_range(&StrSequence::new(src), offset, length)
    }

    fn decode_into(&self, src: &str, offset: usize, length: usize, dst: &mut [u8], dst_offset: usize) -> Result<usize, Error> {
        self.decode_sequence_into(&StrSequence::new(src), offset, length, dst, dst_offset)
    }

    fn decode_chars(&self, src: &[char]) -> Result<Vec<u8>, Error> {
        self.decode_sequence(src)
    }

    fn decode_chars_range(&self, src: &[char], offset: usize, length: usize) -> Result<Vec<u8>, Error> {
        self.decode_sequence_range(src, offset, length)
    }

    fn decode_chars_into(&self, src: &[char], offset: usize, length: usize, dst: &mut [u8], dst_offset: usize) -> Result<usize, Error> {
        self.decode_sequence_into(src, offset, length, dst, dst_offset)
    }

    fn encode_range_into<K: SymbolSink + ?Sized>(&self, src: &[u8], offset: usize, length: usize, dst: &mut K) -> Result<usize, Error> {
        check_range(offset, length, src.len())?;
        Ok(self.encode_into(&src[offset..offset + length], dst))
    }

    fn encode(&self, src: &[u8]) -> String {
        let mut output = String::with_capacity(self.encoded_size(src.len()));
        self.encode_into(src, &mut output);
        output
    }

    fn encode_range(&self, src: &[u8], offset: usize, length: usize) -> Result<String, Error> {
        check_range(offset, length, src.len())?;
        let mut output = String::with_capacity(self.encoded_size(length));
        self.encode_range_into(src, offset, length, &mut output)?;
        Ok(output)
    }
}
