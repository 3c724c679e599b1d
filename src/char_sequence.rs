pub trait CharSequence {
    fn len(&self) -> usize;

    /// Character at `index`. The caller guarantees `index < self.len()`.
    fn char_at(&self, index: usize) -> char;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub struct StrSequence<'a> {
    text: &'a str,
    chars: Option<Vec<char>>,
}

impl<'a> StrSequence<'a> {
    pub fn new(text: &'a str) -> Self {
        let chars = if text.is_ascii() { None } else { Some(text.chars().collect()) };
        Self { text, chars }
    }

    pub fn as_str(&self) -> &'a str {
        self.text
    }
}

impl CharSequence for StrSequence<'_> {
    fn len(&self) -> usize {
        match &self.chars {
            Some(chars) => chars.len(),
            None => self.text.len(),
        }
    }

    fn char_at(&self, index: usize) -> char {
        match &self.chars {
            Some(chars) => chars[index],
            None => self.text.as_bytes()[index] as char,
        }
    }
}

impl CharSequence for [char] {
    fn len(&self) -> usize {
        <[char]>::len(self)
    }

    fn char_at(&self, index: usize) -> char {
        self[index]
    }
}

impl CharSequence for Vec<char> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn char_at(&self, index: usize) -> char {
        self[index]
    }
}

pub struct ByteSequence<'a> {
    bytes: &'a [u8],
}

impl<'a> ByteSequence<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }
}

impl CharSequence for ByteSequence<'_> {
    fn len(&self) -> usize {
        self.bytes.len()
    }

    fn char_at(&self, index: usize) -> char {
        self.bytes[index] as char
    }
}

impl<S: CharSequence + ?Sized> CharSequence for &S {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn char_at(&self, index: usize) -> char {
        (**self).char_at(index)
    }
}
