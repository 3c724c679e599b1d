use regex::Regex;
use std::{
    error, fmt,
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    EndOfStream,
    InvalidInteger { line: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(error) => write!(f, "{}", error),
            Self::EndOfStream => write!(f, "Unexpected end of stream"),
            Self::InvalidInteger { line } => write!(f, "Invalid integer on line {}", line),
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::Io(error)
    }
}

/// Reads one integer per line, skipping blank lines and lines starting with `#`.
pub struct IntegerReader<R> {
    reader: R,
    line_number: usize,
    pattern: Regex,
    line: String,
}

impl IntegerReader<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        Ok(Self::new(BufReader::new(File::open(path)?)))
    }
}

impl<R: BufRead> IntegerReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
            pattern: Regex::new(r"^[+-]?[0-9]+$").unwrap(),
            line: String::new(),
        }
    }

    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn next_int(&mut self) -> Result<i64, Error> {
        loop {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Err(Error::EndOfStream);
            }
            self.line_number += 1;
            let line = self.line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if !self.pattern.is_match(line) {
                return Err(Error::InvalidInteger { line: self.line_number });
            }
            return line.parse().map_err(|_| Error::InvalidInteger { line: self.line_number });
        }
    }
}
