use std::{error, fmt, io};

#[derive(Debug)]
pub struct Error {
    message: String,
}

impl Error {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", &self.message)
    }
}

impl error::Error for Error {}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Self::new(error.to_string())
    }
}

impl From<bincodec::Error> for Error {
    fn from(error: bincodec::Error) -> Self {
        Self::new(error.to_string())
    }
}

impl From<bincodec::alphabet::Error> for Error {
    fn from(error: bincodec::alphabet::Error) -> Self {
        Self::new(error.to_string())
    }
}

impl From<bincodec::random::Error> for Error {
    fn from(error: bincodec::random::Error) -> Self {
        Self::new(error.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::new(format!("Invalid codec profile: {}", error))
    }
}
