use crate::{profile::CodecProfile, Error};
use std::{env, error, fs, str::FromStr};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Mode {
    Encode,
    Decode,
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "encode" => Ok(Mode::Encode),
            "decode" => Ok(Mode::Decode),
            _ => Err(Error::new(format!("Unknown mode {}", value))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Configuration {
    mode: Mode,
    profile: CodecProfile,
    line_width: Option<usize>,
}

struct Variables<F> {
    lookup: F,
}

impl<F: Fn(&str) -> Option<String>> Variables<F> {
    fn var(&self, key: &str, default: Option<String>) -> Result<String, String> {
        match (self.lookup)(key) {
            Some(value) => Ok(value),
            None => default.ok_or(format!("Missing {}", key)),
        }
    }

    fn var_map<T, E: error::Error>(&self, key: &str, mut f: impl FnMut(&str) -> Result<T, E>, default: Option<T>) -> Result<T, String> {
        match self.var(key, None) {
            Ok(value) => f(&value).map_err(|_| format!("Invalid {} {}", key, value)),
            Err(err) => default.ok_or(err),
        }
    }
}

impl Configuration {
    pub fn new() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let variables = Variables { lookup };
        let mode = variables.var_map("MODE", |mode| mode.parse(), Some(Mode::Encode)).map_err(Error::new)?;
        let line_width = variables
            .var_map("LINE_WIDTH", |width| width.parse::<usize>(), Some(0))
            .map_err(Error::new)?;
        let profile = if let Ok(path) = variables.var("CODEC_PROFILE_PATH", None) {
            let json = fs::read_to_string(&path).map_err(|error| Error::new(format!("Cannot read {}: {}", path, error)))?;
            CodecProfile::from_json(&json)?
        } else if let Ok(json) = variables.var("CODEC_PROFILE", None) {
            CodecProfile::from_json(&json)?
        } else {
            let name = variables.var("CODEC", Some("base64".to_string())).map_err(Error::new)?;
            CodecProfile::preset(&name)?
        };
        Ok(Self {
            mode,
            profile,
            line_width: if line_width == 0 { None } else { Some(line_width) },
        })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn profile(&self) -> &CodecProfile {
        &self.profile
    }

    pub fn line_width(&self) -> Option<usize> {
        self.line_width
    }
}
