// SPDX-License-Identifier: MPL-2.0
use crate::domain::error::DurationError;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Duration(DurationError),
    /// A push event could not be decoded.
    Event(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Duration(e) => write!(f, "Duration Error: {}", e),
            Error::Event(e) => write!(f, "Event Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<DurationError> for Error {
    fn from(err: DurationError) -> Self {
        Error::Duration(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Event(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
