use std::{str::Utf8Error, string::FromUtf8Error};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CardError>;

#[derive(Error, Debug)]
pub enum CardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Compression error: {0}")]
    Compression(String),
    #[error("Parsing error")]
    Parse,
    #[error("URL error: {0}")]
    Url(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<Utf8Error> for CardError {
    fn from(_: Utf8Error) -> Self {
        Self::Parse
    }
}

impl From<FromUtf8Error> for CardError {
    fn from(_: FromUtf8Error) -> Self {
        Self::Parse
    }
}

impl From<serde_json::Error> for CardError {
    fn from(_: serde_json::Error) -> Self {
        Self::Parse
    }
}

impl From<base64::DecodeError> for CardError {
    fn from(e: base64::DecodeError) -> Self {
        Self::Compression(e.to_string())
    }
}

impl From<url::ParseError> for CardError {
    fn from(e: url::ParseError) -> Self {
        Self::Url(e.to_string())
    }
}
