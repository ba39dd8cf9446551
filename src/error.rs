//! Error enum
use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    Xml(roxmltree::Error),
    Zip(zip::result::ZipError),
    Http(reqwest::Error),
    Url(url::ParseError),
    Walk(walkdir::Error),
    /// Date text that does not follow `YYYY-M-D` or is not a calendar date.
    DateParse(String),
    /// Sum of resource sizes is over the allowed payload.
    TaskTooBig {
        size: u64,
        max_size: u64,
    },
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Serde(e) => write!(f, "json error: {}", e),
            Error::Xml(e) => write!(f, "xml error: {}", e),
            Error::Zip(e) => write!(f, "zip error: {}", e),
            Error::Http(e) => write!(f, "http error: {}", e),
            Error::Url(e) => write!(f, "url error: {}", e),
            Error::Walk(e) => write!(f, "directory walk error: {}", e),
            Error::DateParse(s) => write!(f, "invalid date: {:?}", s),
            Error::TaskTooBig { size, max_size } => write!(
                f,
                "Tasks payload is too big, it has {} and maximum is {}",
                size, max_size
            ),
            Error::Custom(s) => write!(f, "{}", s),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<roxmltree::Error> for Error {
    fn from(e: roxmltree::Error) -> Error {
        Error::Xml(e)
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(e: zip::result::ZipError) -> Error {
        Error::Zip(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::Http(e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Error {
        Error::Url(e)
    }
}

impl From<walkdir::Error> for Error {
    fn from(e: walkdir::Error) -> Error {
        Error::Walk(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
