use std::convert::From;
use std::error;
use std::fmt;
use std::io;
use std::result;

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: Option<String>,
}

#[derive(Debug)]
pub enum ErrorKind {
    DateOverflow,
    DateParse,
    ConfigParse,
    IOError(io::Error),
}

impl Error {
    pub fn new(kind: ErrorKind, msg: &str) -> Self {
        Error {
            kind,
            message: Some(msg.to_owned()),
        }
    }

    pub fn with_msg(mut self, message: &str) -> Self {
        self.message = Some(message.to_owned());
        self
    }

    pub fn is_overflow(&self) -> bool {
        matches!(self.kind, ErrorKind::DateOverflow)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            kind,
            message: None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(io_error: io::Error) -> Error {
        Error::from(ErrorKind::IOError(io_error))
    }
}

impl From<chrono::ParseError> for Error {
    fn from(parse_error: chrono::ParseError) -> Error {
        Error::new(
            ErrorKind::DateParse,
            format!("Could not parse date: {}", parse_error).as_str(),
        )
    }
}

impl From<toml::de::Error> for Error {
    fn from(toml_error: toml::de::Error) -> Error {
        Error::new(ErrorKind::ConfigParse, &toml_error.to_string())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(msg) => write!(f, "{}: {}", self.kind.as_str(), msg),
            None => write!(f, "{}", self.kind.as_str()),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match &self.kind {
            ErrorKind::IOError(err) => Some(err),
            _ => None,
        }
    }
}

impl ErrorKind {
    pub fn as_str(&self) -> String {
        match self {
            ErrorKind::DateOverflow => "date out of representable range".to_owned(),
            ErrorKind::DateParse => "invalid date format".to_owned(),
            ErrorKind::ConfigParse => "invalid configuration".to_owned(),
            ErrorKind::IOError(err) => err.to_string(),
        }
    }
}
