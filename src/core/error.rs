use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Store,
    AlreadyIndexed,
    EmptyIndex,
    BadQuery,
    Corruption,
    Precondition,
    InvalidArgument,
}

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub context: String,
}

impl Error {
    pub fn new(kind: ErrorKind, context: String) -> Self {
        Error { kind, context }
    }

    /// Corruption errors always name the key that failed to parse.
    pub fn corruption(key: &str, detail: &str) -> Self {
        Error {
            kind: ErrorKind::Corruption,
            context: format!("malformed record at key {:?}: {}", key, detail),
        }
    }

    pub fn store(context: String) -> Self {
        Error {
            kind: ErrorKind::Store,
            context,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.context)
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error {
            kind: ErrorKind::Store,
            context: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
