use std::fmt;

/// Result type for subprime-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading content
#[derive(Debug)]
pub enum Error {
    /// Types layer error
    Types(subprime_types::Error),

    /// Document is not valid TOML for the content schema
    Parse(toml::de::Error),

    /// Document parsed but breaks one or more content invariants
    Validation(Vec<String>),

    /// IO operation failed
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Types(err) => write!(f, "{}", err),
            Error::Parse(err) => write!(f, "Parse error: {}", err),
            Error::Validation(problems) => {
                write!(f, "Invalid content document ({} problems)", problems.len())?;
                for problem in problems {
                    write!(f, "\n  - {}", problem)?;
                }
                Ok(())
            }
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Types(err) => Some(err),
            Error::Parse(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Validation(_) => None,
        }
    }
}

impl From<subprime_types::Error> for Error {
    fn from(err: subprime_types::Error) -> Self {
        Error::Types(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Parse(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
