use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A structure was requested with a negative number of sites.
    InvalidArgument(String),
    /// A site index outside `[0, size)`.
    OutOfRange { index: usize, size: usize },
}

impl Error {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Error::OutOfRange { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(s) => write!(f, "invalid argument: {}", s),
            Error::OutOfRange { index, size: 0 } => {
                write!(f, "index {} is out of range: no sites", index)
            }
            Error::OutOfRange { index, size } => {
                write!(f, "index {} is not between 0 and {}", index, size - 1)
            }
        }
    }
}

impl std::error::Error for Error {}
