use std::fmt;
use std::io;


/// Something that can go wrong reading a datalog stream.
#[derive(Debug)]
pub enum Error {

    /// The stream did not look like an STDF datalog — the first record was
    /// not a FAR, or a header could not be parsed at all.
    InvalidStdf(String),

    /// The FAR declared an STDF version this crate does not read. Contains
    /// the declared version.
    WrongVersion(u8),

    /// The underlying file operation failed.
    Os(io::Error),

    /// The stream ended. At a record boundary this is the normal end of a
    /// datalog; in the middle of a record it means the file was cut short.
    Eof,

    /// The consumer requested shutdown before the stream was drained.
    Terminated,
}

impl From<io::Error> for Error {
    fn from(ioe: io::Error) -> Self {
        if ioe.kind() == io::ErrorKind::UnexpectedEof {
            Self::Eof
        }
        else {
            Self::Os(ioe)
        }
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(ze: zip::result::ZipError) -> Self {
        match ze {
            zip::result::ZipError::Io(ioe) => Self::from(ioe),
            other => Self::InvalidStdf(other.to_string()),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStdf(reason) => write!(f, "not an STDF datalog: {}", reason),
            Self::WrongVersion(ver)   => write!(f, "unsupported STDF version {}", ver),
            Self::Os(ioe)             => write!(f, "file error: {}", ioe),
            Self::Eof                 => write!(f, "end of stream"),
            Self::Terminated          => write!(f, "terminated by the consumer"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Os(ioe) => Some(ioe),
            _ => None,
        }
    }
}
