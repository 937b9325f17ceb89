use std::error::Error as ErrorTrait;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;
use std::io::Error as IoError;

/// Stage of the run that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong number of command line arguments
    Usage,
    /// Input path could not be opened
    Open,
    /// A header field could not be read in full
    Read,
    /// Input file descriptor could not be closed
    Close,
    /// Report could not be written to stdout
    Write,
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, message: &str) -> Error {
        Error {
            kind: kind,
            message: String::from(message),
        }
    }

    pub fn usage(program: &str) -> Error {
        Error::new(ErrorKind::Usage, &format!("Use: {} <filename.bmp>", program))
    }

    pub fn open(err: IoError) -> Error {
        debug!("open failed: {}", err);
        Error::new(ErrorKind::Open, "Error opening input file")
    }

    pub fn close(err: IoError) -> Error {
        debug!("close failed: {}", err);
        Error::new(ErrorKind::Close, "Error closing input file")
    }

    pub fn write(err: IoError) -> Error {
        debug!("write failed: {}", err);
        Error::new(ErrorKind::Write, "Error writing report")
    }

    #[inline(always)]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}", self.message)
    }
}

impl ErrorTrait for Error {}

/// Field reads are the only place io errors bubble up with `?`
impl From<IoError> for Error {
    fn from(err: IoError) -> Error {
        debug!("read failed: {}", err);
        Error::new(ErrorKind::Read, "Error reading from input file")
    }
}
