use std::fs::File;
use std::io::Error as IoError;
use std::io::Read;
use std::io::Result as IoResult;
use std::os::unix::io::IntoRawFd;
use std::os::unix::io::RawFd;
use std::path::Path;

use libc::close;

use super::super::error::Error;

/// Read only input file whose close can fail loudly
///
/// `File` swallows errors from close(2) when dropped, so `close` hands the
/// descriptor to libc instead.
pub struct InputFile {
    file: File,
}

impl InputFile {

    pub fn open<P: AsRef<Path>>(path: P) -> Result<InputFile, Error> {
        let path = path.as_ref();
        debug!("opening {}", path.display());
        match File::open(path) {
            Ok(file) => Ok(InputFile { file: file }),
            Err(err) => Err(Error::open(err)),
        }
    }

    /// Close the descriptor, consuming the file
    pub fn close(self) -> Result<(), Error> {
        close_fd(self.file.into_raw_fd())
    }
}

impl Read for InputFile {
    #[inline(always)]
    fn read(&mut self, buf: &mut [u8]) -> IoResult<usize> {
        self.file.read(buf)
    }
}

/// close(2) on a raw descriptor we own
pub fn close_fd(fd: RawFd) -> Result<(), Error> {
    debug!("closing fd {}", fd);
    if unsafe { close(fd) } == -1 {
        return Err(Error::close(IoError::last_os_error()))
    }
    Ok(())
}
