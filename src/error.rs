use std::io;
use std::path::Path;
use trackable::error::{ErrorKind as TrackableErrorKind, ErrorKindExt, TrackableError};

/// This crate specific `Error` type.
///
/// The cause is always an [`io::Error`] whose message is meant for the user.
#[derive(Debug, Clone)]
pub struct Error(TrackableError<ErrorKind>);
derive_traits_for_trackable_error_newtype!(Error, ErrorKind);
impl Error {
    pub(crate) fn input_file(path: &Path, cause: io::Error) -> Self {
        let message = format!("cannot read input file {:?}: {}", path, cause);
        ErrorKind::InputFile
            .cause(io::Error::new(cause.kind(), message))
            .into()
    }

    pub(crate) fn output_file(path: &Path, cause: io::Error) -> Self {
        let message = format!("cannot create output file {:?}: {}", path, cause);
        ErrorKind::OutputFile
            .cause(io::Error::new(cause.kind(), message))
            .into()
    }

    /// Returns a one-line description of this error, without the tracking history.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstsort::{run, Config};
    ///
    /// let e = run(&Config::new("/no/such/file.txt")).unwrap_err();
    /// assert!(e.message().starts_with("cannot read input file \"/no/such/file.txt\""));
    /// assert!(!e.message().contains('\n'));
    /// ```
    pub fn message(&self) -> String {
        match self.concrete_cause::<io::Error>() {
            Some(cause) => cause.to_string(),
            None => format!("{:?}", self.kind()),
        }
    }
}
impl From<io::Error> for Error {
    fn from(f: io::Error) -> Self {
        ErrorKind::Io.cause(f).into()
    }
}

/// Possible error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input file is missing, is a directory, or could not be read.
    InputFile,

    /// The output file could not be created or written.
    OutputFile,

    /// Reading lines or writing counts failed on a caller supplied stream.
    Io,
}
impl TrackableErrorKind for ErrorKind {}
