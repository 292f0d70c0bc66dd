//! The error type shared by every fallible drawing and transport operation.

use core::fmt;

/// An error raised while drawing onto a canvas or talking to the display controller. `E` is the
/// error type of the underlying bus (`DisplayInterface::Error`); surfaces which never touch a bus
/// use `core::convert::Infallible`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error<E> {
    /// A coordinate or argument sequence could not be interpreted, or could not be packed into
    /// the byte layout expected by the controller. Nothing was drawn and the cursor did not move.
    InvalidArgument,
    /// The bus reported a failure while transferring a command, image data or a read-back.
    Interface(E),
}

impl<E> From<E> for Error<E> {
    fn from(err: E) -> Self {
        Error::Interface(err)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidArgument => f.write_str("invalid drawing argument"),
            Error::Interface(err) => write!(f, "display interface error: {:?}", err),
        }
    }
}

#[cfg(feature = "std")]
impl<E: fmt::Debug> std::error::Error for Error<E> {}
