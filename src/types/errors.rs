use thiserror::Error;

/// This enum lets one figure out what kind of error occurred during
/// a `DynArr` operation.
#[repr(u8)]
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The handle was destroyed, a creation parameter was zero, or an
    /// element did not have the array's element size.
    #[error("Invalid argument or destroyed handle.")]
    InvalidArgument = 1,
    /// A position or range fell outside the occupied slots.
    #[error("Position out of bounds.")]
    OutOfBounds,
    /// A raw mode value did not name a known mode.
    #[error("Unknown mode.")]
    UnknownMode,
    /// The buffer would need more bytes than its byte limit allows.
    #[error("Byte limit exceeded.")]
    SizeLimitExceeded,
    #[error("Failed to create layout.")]
    LayoutFailure,
    #[error("An allocation failure occurred.")]
    AllocFailure,
}

/// A type alias for `Result<T, DynArrErr>`
pub type DynArrResult<T> = Result<T, DynArrErr>;

/// This is used to indicate an error during a `DynArr` operation.
///
/// Whenever an operation returns this error the array is left exactly as
/// it was before the call.
#[repr(transparent)]
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error(transparent)]
pub struct DynArrErr(ErrorKind);

impl DynArrErr {
    pub(crate) const fn new(kind: ErrorKind) -> Self {
        return Self(kind);
    }

    pub const fn kind(self) -> ErrorKind {
        return self.0;
    }
}

impl From<ErrorKind> for DynArrErr {
    fn from(kind: ErrorKind) -> Self {
        return Self::new(kind);
    }
}
