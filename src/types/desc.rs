use super::DynArrErr;
use super::DynArrResult;
use super::ErrorKind;

/// Describes the shape of a new `DynArr`.
///
/// `element_size` and `byte_limit` are fixed for the lifetime of the array,
/// `initial_capacity` is only the starting number of slots.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ArrDesc {
    /// Width of one element in bytes.
    pub element_size:     usize,
    /// Number of slots allocated up front.
    pub initial_capacity: usize,
    /// Ceiling on `capacity * element_size`.
    pub byte_limit:       usize,
}

impl ArrDesc {
    pub const fn new(element_size: usize, initial_capacity: usize, byte_limit: usize) -> Self {
        return Self {
            element_size:     element_size,
            initial_capacity: initial_capacity,
            byte_limit:       byte_limit,
        };
    }

    /// Checks the descriptor and returns the byte size of the initial buffer.
    ///
    /// # Errors
    /// * `InvalidArgument` if any field is zero.
    /// * `SizeLimitExceeded` if the initial buffer would not fit in `byte_limit`.
    pub const fn validate(&self) -> DynArrResult<usize> {
        if self.element_size == 0 || self.initial_capacity == 0 || self.byte_limit == 0 {
            return Err(DynArrErr::new(ErrorKind::InvalidArgument));
        }
        let Some(bytes) = self.initial_capacity.checked_mul(self.element_size) else {
            return Err(DynArrErr::new(ErrorKind::SizeLimitExceeded));
        };
        if bytes > self.byte_limit {
            return Err(DynArrErr::new(ErrorKind::SizeLimitExceeded));
        }
        return Ok(bytes);
    }
}
