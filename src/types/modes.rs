use super::DynArrErr;
use super::ErrorKind;

/// How `DynArr::clear` treats the occupied bytes.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ClearMode {
    /// Only resets the length. The old bytes stay in the buffer.
    Fast = 0,
    /// Overwrites the occupied bytes with the wipe byte, then resets the length.
    Secure = 1,
}

impl TryFrom<u8> for ClearMode {
    type Error = DynArrErr;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => return Ok(Self::Fast),
            1 => return Ok(Self::Secure),
            _ => return Err(DynArrErr::new(ErrorKind::UnknownMode)),
        }
    }
}

/// How `DynArr::increase` interprets its slot count.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum IncreaseMode {
    /// Grow only as far as needed for `n` free slots past the length.
    Soft = 0,
    /// Grow the capacity by exactly `n` slots.
    Hard = 1,
}

impl TryFrom<u8> for IncreaseMode {
    type Error = DynArrErr;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => return Ok(Self::Soft),
            1 => return Ok(Self::Hard),
            _ => return Err(DynArrErr::new(ErrorKind::UnknownMode)),
        }
    }
}
