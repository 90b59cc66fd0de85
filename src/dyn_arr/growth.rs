use crate::types::DynArrErr;
use crate::types::DynArrResult;
use crate::types::ErrorKind;

/// Picks the slot count for an automatic growth of a full array.
///
/// The capacity doubles while the doubled buffer stays within `limit`,
/// after that it is clamped to the most slots `limit` can hold. Fails when
/// no larger capacity fits.
///
/// Expects `capacity * elem <= limit` and `elem > 0`.
pub(crate) const fn next_capacity(capacity: usize, elem: usize, limit: usize) -> DynArrResult<usize> {
    let bytes = capacity * elem;
    if bytes == limit {
        return Err(DynArrErr::new(ErrorKind::SizeLimitExceeded));
    }

    let new_cap = if bytes <= limit / 2 {
        capacity * 2
    } else {
        limit / elem
    };

    if new_cap <= capacity {
        return Err(DynArrErr::new(ErrorKind::SizeLimitExceeded));
    }
    return fits(new_cap, elem, limit);
}

/// Slot count needed so that `n` slots are free past `len`.
/// `None` when `capacity` already has room.
pub(crate) const fn soft_target(len: usize, capacity: usize, n: usize) -> DynArrResult<Option<usize>> {
    let Some(needed) = len.checked_add(n) else {
        return Err(DynArrErr::new(ErrorKind::SizeLimitExceeded));
    };
    if needed <= capacity {
        return Ok(None);
    }
    return Ok(Some(needed));
}

/// Slot count after adding exactly `n` slots. `None` when `n` is zero.
pub(crate) const fn hard_target(capacity: usize, n: usize) -> DynArrResult<Option<usize>> {
    if n == 0 {
        return Ok(None);
    }
    let Some(target) = capacity.checked_add(n) else {
        return Err(DynArrErr::new(ErrorKind::SizeLimitExceeded));
    };
    return Ok(Some(target));
}

/// Returns `capacity` if its byte footprint stays within `limit`.
pub(crate) const fn fits(capacity: usize, elem: usize, limit: usize) -> DynArrResult<usize> {
    let Some(bytes) = capacity.checked_mul(elem) else {
        return Err(DynArrErr::new(ErrorKind::SizeLimitExceeded));
    };
    if bytes > limit {
        return Err(DynArrErr::new(ErrorKind::SizeLimitExceeded));
    }
    return Ok(capacity);
}
