use core::fmt;
use core::ops::Range;
use core::slice;

use super::growth;
use super::inner::Inner;
use super::inner::wipe;
use crate::types::AltAllocator;
use crate::types::ArrDesc;
use crate::types::ClearMode;
use crate::types::DynArrErr;
use crate::types::DynArrResult;
use crate::types::ErrorKind;
#[cfg(feature = "std_alloc")]
use crate::types::Global;
use crate::types::IncreaseMode;

const LIVE_TAG: u32 = 0x7123_8924;

/// Iterator over the occupied slots of a `DynArr`, one `element_size` chunk at a time.
pub type Iter<'a> = slice::ChunksExact<'a, u8>;

/// A growable array of fixed-width byte elements with a per-instance byte limit.
///
/// Elements are opaque: every element passed in must be exactly
/// `element_size` bytes long and is compared byte for byte.
pub struct DynArr<A: AltAllocator> {
    pub(super) inner: Inner<A>,
    len:              usize,
    elem:             usize,
    limit:            usize,
    tag:              u32,
}

#[cfg(feature = "std_alloc")]
impl DynArr<Global> {
    /// Creates an array backed by the global allocator.
    ///
    /// See `new_in` for the possible errors.
    pub fn new(desc: ArrDesc) -> DynArrResult<Self> {
        return Self::new_in(desc, Global);
    }
}

impl<A: AltAllocator> DynArr<A> {
    /// The byte written over memory by `destroy`, by `clear` in secure mode and on drop.
    pub const WIPE_BYTE: u8 = b'0';

    /// Creates an array with `desc.initial_capacity` zeroed slots drawn from `alloc`.
    ///
    /// # Errors
    /// * `InvalidArgument` if any field of `desc` is zero.
    /// * `SizeLimitExceeded` if the initial slots do not fit in `desc.byte_limit`.
    /// * `LayoutFailure` if the initial byte count is not a valid layout.
    /// * `AllocFailure` if the allocator fails.
    pub fn new_in(desc: ArrDesc, alloc: A) -> DynArrResult<Self> {
        let bytes = desc.validate()?;
        let inner = Inner::allocate_in(alloc, bytes)?;
        log::debug!(
            "created array: element_size={}, capacity={}, byte_limit={}",
            desc.element_size,
            desc.initial_capacity,
            desc.byte_limit
        );
        return Ok(Self {
            inner: inner,
            len:   0,
            elem:  desc.element_size,
            limit: desc.byte_limit,
            tag:   LIVE_TAG,
        });
    }

    /// Wipes the whole buffer with `WIPE_BYTE`, hands it back to the
    /// allocator and marks the handle dead.
    ///
    /// Every later call on this handle, including another `destroy`, fails
    /// with `InvalidArgument`.
    pub fn destroy(&mut self) -> DynArrResult<()> {
        self.check()?;
        wipe(self.inner.as_mut_slice(), Self::WIPE_BYTE);
        self.inner.release();
        self.len = 0;
        self.tag = 0;
        log::debug!("destroyed array");
        return Ok(());
    }

    /// Creates an independent copy with the same element size, capacity and
    /// byte limit holding the same elements.
    pub fn try_clone(&self) -> DynArrResult<Self>
    where
        A: Clone,
    {
        self.check()?;
        let mut inner = Inner::allocate_in(self.inner.allocator().clone(), self.inner.size())?;
        let used = self.used_bytes();
        inner.as_mut_slice()[..used].copy_from_slice(self.as_bytes());
        log::debug!("cloned array with {} elements", self.len);

        return Ok(Self {
            inner: inner,
            len:   self.len,
            elem:  self.elem,
            limit: self.limit,
            tag:   LIVE_TAG,
        });
    }

    #[inline]
    pub const fn len(&self) -> usize {
        return self.len;
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        return self.len == 0;
    }

    /// Number of allocated slots. Zero once the handle is destroyed.
    #[inline]
    pub const fn capacity(&self) -> usize {
        return self.inner.size() / self.elem;
    }

    #[inline]
    pub const fn element_size(&self) -> usize {
        return self.elem;
    }

    #[inline]
    pub const fn byte_limit(&self) -> usize {
        return self.limit;
    }

    /// `false` once `destroy` has been called.
    #[inline]
    pub const fn is_live(&self) -> bool {
        return self.tag == LIVE_TAG;
    }

    #[inline]
    pub const fn allocator(&self) -> &A {
        return self.inner.allocator();
    }

    /// The occupied slots as one contiguous byte slice.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        let used = self.used_bytes();
        return &self.inner.as_slice()[..used];
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        return self.as_bytes().chunks_exact(self.elem);
    }

    pub fn get(&self, pos: usize) -> DynArrResult<&[u8]> {
        self.check()?;
        self.check_pos(pos)?;
        let range = self.slot(pos);
        return Ok(&self.inner.as_slice()[range]);
    }

    pub fn get_mut(&mut self, pos: usize) -> DynArrResult<&mut [u8]> {
        self.check()?;
        self.check_pos(pos)?;
        let range = self.slot(pos);
        return Ok(&mut self.inner.as_mut_slice()[range]);
    }

    pub fn first(&self) -> DynArrResult<&[u8]> {
        return self.get(0);
    }

    pub fn last(&self) -> DynArrResult<&[u8]> {
        self.check()?;
        let Some(pos) = self.len.checked_sub(1) else {
            return Err(DynArrErr::new(ErrorKind::OutOfBounds));
        };
        return self.get(pos);
    }

    /// Overwrites the element at `pos`. Never changes the length or capacity.
    pub fn set(&mut self, element: &[u8], pos: usize) -> DynArrResult<&mut [u8]> {
        self.check()?;
        self.check_element(element)?;
        self.check_pos(pos)?;
        let range = self.slot(pos);
        let slot = &mut self.inner.as_mut_slice()[range];
        slot.copy_from_slice(element);
        return Ok(slot);
    }

    /// Writes `element` after the last one, growing the buffer when full.
    pub fn append(&mut self, element: &[u8]) -> DynArrResult<&mut [u8]> {
        let pos = self.len;
        return self.insert_at(element, pos);
    }

    /// Writes `element` at the front, moving every element one slot up.
    pub fn prepend(&mut self, element: &[u8]) -> DynArrResult<&mut [u8]> {
        return self.insert_at(element, 0);
    }

    /// Writes `element` at `pos`, moving the elements from `pos` on one slot up.
    ///
    /// `pos` may equal `len()`, which appends.
    ///
    /// # Errors
    /// * `InvalidArgument` for a destroyed handle or an element of the wrong size.
    /// * `OutOfBounds` if `pos > len()`.
    /// * `SizeLimitExceeded` or `AllocFailure` if the array is full and cannot grow.
    pub fn insert_at(&mut self, element: &[u8], pos: usize) -> DynArrResult<&mut [u8]> {
        self.check()?;
        self.check_element(element)?;
        if pos > self.len {
            return Err(DynArrErr::new(ErrorKind::OutOfBounds));
        }
        self.reserve_slot()?;

        let elem = self.elem;
        let used = self.used_bytes();
        let buf = self.inner.as_mut_slice();
        buf.copy_within(pos * elem..used, (pos + 1) * elem);

        let slot = &mut buf[pos * elem..(pos + 1) * elem];
        slot.copy_from_slice(element);
        self.len += 1;
        return Ok(slot);
    }

    /// Removes the element at `pos` and closes the gap, keeping the order.
    pub fn remove(&mut self, pos: usize) -> DynArrResult<()> {
        self.check()?;
        self.check_pos(pos)?;

        let elem = self.elem;
        let used = self.used_bytes();
        self.inner.as_mut_slice().copy_within((pos + 1) * elem..used, pos * elem);
        self.len -= 1;
        return Ok(());
    }

    /// Removes the element at `pos` by moving the last element into its slot.
    ///
    /// Constant time, but the order of the elements is not kept.
    pub fn remove_dirty(&mut self, pos: usize) -> DynArrResult<()> {
        self.check()?;
        self.check_pos(pos)?;

        let last = self.len - 1;
        if pos != last {
            let src = self.slot(last);
            let dst = self.slot(pos).start;
            self.inner.as_mut_slice().copy_within(src, dst);
        }
        self.len -= 1;
        return Ok(());
    }

    /// Removes the elements `from..=to`, keeping the order of the rest.
    ///
    /// # Errors
    /// `OutOfBounds` if `from > to` or `to >= len()`.
    pub fn remove_range(&mut self, from: usize, to: usize) -> DynArrResult<()> {
        self.check()?;
        if from > to || to >= self.len {
            return Err(DynArrErr::new(ErrorKind::OutOfBounds));
        }

        let elem = self.elem;
        let used = self.used_bytes();
        self.inner.as_mut_slice().copy_within((to + 1) * elem..used, from * elem);
        self.len -= to - from + 1;
        return Ok(());
    }

    pub fn clear(&mut self, mode: ClearMode) -> DynArrResult<()> {
        self.check()?;
        if mode == ClearMode::Secure {
            let used = self.used_bytes();
            wipe(&mut self.inner.as_mut_slice()[..used], Self::WIPE_BYTE);
        }
        self.len = 0;
        return Ok(());
    }

    pub fn contains(&self, element: &[u8]) -> DynArrResult<bool> {
        return Ok(self.index_of(element)?.is_some());
    }

    /// Position of the first element equal to `element`, or `None`.
    pub fn index_of(&self, element: &[u8]) -> DynArrResult<Option<usize>> {
        self.check()?;
        self.check_element(element)?;
        return Ok(self.iter().position(|slot| slot == element));
    }

    /// Position of the last element equal to `element`, or `None`.
    pub fn last_index_of(&self, element: &[u8]) -> DynArrResult<Option<usize>> {
        self.check()?;
        self.check_element(element)?;
        return Ok(self.iter().rposition(|slot| slot == element));
    }

    /// Grows the capacity ahead of time.
    ///
    /// With `IncreaseMode::Soft` the array grows just enough to hold `n`
    /// more elements and does nothing when it already can. With
    /// `IncreaseMode::Hard` the capacity grows by exactly `n` slots.
    ///
    /// # Errors
    /// * `SizeLimitExceeded` if the new capacity would not fit in the byte limit.
    /// * `AllocFailure` if the allocator fails.
    pub fn increase(&mut self, n: usize, mode: IncreaseMode) -> DynArrResult<()> {
        self.check()?;
        let capacity = self.capacity();
        let target = match mode {
            IncreaseMode::Soft => growth::soft_target(self.len, capacity, n)?,
            IncreaseMode::Hard => growth::hard_target(capacity, n)?,
        };
        let Some(target) = target else {
            return Ok(());
        };
        let target = growth::fits(target, self.elem, self.limit).inspect_err(|_| {
            log::warn!("increase to {target} slots refused by byte limit {}", self.limit);
        })?;
        return self.inner.grow_to(target * self.elem);
    }

    /// Makes room for one more element using the automatic growth policy.
    fn reserve_slot(&mut self) -> DynArrResult<()> {
        let capacity = self.capacity();
        if self.len < capacity {
            return Ok(());
        }
        let target = growth::next_capacity(capacity, self.elem, self.limit).inspect_err(|_| {
            log::warn!("array of {capacity} slots cannot grow past byte limit {}", self.limit);
        })?;
        return self.inner.grow_to(target * self.elem);
    }

    #[inline]
    const fn check(&self) -> DynArrResult<()> {
        if self.tag != LIVE_TAG {
            return Err(DynArrErr::new(ErrorKind::InvalidArgument));
        }
        return Ok(());
    }

    #[inline]
    const fn check_element(&self, element: &[u8]) -> DynArrResult<()> {
        if element.len() != self.elem {
            return Err(DynArrErr::new(ErrorKind::InvalidArgument));
        }
        return Ok(());
    }

    #[inline]
    const fn check_pos(&self, pos: usize) -> DynArrResult<()> {
        if pos >= self.len {
            return Err(DynArrErr::new(ErrorKind::OutOfBounds));
        }
        return Ok(());
    }

    #[inline]
    const fn slot(&self, pos: usize) -> Range<usize> {
        return pos * self.elem..(pos + 1) * self.elem;
    }

    #[inline]
    const fn used_bytes(&self) -> usize {
        return self.len * self.elem;
    }
}

impl<A: AltAllocator> Drop for DynArr<A> {
    fn drop(&mut self) {
        if self.is_live() {
            wipe(self.inner.as_mut_slice(), Self::WIPE_BYTE);
        }
    }
}

impl<A: AltAllocator> fmt::Debug for DynArr<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynArr")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("element_size", &self.elem)
            .field("byte_limit", &self.limit)
            .field("live", &self.is_live())
            .finish()
    }
}

impl<'a, A: AltAllocator> IntoIterator for &'a DynArr<A> {
    type Item = &'a [u8];
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        return self.iter();
    }
}
