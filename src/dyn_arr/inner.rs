use core::alloc::Layout;
use core::ptr;
use core::ptr::NonNull;
use core::slice;
use core::sync::atomic;
use core::sync::atomic::Ordering;

use crate::types::AltAllocator;
use crate::types::DynArrErr;
use crate::types::DynArrResult;
use crate::types::ErrorKind;

const fn layout_bytes(size: usize) -> DynArrResult<Layout> {
    let Ok(lay) = Layout::from_size_align(size, 1) else {
        return Err(DynArrErr::new(ErrorKind::LayoutFailure));
    };
    return Ok(lay);
}

/// Overwrites every byte with `pattern` using volatile writes so the stores
/// survive even when the memory is freed right afterwards.
pub(crate) fn wipe(bytes: &mut [u8], pattern: u8) {
    for byte in bytes.iter_mut() {
        unsafe { ptr::write_volatile(byte, pattern) };
    }
    atomic::compiler_fence(Ordering::SeqCst);
}

/// The raw byte buffer behind a `DynArr`.
///
/// `size` is the number of bytes currently allocated. A size of zero means
/// nothing is allocated and `ptr` is dangling.
pub(crate) struct Inner<A: AltAllocator> {
    ptr:   NonNull<u8>,
    size:  usize,
    alloc: A,
}

impl<A: AltAllocator> Inner<A> {
    /// Allocates a zeroed buffer of `size` bytes.
    pub(crate) fn allocate_in(alloc: A, size: usize) -> DynArrResult<Self> {
        let layout = layout_bytes(size)?;

        if layout.size() == 0 {
            return Ok(Self {
                ptr:   NonNull::dangling(),
                size:  0,
                alloc: alloc,
            });
        }

        let Ok(ptr) = alloc.allocate_zeroed(layout) else {
            return Err(DynArrErr::new(ErrorKind::AllocFailure));
        };
        log::trace!("allocated {size} byte buffer");

        return Ok(Self {
            ptr:   ptr.cast(),
            size:  size,
            alloc: alloc,
        });
    }

    /// Grows the buffer to `new_size` bytes keeping the current content.
    /// The added bytes are zeroed.
    ///
    /// On error the buffer is left exactly as it was.
    pub(crate) fn grow_to(&mut self, new_size: usize) -> DynArrResult<()> {
        if new_size <= self.size {
            return Ok(());
        }
        let new_layout = layout_bytes(new_size)?;

        let res = if self.size == 0 {
            self.alloc.allocate_zeroed(new_layout)
        } else {
            let old_layout = layout_bytes(self.size)?;
            unsafe { self.alloc.grow_zeroed(self.ptr, old_layout, new_layout) }
        };
        let Ok(ptr) = res else {
            return Err(DynArrErr::new(ErrorKind::AllocFailure));
        };
        log::trace!("grew buffer from {} to {new_size} bytes", self.size);

        self.ptr = ptr.cast();
        self.size = new_size;
        return Ok(());
    }

    /// Gives the memory back to the allocator. The buffer is empty afterwards.
    pub(crate) fn release(&mut self) {
        if self.size == 0 {
            return;
        }
        // The layout was valid when this size was allocated.
        if let Ok(layout) = layout_bytes(self.size) {
            unsafe { self.alloc.deallocate(self.ptr, layout) };
        }
        log::trace!("released {} byte buffer", self.size);
        self.ptr = NonNull::dangling();
        self.size = 0;
    }

    #[inline]
    pub(crate) const fn size(&self) -> usize {
        return self.size;
    }

    #[inline]
    pub(crate) const fn allocator(&self) -> &A {
        return &self.alloc;
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[u8] {
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.size) }
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size) }
    }
}

impl<A: AltAllocator> Drop for Inner<A> {
    fn drop(&mut self) {
        self.release();
    }
}
