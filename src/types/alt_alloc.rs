use core::alloc::Layout;
use core::ptr::NonNull;

use thiserror::Error;

/// This indicates that an `AltAllocator` could not satisfy a request.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("A memory allocation error occurred.")]
pub struct AllocError;

/// The rust allocator API is not stable yet. Therefore, this trait
/// can be used to implement/wrap a custom allocator in a no_std environment.
///
/// It only covers what a `DynArr` needs from an allocator: zeroed blocks,
/// zeroed growth and deallocation. Every layout a `DynArr` passes in has a
/// non-zero size and an alignment of one.
///
/// This mirrors the safety requirements of the allocator API:
/// <https://doc.rust-lang.org/std/alloc/trait.Allocator.html>
pub unsafe trait AltAllocator {
    /// Allocates a chunk of memory with the given layout.
    ///
    /// On success it returns a pointer to the allocated memory.
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError>;

    /// Allocates just like `allocate` but also zeroes the memory.
    fn allocate_zeroed(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        let ret = self.allocate(layout)?;
        let ptr = ret.cast::<u8>();
        unsafe { ptr.write_bytes(0, ret.len()) };
        return Ok(ret);
    }

    /// Deallocates the chunk of memory pointed at by `ptr`.
    ///
    /// This memory must have only been allocated by this allocator.
    /// The layout must match the layout provided when the chunk was
    /// allocated.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);

    /// Moves the memory pointed at by `old_ptr` into a larger block whose
    /// bytes past `old_layout.size()` are zeroed.
    ///
    /// If this fails the old ptr is still valid and untouched. If it
    /// succeeds the old ptr is no longer valid, and the ptr returned must
    /// be used instead.
    unsafe fn grow_zeroed(
        &self,
        old_ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        let new = self.allocate_zeroed(new_layout)?;
        let ptr = new.cast::<u8>();

        unsafe { ptr.copy_from_nonoverlapping(old_ptr, old_layout.size()) };
        unsafe { self.deallocate(old_ptr, old_layout) };
        return Ok(new);
    }
}
