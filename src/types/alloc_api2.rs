use core::alloc::Layout;
use core::ptr::NonNull;

use allocator_api2::alloc::Allocator as Alloc2;

use super::AllocError;
use super::AltAllocator;

// `allocator-api2` has its own error type, so every call is mapped onto ours.
unsafe impl<A: Alloc2> AltAllocator for A {
    #[inline]
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        return <Self as Alloc2>::allocate(self, layout).map_err(|_| AllocError);
    }

    #[inline]
    fn allocate_zeroed(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        return <Self as Alloc2>::allocate_zeroed(self, layout).map_err(|_| AllocError);
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { <Self as Alloc2>::deallocate(self, ptr, layout) };
    }

    #[inline]
    unsafe fn grow_zeroed(
        &self,
        old_ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        let mem = unsafe { <Self as Alloc2>::grow_zeroed(self, old_ptr, old_layout, new_layout) };
        return mem.map_err(|_| AllocError);
    }
}
