//! # Dynamic Array
//!
//! The `dyn_arr` crate provides a `#[no_std]` dynamic array of fixed-width, untyped elements.
//! Every element is an opaque block of `element_size` bytes supplied and interpreted by the caller.
//!
//! Each `DynArr` carries its own byte limit. The buffer doubles while it can, then clamps to the
//! limit, and any operation that would need more than the limit fails without touching the array.
//! All allocations are fallible, so running out of memory is reported as an error instead of
//! aborting.
//!
//! A handle can be destroyed explicitly. Destroying wipes the buffer with a sentinel byte before
//! releasing it, and any later call on the same handle returns an error rather than touching
//! freed memory.
//!
//! # Feature Flags
//! * `std_alloc` - (default) Enables `Global`, a wrapper that implements `AltAllocator` using the
//! standard allocator APIs, and the `DynArr::new` constructor that uses it.
//!
//! * `alloc_api2` - Implements `AltAllocator` for every allocator that implements the `Allocator`
//! trait from the `allocator-api2` crate.

#![no_std]

#[cfg(any(feature = "std_alloc", test))]
extern crate std;

mod dyn_arr;
pub mod types;

pub use dyn_arr::DynArr;
pub use dyn_arr::Iter;
