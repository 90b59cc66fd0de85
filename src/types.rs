//! Contains the allocator trait and the supporting types used by `DynArr`: errors, operation
//! modes and the creation descriptor.
//!
//! If built with the `std_alloc` feature, a wrapper called `Global` is also provided.
//! With the `alloc_api2` feature every `allocator_api2::alloc::Allocator` implements `AltAllocator`.

#[cfg(feature = "alloc_api2")]
mod alloc_api2;
mod alt_alloc;
mod desc;
mod errors;
mod modes;
#[cfg(feature = "std_alloc")]
mod std_alloc;

pub use alt_alloc::AllocError;
pub use alt_alloc::AltAllocator;
pub use desc::ArrDesc;
pub use errors::*;
pub use modes::ClearMode;
pub use modes::IncreaseMode;
#[cfg(feature = "std_alloc")]
pub use std_alloc::Global;
