//! Memory allocation utilities for tensor destination buffers.
//!
//! Callers own both buffers of a normalization call; this module provides the
//! allocation primitive Rust does not have out of the box, for callers (and
//! tests/benchmarks) that want destination tensors aligned for SIMD stores and
//! inference runtimes.
//!
//! Memory is automatically deallocated when the returned [`RawAlloc`] is dropped.

use core::alloc::{Layout, LayoutError};
use safe_allocator_api::AllocError;
use safe_allocator_api::RawAlloc;
use thiserror::Error;

/// Allocates data with an alignment of 64 bytes.
///
/// # Parameters
///
/// - `num_bytes`: The number of bytes to allocate
///
/// # Returns
///
/// A [`RawAlloc`] containing the allocated data
pub fn allocate_align_64(num_bytes: usize) -> Result<RawAlloc, AllocateError> {
    let layout = Layout::from_size_align(num_bytes, 64)?;
    Ok(RawAlloc::new(layout)?)
}

/// An error that happened in memory allocation within the library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocateError {
    /// An error that occurred while creating a layout for allocation.
    #[error("Invalid layout provided. Likely due to `num_bytes` in `allocate_align_64` being larger than isize::MAX. {0}")]
    LayoutError(#[from] LayoutError),

    /// An error that occurred while allocating memory.
    #[error(transparent)]
    AllocationFailed(#[from] AllocError),
}
