//! C API for ARGB tensor conversion.
//!
//! Raw pointers plus explicit lengths in, a `repr(C)` result with an error
//! code out. A destination that cannot be used is reported as
//! [`error::AttErrorCode::NullDestinationPointer`] instead of silently doing
//! nothing, so callers can always distinguish "converted" from "no output".

pub mod error;
pub mod normalize;

pub use error::{AttErrorCode, AttResult};

use crate::layout::TensorLayout;

/// C-compatible destination tensor layout selector.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttTensorLayout {
    /// One `[r, g, b]` triple per pixel in row-major pixel order (HWC).
    Interleaved = 0,
    /// Three contiguous planes: all reds, then all greens, then all blues (CHW).
    Planar = 1,
}

impl From<AttTensorLayout> for TensorLayout {
    fn from(layout: AttTensorLayout) -> Self {
        match layout {
            AttTensorLayout::Interleaved => TensorLayout::Interleaved,
            AttTensorLayout::Planar => TensorLayout::Planar,
        }
    }
}
