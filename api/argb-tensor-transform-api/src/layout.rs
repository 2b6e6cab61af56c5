//! # Tensor Layout (Stable Re-export)
//!
//! This module provides the stable API definition of the destination tensor
//! layout.
//!
//! ## Stability Notice
//!
//! This is a **stable re-export** of the layout type from the internal
//! `argb-tensor-transform` crate. While the internal implementation may
//! change, this API maintains backward compatibility, with conversion
//! functions handling any internal changes transparently.

/// The arrangement of normalized channel values in the destination buffer.
///
/// Both layouts hold the same `width * height * 3` floats; only the ordering
/// differs. Which one a model wants depends on the inference runtime: TFLite
/// interpreters typically consume interleaved (HWC) input, ONNX-style runtimes
/// typically consume planar (CHW).
///
/// ## Stability Guarantee
///
/// This type provides a stable API boundary. Even if the internal layout type
/// changes, this enum will maintain backward compatibility through conversion
/// functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TensorLayout {
    /// One `[r, g, b]` triple per pixel in row-major pixel order (HWC).
    Interleaved,

    /// Three contiguous planes of `width * height` values each: all reds,
    /// then all greens, then all blues (CHW).
    Planar,
}

impl Default for TensorLayout {
    /// Returns the default layout (interleaved), the arrangement TFLite-style
    /// interpreters consume.
    fn default() -> Self {
        Self::Interleaved
    }
}

impl TensorLayout {
    /// Returns all available layouts for iteration or testing.
    pub const fn all_variants() -> &'static [Self] {
        &[Self::Interleaved, Self::Planar]
    }

    /// Converts this stable API layout to the internal core layout.
    ///
    /// This allows the stable API to interface with the internal conversion
    /// functions. This conversion function isolates the stable API from
    /// internal type changes.
    pub fn to_internal_variant(self) -> argb_tensor_transform::TensorLayout {
        use argb_tensor_transform::TensorLayout;
        match self {
            Self::Interleaved => TensorLayout::Interleaved,
            Self::Planar => TensorLayout::Planar,
        }
    }

    /// Creates this stable API layout from the internal core layout.
    ///
    /// This conversion function isolates the stable API from internal type
    /// changes.
    pub fn from_internal_variant(layout: argb_tensor_transform::TensorLayout) -> Self {
        use argb_tensor_transform::TensorLayout;
        match layout {
            TensorLayout::Interleaved => Self::Interleaved,
            TensorLayout::Planar => Self::Planar,
        }
    }
}
