//! Tensor Layout Settings
//!
//! This module contains the configuration types for the normalization
//! operations.

use derive_enum_all_values::AllValues;

/// The arrangement of normalized channel values in the destination buffer.
///
/// Both layouts hold the same `width * height * 3` floats; only the ordering
/// differs. Which one a model wants depends on the inference runtime: TFLite
/// interpreters typically consume interleaved (HWC) input, ONNX-style runtimes
/// typically consume planar (CHW).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum TensorLayout {
    /// One `[r, g, b]` triple per pixel in row-major pixel order (HWC).
    Interleaved,

    /// Three contiguous planes of `width * height` values each: all reds,
    /// then all greens, then all blues (CHW).
    Planar,
}

impl Default for TensorLayout {
    fn default() -> Self {
        // What TFLite-style interpreters consume.
        Self::Interleaved
    }
}

impl TensorLayout {
    /// Number of floats written per input pixel. Identical for every layout.
    pub const fn floats_per_pixel(&self) -> usize {
        3
    }
}
