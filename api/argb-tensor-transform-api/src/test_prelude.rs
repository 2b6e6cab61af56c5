//! Common test imports and utilities for API tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.

// External crates commonly used in tests
pub use rstest::rstest;

// Main functionality from this crate
pub use crate::error::ArgbTensorError;
pub use crate::layout::TensorLayout;
pub use crate::normalize::{
    ArgbNormalizeBuilder, normalize_argb, normalize_argb_interleaved, normalize_argb_planar,
};
