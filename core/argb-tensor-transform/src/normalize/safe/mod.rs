//! Safe slice-based normalization wrappers
//!
//! This module provides safe, slice-based wrapper functions around the unsafe
//! pointer-based normalization kernels. These functions include input validation
//! and proper error handling.
//!
//! This module is intended for:
//! - Performance-focused users who want safe wrappers
//! - Library implementers building their own stable APIs
//! - Advanced users who can handle API changes between versions
//!
//! Note: For production use with ABI stability, prefer the
//! `argb-tensor-transform-api` crate.

pub mod normalize_with_layout;

// Re-export the main functions with _safe suffix for discoverability
pub use normalize_with_layout::{
    NormalizeValidationError, normalize_argb_interleaved as normalize_argb_interleaved_safe,
    normalize_argb_planar as normalize_argb_planar_safe,
    normalize_argb_with_layout as normalize_argb_with_layout_safe,
};
