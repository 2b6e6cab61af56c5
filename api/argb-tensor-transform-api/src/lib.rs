#![doc = include_str!("../README.MD")]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

// Module declarations
pub mod error;
pub mod layout;
pub mod normalize;

#[cfg(test)]
pub mod test_prelude;

/// C API exports
#[cfg(feature = "c-exports")]
pub mod c_api;

// Re-export main functionality at crate root
pub use error::ArgbTensorError;
pub use layout::TensorLayout;
pub use normalize::{
    ArgbNormalizeBuilder, normalize_argb, normalize_argb_interleaved, normalize_argb_planar,
};
