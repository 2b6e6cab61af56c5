#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

#[cfg(any(feature = "std", test))]
extern crate std;

#[cfg(test)]
pub mod test_prelude;

pub(crate) mod normalize;

pub mod allocate;
pub mod color_8888;
pub mod cpu_detect;

// Re-export main types and functions from the normalize module
pub use normalize::*;
