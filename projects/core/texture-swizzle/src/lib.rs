#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod error;
pub mod geometry;
pub mod permutation;
pub mod profile;
pub mod validate;

pub(crate) mod engine;

pub use engine::{deswizzle, deswizzle_with_layout, swizzle, swizzle_with_layout};
pub use error::{Dimension, ErrorCategory, ErrorKind, SwizzleError};
pub use geometry::{BlockFormat, ImageGeometry};
pub use permutation::TilePermutation;
pub use profile::{
    Axis, PermutationStep, Platform, PlatformLayout, Ps4Layout, SwitchLayout, TileLayout,
    TileProfile, MAX_SWIZZLE_MODE,
};
pub use validate::{validate, validate_platform, ValidatedTexture};

/// Common test prelude for avoiding duplicate imports in test modules
#[cfg(test)]
pub(crate) mod test_prelude;
