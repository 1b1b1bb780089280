#![doc = include_str!("../README.MD")]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod builder;
pub mod error;
pub mod transform;

pub use builder::SwizzleBuilder;
pub use error::BuilderError;
pub use transform::{
    deswizzle_allocating, nsw_deswizzle, nsw_swizzle, ps4_deswizzle, ps4_swizzle,
    swizzle_allocating,
};

// Types needed to call the API without depending on the core crate directly.
pub use texture_swizzle::{
    BlockFormat, ErrorCategory, ErrorKind, ImageGeometry, Platform, SwizzleError,
};

#[cfg(test)]
pub(crate) mod test_prelude;
