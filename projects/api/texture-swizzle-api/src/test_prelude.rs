//! Test prelude for API tests.
#![allow(unused_imports)]

pub use rstest::rstest;

pub use alloc::{vec, vec::Vec};

pub use crate::{BlockFormat, ImageGeometry, Platform, SwizzleError};

/// Generates `len` bytes with a period of 251, which no tile size is a multiple of.
pub(crate) fn pattern_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|x| (x % 251) as u8).collect()
}
