//! Common test imports and utilities
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// External crates commonly used in tests
pub use rstest::rstest;

// Alloc types, so tests also build without `std`
pub use alloc::{
    boxed::Box,
    format,
    string::{String, ToString},
    vec,
    vec::Vec,
};

// Core functionality from this crate
pub use crate::{
    BlockFormat, ImageGeometry, Platform, Ps4Layout, SwitchLayout, SwizzleError, TileLayout,
};

/// Generates `len` bytes where every byte holds its own offset (wrapping at 256).
pub(crate) fn sequential_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|x| x as u8).collect()
}

/// Generates `len` bytes where every `read_size` byte read unit is filled with its own index
/// (wrapping at 256).
///
/// Makes the destination of each read unit easy to recognise in swizzled output.
pub(crate) fn tagged_read_units(len: usize, read_size: usize) -> Vec<u8> {
    (0..len).map(|x| (x / read_size) as u8).collect()
}

#[test]
fn validate_test_data_generators() {
    assert_eq!(sequential_bytes(4), vec![0, 1, 2, 3]);
    assert_eq!(sequential_bytes(258)[256..], [0, 1]);
    assert_eq!(tagged_read_units(6, 2), vec![0, 0, 1, 1, 2, 2]);
}
