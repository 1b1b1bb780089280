//! Error types for swizzle and deswizzle operations.
//!
//! Every failure is reported as a [`SwizzleError`], which carries the numeric context of the
//! failure (expected vs actual sizes, the offending dimension, etc.). Callers that only need
//! to branch on the class of failure can use [`SwizzleError::kind`] and
//! [`ErrorKind::category`] to tell bad input apart from an engine defect.

use crate::profile::Platform;
use alloc::string::String;
use core::fmt;
use thiserror::Error;

/// Image dimension referenced by an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    /// Image width, in pixels.
    Width,
    /// Image height, in pixels.
    Height,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Width => f.write_str("width"),
            Dimension::Height => f.write_str("height"),
        }
    }
}

/// Errors that can occur while validating or converting texture data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwizzleError {
    /// The buffer length does not match the size implied by the image and block format.
    #[error("Invalid data size. Expected {expected} bytes (according to image and format specifications), got {actual} bytes.")]
    SizeMismatch {
        /// The size computed from the image geometry and block format.
        expected: usize,
        /// The size of the provided buffer.
        actual: usize,
    },

    /// The buffer length is not a whole number of tiles.
    #[error("Invalid data size. The data size must be a multiple of {tile_size} bytes, got {actual} bytes. Height and/or width padding may be required in the original image.")]
    NotTileMultiple {
        /// Size of a single tile of the selected profile.
        tile_size: usize,
        /// The size of the provided buffer.
        actual: usize,
    },

    /// The output buffer is too small to hold the converted data.
    #[error("Output buffer too small: need {needed} bytes, but only {actual} bytes available.")]
    OutputBufferTooSmall {
        /// The required size in bytes.
        needed: usize,
        /// The actual size in bytes.
        actual: usize,
    },

    /// The platform requires a swizzle mode, but none was provided.
    #[error("Swizzle mode required for {0} textures.")]
    MissingSwizzleMode(Platform),

    /// The platform name is not recognised.
    #[error("Unknown platform: '{0}'. Supported platforms: nsw, ps4")]
    UnsupportedPlatform(String),

    /// An image dimension is not a multiple of the tile dimension.
    #[error("With the current parameters, image {dimension} should be a multiple of {tile_size}, but the given {dimension} is {size}.")]
    InvalidDimension {
        /// Which dimension is invalid.
        dimension: Dimension,
        /// The image size along that dimension.
        size: u32,
        /// The tile size along that dimension.
        tile_size: u32,
    },

    /// An image dimension is zero.
    #[error("Image {0} must not be zero.")]
    ZeroDimension(Dimension),

    /// The block format cannot be used with the selected platform.
    #[error("Invalid block format ({block_width}x{block_height}, {bytes_per_block} bytes per block): {reason}")]
    InvalidBlockFormat {
        /// Width of a block in pixels.
        block_width: u32,
        /// Height of a block in pixels.
        block_height: u32,
        /// Size of a block in bytes.
        bytes_per_block: u32,
        /// Why the format was rejected.
        reason: &'static str,
    },

    /// The swizzle mode is out of the supported range.
    #[error("Invalid swizzle mode {mode}. Supported modes are 0 to {max}.")]
    InvalidSwizzleMode {
        /// The requested mode.
        mode: u32,
        /// Largest supported mode.
        max: u32,
    },

    /// A tile profile produced a step sequence that does not describe its own tile.
    #[error("Malformed permutation step sequence: {0}. This is a bug in the tile profile.")]
    MalformedStepSequence(&'static str),

    /// The assembled output does not have the same length as the input.
    #[error("Output data length differs from input data length (input: {expected}, output: {actual}). This is a bug in the swizzle engine.")]
    AssemblyInvariantViolation {
        /// Length of the input buffer.
        expected: usize,
        /// Number of bytes actually assembled.
        actual: usize,
    },
}

/// Flat classification of a [`SwizzleError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Buffer length inconsistent with geometry/format, or not a whole number of tiles.
    SizeMismatch,
    /// Swizzle mode was required but not provided.
    MissingSwizzleMode,
    /// Platform identifier outside the supported set.
    UnsupportedPlatform,
    /// Image width or height not usable with the computed tile size.
    InvalidDimension,
    /// Block dimensions or size not usable with the selected platform.
    InvalidBlockFormat,
    /// Swizzle mode outside the supported range.
    InvalidSwizzleMode,
    /// Internal postcondition failure.
    AssemblyInvariantViolation,
}

/// Whether an error was caused by the caller's input or by a defect in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The input was rejected. Retrying with the same input will fail again.
    InvalidInput,
    /// An internal invariant was violated.
    Internal,
}

impl ErrorKind {
    /// Returns whether this kind is a rejection of the input or an internal defect.
    pub fn category(self) -> ErrorCategory {
        match self {
            ErrorKind::AssemblyInvariantViolation => ErrorCategory::Internal,
            _ => ErrorCategory::InvalidInput,
        }
    }
}

impl SwizzleError {
    /// Returns the flat [`ErrorKind`] of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SwizzleError::SizeMismatch { .. }
            | SwizzleError::NotTileMultiple { .. }
            | SwizzleError::OutputBufferTooSmall { .. } => ErrorKind::SizeMismatch,
            SwizzleError::MissingSwizzleMode(_) => ErrorKind::MissingSwizzleMode,
            SwizzleError::UnsupportedPlatform(_) => ErrorKind::UnsupportedPlatform,
            SwizzleError::InvalidDimension { .. } | SwizzleError::ZeroDimension(_) => {
                ErrorKind::InvalidDimension
            }
            SwizzleError::InvalidBlockFormat { .. } => ErrorKind::InvalidBlockFormat,
            SwizzleError::InvalidSwizzleMode { .. } => ErrorKind::InvalidSwizzleMode,
            SwizzleError::MalformedStepSequence(_)
            | SwizzleError::AssemblyInvariantViolation { .. } => {
                ErrorKind::AssemblyInvariantViolation
            }
        }
    }

    /// Shorthand for `self.kind().category()`.
    pub fn category(&self) -> ErrorCategory {
        self.kind().category()
    }
}
