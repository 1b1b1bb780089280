//! Conversion between swizzled and linear texture data.
//!
//! Both directions run in three phases:
//!
//! 1. Validate the buffer against the image, block format and platform
//!    (see [`crate::validate`]).
//! 2. Build the [`TilePermutation`] of the profile once.
//! 3. Move the read units of every tile, one row of tiles at a time.
//!
//! A row of tiles covers the same contiguous byte range in the swizzled and the linear buffer,
//! so rows are independent of each other. With the `multithreaded` feature they are processed
//! on the rayon thread pool.

mod deswizzle;
mod swizzle;

use crate::error::SwizzleError;
use crate::geometry::{BlockFormat, ImageGeometry};
use crate::permutation::TilePermutation;
use crate::profile::{grid_shape, Platform, TileLayout};
use crate::validate::{validate, validate_platform, ValidatedTexture};
use deswizzle::deswizzle_tile_row;
use swizzle::swizzle_tile_row;
use tracing::{debug, trace};

/// Converts one row of tiles. Arguments are `(src, dst, permutation, tile_size, read_size)`.
type TileRowFn = fn(&[u8], &mut [u8], &TilePermutation, usize, usize) -> usize;

/// Converts swizzled texture data of a built-in platform to linear layout.
///
/// # Parameters
///
/// - `input`: Swizzled texture data, exactly the size of the image in `format`.
/// - `output`: Receives the linear data. Must be at least `input.len()` bytes. Bytes past
///   `input.len()` are left untouched.
/// - `platform`: Platform the data was swizzled for.
/// - `swizzle_mode`: Swizzle mode of the data. Required for [`Platform::NintendoSwitch`],
///   ignored otherwise.
/// - `image`: Image size in pixels.
/// - `format`: Block format of the data.
///
/// # Errors
///
/// Returns a [`SwizzleError`] describing the first failed check. Nothing is written to
/// `output` unless all checks pass.
///
/// # Examples
///
/// ```
/// use texture_swizzle::{deswizzle, BlockFormat, ImageGeometry, Platform};
///
/// // One 32x32 pixel BC1 tile.
/// let swizzled = vec![0u8; 512];
/// let mut linear = vec![0u8; 512];
/// deswizzle(
///     &swizzled,
///     &mut linear,
///     Platform::PlayStation4,
///     None,
///     ImageGeometry::new(32, 32),
///     BlockFormat::new(4, 4, 8),
/// )?;
/// # Ok::<(), texture_swizzle::SwizzleError>(())
/// ```
pub fn deswizzle(
    input: &[u8],
    output: &mut [u8],
    platform: Platform,
    swizzle_mode: Option<u32>,
    image: ImageGeometry,
    format: BlockFormat,
) -> Result<(), SwizzleError> {
    let texture = validate_platform(input.len(), platform, swizzle_mode, image, format)?;
    run_deswizzle(input, output, &texture)
}

/// Converts linear texture data to the swizzled layout of a built-in platform.
///
/// Parameters and errors are the same as for [`deswizzle`], with `input` holding linear data
/// and `output` receiving swizzled data.
pub fn swizzle(
    input: &[u8],
    output: &mut [u8],
    platform: Platform,
    swizzle_mode: Option<u32>,
    image: ImageGeometry,
    format: BlockFormat,
) -> Result<(), SwizzleError> {
    let texture = validate_platform(input.len(), platform, swizzle_mode, image, format)?;
    run_swizzle(input, output, &texture)
}

/// Converts swizzled texture data to linear layout using a custom [`TileLayout`].
///
/// # Errors
///
/// Same as [`deswizzle`], minus the platform specific errors. A layout whose step sequences
/// do not describe its own tiles is reported as [`SwizzleError::MalformedStepSequence`].
pub fn deswizzle_with_layout<L: TileLayout + ?Sized>(
    input: &[u8],
    output: &mut [u8],
    layout: &L,
    image: ImageGeometry,
    format: BlockFormat,
) -> Result<(), SwizzleError> {
    let texture = validate(input.len(), layout, image, format)?;
    run_deswizzle(input, output, &texture)
}

/// Converts linear texture data to a custom [`TileLayout`].
///
/// See [`deswizzle_with_layout`].
pub fn swizzle_with_layout<L: TileLayout + ?Sized>(
    input: &[u8],
    output: &mut [u8],
    layout: &L,
    image: ImageGeometry,
    format: BlockFormat,
) -> Result<(), SwizzleError> {
    let texture = validate(input.len(), layout, image, format)?;
    run_swizzle(input, output, &texture)
}

fn run_deswizzle(
    input: &[u8],
    output: &mut [u8],
    texture: &ValidatedTexture,
) -> Result<(), SwizzleError> {
    let profile = &texture.profile;
    let permutation =
        TilePermutation::from_merge_steps(&profile.deswizzle_steps, profile.reads_per_tile())?;
    transform_tile_rows(input, output, texture, &permutation, deswizzle_tile_row, "deswizzle")
}

fn run_swizzle(
    input: &[u8],
    output: &mut [u8],
    texture: &ValidatedTexture,
) -> Result<(), SwizzleError> {
    let profile = &texture.profile;
    let (rows, columns) = grid_shape(&profile.swizzle_steps);
    let permutation = TilePermutation::from_split_steps(&profile.swizzle_steps, rows, columns)?;
    transform_tile_rows(input, output, texture, &permutation, swizzle_tile_row, "swizzle")
}

fn transform_tile_rows(
    input: &[u8],
    output: &mut [u8],
    texture: &ValidatedTexture,
    permutation: &TilePermutation,
    tile_row_fn: TileRowFn,
    operation: &'static str,
) -> Result<(), SwizzleError> {
    let len = input.len();
    if output.len() < len {
        return Err(SwizzleError::OutputBufferTooSmall {
            needed: len,
            actual: output.len(),
        });
    }

    let profile = &texture.profile;
    if permutation.len() != profile.reads_per_tile() {
        return Err(SwizzleError::MalformedStepSequence(
            "permutation does not cover every read unit of the tile",
        ));
    }

    let row_size = texture.tile_row_size();
    if row_size == 0 || len % row_size != 0 {
        return Err(SwizzleError::MalformedStepSequence(
            "tile rows do not evenly divide the texture",
        ));
    }

    debug!(
        operation,
        platform = %profile.platform,
        swizzle_mode = ?profile.swizzle_mode,
        width = texture.image.width,
        height = texture.image.height,
        tile_width = profile.tile_width,
        tile_height = profile.tile_height,
        tile_size = profile.tile_size,
        read_size = profile.read_size,
        tiles_per_width = texture.tiles_per_width,
        tiles_per_height = texture.tiles_per_height,
        "converting texture"
    );

    let output = &mut output[..len];
    let tile_size = profile.tile_size;
    let read_size = profile.read_size;
    let convert_row = |(tile_y, (src, dst)): (usize, (&[u8], &mut [u8]))| {
        trace!(operation, tile_y, "converting tile row");
        tile_row_fn(src, dst, permutation, tile_size, read_size)
    };

    #[cfg(feature = "multithreaded")]
    let written: usize = {
        use rayon::prelude::*;
        input
            .par_chunks_exact(row_size)
            .zip(output.par_chunks_exact_mut(row_size))
            .enumerate()
            .map(convert_row)
            .sum()
    };

    #[cfg(not(feature = "multithreaded"))]
    let written: usize = input
        .chunks_exact(row_size)
        .zip(output.chunks_exact_mut(row_size))
        .enumerate()
        .map(convert_row)
        .sum();

    if written != len {
        return Err(SwizzleError::AssemblyInvariantViolation {
            expected: len,
            actual: written,
        });
    }

    Ok(())
}
