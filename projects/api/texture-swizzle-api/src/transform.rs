//! Allocating conversions and per-platform convenience functions.

use alloc::vec;
use alloc::vec::Vec;
use texture_swizzle::{BlockFormat, ImageGeometry, Platform, SwizzleError};

/// Converts swizzled texture data to linear layout and returns a new buffer.
///
/// # Parameters
///
/// - `input`: Swizzled texture data
/// - `platform`: Platform the data was swizzled for
/// - `swizzle_mode`: Required for [`Platform::NintendoSwitch`], ignored otherwise
/// - `image`: Image size in pixels
/// - `format`: Block format of the data
///
/// # Returns
///
/// The linear data, the same length as `input`.
///
/// # Errors
///
/// Any [`SwizzleError`] raised by validation. No buffer is returned on error.
///
/// # Examples
///
/// ```
/// # use texture_swizzle_api::{deswizzle_allocating, BlockFormat, ImageGeometry, Platform};
/// let swizzled = vec![0u8; 512]; // One 32x32 BC1 tile
/// let linear = deswizzle_allocating(
///     &swizzled,
///     Platform::PlayStation4,
///     None,
///     ImageGeometry::new(32, 32),
///     BlockFormat::new(4, 4, 8),
/// )?;
/// assert_eq!(linear.len(), 512);
/// # Ok::<(), texture_swizzle_api::SwizzleError>(())
/// ```
pub fn deswizzle_allocating(
    input: &[u8],
    platform: Platform,
    swizzle_mode: Option<u32>,
    image: ImageGeometry,
    format: BlockFormat,
) -> Result<Vec<u8>, SwizzleError> {
    let mut output = vec![0u8; input.len()];
    texture_swizzle::deswizzle(input, &mut output, platform, swizzle_mode, image, format)?;
    Ok(output)
}

/// Converts linear texture data to a swizzled layout and returns a new buffer.
///
/// See [`deswizzle_allocating`] for parameters and errors.
pub fn swizzle_allocating(
    input: &[u8],
    platform: Platform,
    swizzle_mode: Option<u32>,
    image: ImageGeometry,
    format: BlockFormat,
) -> Result<Vec<u8>, SwizzleError> {
    let mut output = vec![0u8; input.len()];
    texture_swizzle::swizzle(input, &mut output, platform, swizzle_mode, image, format)?;
    Ok(output)
}

/// Deswizzles Nintendo Switch texture data.
///
/// `image_size` and `block_size` are `(width, height)` in pixels. `swizzle_mode` is the
/// base 2 logarithm of the GOBs per tile (`0..=5`).
pub fn nsw_deswizzle(
    data: &[u8],
    image_size: (u32, u32),
    block_size: (u32, u32),
    bytes_per_block: u32,
    swizzle_mode: u32,
) -> Result<Vec<u8>, SwizzleError> {
    deswizzle_allocating(
        data,
        Platform::NintendoSwitch,
        Some(swizzle_mode),
        image_size.into(),
        BlockFormat::new(block_size.0, block_size.1, bytes_per_block),
    )
}

/// Swizzles linear texture data for the Nintendo Switch.
///
/// See [`nsw_deswizzle`] for the parameters.
pub fn nsw_swizzle(
    data: &[u8],
    image_size: (u32, u32),
    block_size: (u32, u32),
    bytes_per_block: u32,
    swizzle_mode: u32,
) -> Result<Vec<u8>, SwizzleError> {
    swizzle_allocating(
        data,
        Platform::NintendoSwitch,
        Some(swizzle_mode),
        image_size.into(),
        BlockFormat::new(block_size.0, block_size.1, bytes_per_block),
    )
}

/// Deswizzles PlayStation 4 texture data.
///
/// `image_size` and `block_size` are `(width, height)` in pixels.
pub fn ps4_deswizzle(
    data: &[u8],
    image_size: (u32, u32),
    block_size: (u32, u32),
    bytes_per_block: u32,
) -> Result<Vec<u8>, SwizzleError> {
    deswizzle_allocating(
        data,
        Platform::PlayStation4,
        None,
        image_size.into(),
        BlockFormat::new(block_size.0, block_size.1, bytes_per_block),
    )
}

/// Swizzles linear texture data for the PlayStation 4.
pub fn ps4_swizzle(
    data: &[u8],
    image_size: (u32, u32),
    block_size: (u32, u32),
    bytes_per_block: u32,
) -> Result<Vec<u8>, SwizzleError> {
    swizzle_allocating(
        data,
        Platform::PlayStation4,
        None,
        image_size.into(),
        BlockFormat::new(block_size.0, block_size.1, bytes_per_block),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;
    use texture_swizzle::ErrorKind;

    #[rstest]
    #[case((16, 32), (4, 4), 16, 0)]
    #[case((128, 256), (4, 4), 8, 3)]
    #[case((32, 64), (1, 1), 4, 1)]
    fn nsw_round_trips(
        #[case] image_size: (u32, u32),
        #[case] block_size: (u32, u32),
        #[case] bytes_per_block: u32,
        #[case] mode: u32,
    ) {
        let len = BlockFormat::new(block_size.0, block_size.1, bytes_per_block)
            .data_size(image_size.into());
        let original = pattern_bytes(len);

        let linear = nsw_deswizzle(&original, image_size, block_size, bytes_per_block, mode).unwrap();
        assert_eq!(linear.len(), original.len());

        let swizzled = nsw_swizzle(&linear, image_size, block_size, bytes_per_block, mode).unwrap();
        assert_eq!(swizzled, original);
    }

    #[test]
    fn ps4_single_tile_round_trips() {
        let original = pattern_bytes(512);

        let swizzled = ps4_swizzle(&original, (32, 32), (4, 4), 8).unwrap();
        assert_eq!(swizzled.len(), 512);
        assert_eq!(ps4_deswizzle(&swizzled, (32, 32), (4, 4), 8).unwrap(), original);
    }

    #[test]
    fn ps4_rejects_short_buffer() {
        let result = ps4_deswizzle(&[0; 511], (32, 32), (4, 4), 8);
        assert_eq!(
            result,
            Err(SwizzleError::SizeMismatch {
                expected: 512,
                actual: 511
            })
        );
    }

    #[test]
    fn nsw_rejects_out_of_range_mode() {
        let result = nsw_swizzle(&[0; 512], (16, 32), (4, 4), 16, 6);
        assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidSwizzleMode);
    }

    #[test]
    fn allocating_requires_mode_for_switch() {
        let result = deswizzle_allocating(
            &[0; 512],
            Platform::NintendoSwitch,
            None,
            ImageGeometry::new(16, 32),
            BlockFormat::new(4, 4, 16),
        );
        assert_eq!(
            result,
            Err(SwizzleError::MissingSwizzleMode(Platform::NintendoSwitch))
        );
    }
}
