//! Parameter validation.
//!
//! Every check runs before any data is moved, so a rejected texture never produces partial
//! output. Checks run in this order:
//!
//! 1. Block dimensions and bytes per block are non-zero.
//! 2. The buffer length equals `(width * height) / (block_width * block_height) * bytes_per_block`,
//!    then image dimensions are non-zero.
//! 3. The platform's layout can be built (swizzle mode present and in range).
//! 4. The layout accepts the block format.
//! 5. The buffer length is a whole number of tiles.
//! 6. Image width and height are multiples of the tile width and height.

use crate::error::{Dimension, SwizzleError};
use crate::geometry::{BlockFormat, ImageGeometry};
use crate::profile::{Platform, TileLayout, TileProfile};

/// A texture whose parameters passed validation, with its derived tile grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedTexture {
    /// The tile profile of the selected layout.
    pub profile: TileProfile,
    /// Image size in pixels.
    pub image: ImageGeometry,
    /// Block format of the data.
    pub format: BlockFormat,
    /// Total number of tiles in the buffer.
    pub tile_count: usize,
    /// Number of tiles in one row of the image.
    pub tiles_per_width: usize,
    /// Number of tile rows in the image.
    pub tiles_per_height: usize,
}

impl ValidatedTexture {
    /// Size of the texture data in bytes.
    pub fn data_size(&self) -> usize {
        self.tile_count * self.profile.tile_size
    }

    /// Size in bytes of one row of tiles.
    ///
    /// A row of tiles is contiguous in both the swizzled and the linear layout.
    pub fn tile_row_size(&self) -> usize {
        self.tiles_per_width * self.profile.tile_size
    }
}

/// Validates a texture of `len` bytes for one of the built-in platforms.
///
/// `swizzle_mode` is required for [`Platform::NintendoSwitch`] and ignored otherwise.
///
/// # Errors
///
/// Returns the first failed check, see the [module documentation](self) for the order.
pub fn validate_platform(
    len: usize,
    platform: Platform,
    swizzle_mode: Option<u32>,
    image: ImageGeometry,
    format: BlockFormat,
) -> Result<ValidatedTexture, SwizzleError> {
    check_parameters(len, image, format)?;
    let layout = platform.layout(swizzle_mode)?;
    validate_tiles(len, &layout, image, format)
}

/// Validates a texture of `len` bytes for an arbitrary tile layout.
///
/// # Errors
///
/// Returns the first failed check, see the [module documentation](self) for the order.
pub fn validate<L: TileLayout + ?Sized>(
    len: usize,
    layout: &L,
    image: ImageGeometry,
    format: BlockFormat,
) -> Result<ValidatedTexture, SwizzleError> {
    check_parameters(len, image, format)?;
    validate_tiles(len, layout, image, format)
}

fn check_parameters(
    len: usize,
    image: ImageGeometry,
    format: BlockFormat,
) -> Result<(), SwizzleError> {
    if format.block_width == 0 || format.block_height == 0 || format.bytes_per_block == 0 {
        return Err(SwizzleError::InvalidBlockFormat {
            block_width: format.block_width,
            block_height: format.block_height,
            bytes_per_block: format.bytes_per_block,
            reason: "block dimensions and size must not be zero",
        });
    }

    let expected = format.data_size(image);
    if expected != len {
        return Err(SwizzleError::SizeMismatch {
            expected,
            actual: len,
        });
    }

    // Only reachable with an empty buffer.
    if image.width == 0 {
        return Err(SwizzleError::ZeroDimension(Dimension::Width));
    }
    if image.height == 0 {
        return Err(SwizzleError::ZeroDimension(Dimension::Height));
    }

    Ok(())
}

fn validate_tiles<L: TileLayout + ?Sized>(
    len: usize,
    layout: &L,
    image: ImageGeometry,
    format: BlockFormat,
) -> Result<ValidatedTexture, SwizzleError> {
    let profile = layout.tile_profile(&format)?;

    if profile.tile_size == 0 || len % profile.tile_size != 0 {
        return Err(SwizzleError::NotTileMultiple {
            tile_size: profile.tile_size,
            actual: len,
        });
    }

    if profile.tile_width == 0 || profile.tile_height == 0 {
        return Err(SwizzleError::MalformedStepSequence(
            "tile dimensions must not be zero",
        ));
    }

    if image.width % profile.tile_width != 0 {
        return Err(SwizzleError::InvalidDimension {
            dimension: Dimension::Width,
            size: image.width,
            tile_size: profile.tile_width,
        });
    }
    if image.height % profile.tile_height != 0 {
        return Err(SwizzleError::InvalidDimension {
            dimension: Dimension::Height,
            size: image.height,
            tile_size: profile.tile_height,
        });
    }

    profile.check_shape(&format)?;

    let tile_count = len / profile.tile_size;
    let tiles_per_width = (image.width / profile.tile_width) as usize;
    let tiles_per_height = (image.height / profile.tile_height) as usize;

    // The tile grid must cover the buffer exactly, or tiles would be dropped or invented.
    let covered = tiles_per_width
        .saturating_mul(tiles_per_height)
        .saturating_mul(profile.tile_size);
    if covered != len {
        return Err(SwizzleError::AssemblyInvariantViolation {
            expected: len,
            actual: covered,
        });
    }

    Ok(ValidatedTexture {
        profile,
        image,
        format,
        tile_count,
        tiles_per_width,
        tiles_per_height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::profile::{Ps4Layout, SwitchLayout};
    use crate::test_prelude::*;

    #[test]
    fn ps4_single_tile() {
        let texture = validate_platform(
            512,
            Platform::PlayStation4,
            None,
            ImageGeometry::new(32, 32),
            BlockFormat::new(4, 4, 8),
        )
        .unwrap();

        assert_eq!(texture.tile_count, 1);
        assert_eq!(texture.tiles_per_width, 1);
        assert_eq!(texture.tiles_per_height, 1);
        assert_eq!(texture.data_size(), 512);
    }

    #[test]
    fn switch_tile_grid() {
        // 64x128 BC3: 16 byte blocks, 16 pixel wide tiles, mode 2 -> 128 pixel tall tiles.
        let texture = validate_platform(
            8192,
            Platform::NintendoSwitch,
            Some(2),
            ImageGeometry::new(64, 128),
            BlockFormat::new(4, 4, 16),
        )
        .unwrap();

        assert_eq!(texture.profile.tile_size, 2048);
        assert_eq!(texture.tile_count, 4);
        assert_eq!(texture.tiles_per_width, 4);
        assert_eq!(texture.tiles_per_height, 1);
        assert_eq!(texture.tile_row_size(), 8192);
    }

    #[rstest]
    #[case(511)]
    #[case(513)]
    #[case(0)]
    fn rejects_wrong_buffer_length(#[case] len: usize) {
        let result = validate_platform(
            len,
            Platform::PlayStation4,
            None,
            ImageGeometry::new(32, 32),
            BlockFormat::new(4, 4, 8),
        );

        assert_eq!(
            result,
            Err(SwizzleError::SizeMismatch {
                expected: 512,
                actual: len
            })
        );
    }

    #[test]
    fn size_is_checked_before_swizzle_mode() {
        let result = validate_platform(
            100,
            Platform::NintendoSwitch,
            None,
            ImageGeometry::new(16, 32),
            BlockFormat::new(4, 4, 16),
        );

        assert_eq!(result.unwrap_err().kind(), ErrorKind::SizeMismatch);
    }

    #[test]
    fn switch_without_mode_is_rejected() {
        let result = validate_platform(
            512,
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

    #[test]
    fn rejects_buffer_that_is_not_whole_tiles() {
        // 16x16 BC3 is 256 bytes, half of a 512 byte GOB.
        let result = validate_platform(
            256,
            Platform::NintendoSwitch,
            Some(0),
            ImageGeometry::new(16, 16),
            BlockFormat::new(4, 4, 16),
        );

        assert_eq!(
            result,
            Err(SwizzleError::NotTileMultiple {
                tile_size: 512,
                actual: 256
            })
        );
    }

    #[test]
    fn rejects_width_not_multiple_of_tile_width() {
        // 16x64 BC1 is 512 bytes, exactly one tile, but tiles are 32x32.
        let result = validate(
            512,
            &Ps4Layout,
            ImageGeometry::new(16, 64),
            BlockFormat::new(4, 4, 8),
        );

        assert_eq!(
            result,
            Err(SwizzleError::InvalidDimension {
                dimension: Dimension::Width,
                size: 16,
                tile_size: 32
            })
        );
    }

    #[test]
    fn rejects_height_not_multiple_of_tile_height() {
        // 64x12 RGBA8 is 3072 bytes (6 GOBs), but mode 0 tiles are 16x8.
        let result = validate(
            64 * 12 * 4,
            &SwitchLayout::new(0).unwrap(),
            ImageGeometry::new(64, 12),
            BlockFormat::new(1, 1, 4),
        );

        assert_eq!(
            result,
            Err(SwizzleError::InvalidDimension {
                dimension: Dimension::Height,
                size: 12,
                tile_size: 8
            })
        );
        assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidDimension);
    }

    #[rstest]
    #[case(ImageGeometry::new(0, 32), SwizzleError::ZeroDimension(Dimension::Width))]
    #[case(ImageGeometry::new(32, 0), SwizzleError::ZeroDimension(Dimension::Height))]
    fn rejects_empty_images(#[case] image: ImageGeometry, #[case] expected: SwizzleError) {
        let result = validate(0, &Ps4Layout, image, BlockFormat::new(4, 4, 8));
        assert_eq!(result, Err(expected));
    }

    #[rstest]
    #[case(ImageGeometry::new(0, 32), 16)]
    #[case(ImageGeometry::new(32, 0), 1)]
    fn size_is_checked_before_empty_image(#[case] image: ImageGeometry, #[case] len: usize) {
        let result = validate_platform(
            len,
            Platform::PlayStation4,
            None,
            image,
            BlockFormat::new(4, 4, 8),
        );

        assert_eq!(
            result,
            Err(SwizzleError::SizeMismatch {
                expected: 0,
                actual: len
            })
        );
    }

    #[test]
    fn rejects_zero_sized_blocks() {
        let result = validate(
            512,
            &Ps4Layout,
            ImageGeometry::new(32, 32),
            BlockFormat::new(0, 4, 8),
        );
        assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidBlockFormat);
    }
}
