//! Builder pattern implementation for swizzle configuration.

use crate::error::BuilderError;
use crate::transform::{deswizzle_allocating, swizzle_allocating};
use alloc::vec::Vec;
use texture_swizzle::{BlockFormat, ImageGeometry, Platform};

/// Swizzle configuration builder.
///
/// Holds everything needed to convert textures of one shape, so the same builder can be
/// reused for many buffers. The platform and image size must be set. Unset block parameters
/// default to uncompressed RGBA8 (`1x1` pixel blocks of `4` bytes).
///
/// # Examples
///
/// ```
/// use texture_swizzle_api::{Platform, SwizzleBuilder};
///
/// let builder = SwizzleBuilder::new()
///     .platform(Platform::PlayStation4)
///     .image_size(64, 64)
///     .block_size(4, 4)
///     .bytes_per_block(16);
///
/// let linear = vec![0u8; 4096];
/// let mut swizzled = vec![0u8; 4096];
/// builder.swizzle(&linear, &mut swizzled)?;
///
/// let mut restored = vec![0u8; 4096];
/// builder.deswizzle(&swizzled, &mut restored)?;
/// assert_eq!(restored, linear);
/// # Ok::<(), texture_swizzle_api::BuilderError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwizzleBuilder {
    platform: Option<Platform>,
    image: Option<ImageGeometry>,
    block_width: u32,
    block_height: u32,
    bytes_per_block: u32,
    swizzle_mode: Option<u32>,
}

impl SwizzleBuilder {
    /// Create a new builder with default block parameters.
    pub fn new() -> Self {
        Self {
            platform: None,
            image: None,
            block_width: 1,
            block_height: 1,
            bytes_per_block: 4,
            swizzle_mode: None,
        }
    }

    /// Set the platform whose layout is converted to or from.
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Set the image size in pixels.
    pub fn image_size(mut self, width: u32, height: u32) -> Self {
        self.image = Some(ImageGeometry::new(width, height));
        self
    }

    /// Set the block size in pixels, e.g. `(4, 4)` for BCn formats.
    pub fn block_size(mut self, width: u32, height: u32) -> Self {
        self.block_width = width;
        self.block_height = height;
        self
    }

    /// Set the size of one block in bytes, e.g. `8` for BC1 or `16` for BC3.
    pub fn bytes_per_block(mut self, bytes_per_block: u32) -> Self {
        self.bytes_per_block = bytes_per_block;
        self
    }

    /// Set the swizzle mode.
    ///
    /// Required for [`Platform::NintendoSwitch`], where it is the base 2 logarithm of the
    /// number of GOBs per tile. Ignored for other platforms.
    pub fn swizzle_mode(mut self, mode: u32) -> Self {
        self.swizzle_mode = Some(mode);
        self
    }

    /// The block format described by this builder.
    pub fn format(&self) -> BlockFormat {
        BlockFormat::new(self.block_width, self.block_height, self.bytes_per_block)
    }

    /// Number of bytes a texture of the configured shape occupies.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::MissingImageSize`] if no image size was set.
    pub fn data_size(&self) -> Result<usize, BuilderError> {
        Ok(self.format().data_size(self.require_image()?))
    }

    /// Swizzle linear data into `output`.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::MissingPlatform`] or [`BuilderError::MissingImageSize`] for an
    /// incomplete builder, or [`BuilderError::Swizzle`] if the conversion is rejected.
    pub fn swizzle(&self, input: &[u8], output: &mut [u8]) -> Result<(), BuilderError> {
        texture_swizzle::swizzle(
            input,
            output,
            self.require_platform()?,
            self.swizzle_mode,
            self.require_image()?,
            self.format(),
        )?;
        Ok(())
    }

    /// Deswizzle swizzled data into `output`.
    ///
    /// This reverses [`swizzle`](Self::swizzle) for a builder with the same configuration.
    ///
    /// # Errors
    ///
    /// Same as [`swizzle`](Self::swizzle).
    pub fn deswizzle(&self, input: &[u8], output: &mut [u8]) -> Result<(), BuilderError> {
        texture_swizzle::deswizzle(
            input,
            output,
            self.require_platform()?,
            self.swizzle_mode,
            self.require_image()?,
            self.format(),
        )?;
        Ok(())
    }

    /// Swizzle linear data into a new buffer.
    ///
    /// # Errors
    ///
    /// Same as [`swizzle`](Self::swizzle).
    pub fn swizzle_allocating(&self, input: &[u8]) -> Result<Vec<u8>, BuilderError> {
        Ok(swizzle_allocating(
            input,
            self.require_platform()?,
            self.swizzle_mode,
            self.require_image()?,
            self.format(),
        )?)
    }

    /// Deswizzle swizzled data into a new buffer.
    ///
    /// # Errors
    ///
    /// Same as [`swizzle`](Self::swizzle).
    pub fn deswizzle_allocating(&self, input: &[u8]) -> Result<Vec<u8>, BuilderError> {
        Ok(deswizzle_allocating(
            input,
            self.require_platform()?,
            self.swizzle_mode,
            self.require_image()?,
            self.format(),
        )?)
    }

    fn require_platform(&self) -> Result<Platform, BuilderError> {
        self.platform.ok_or(BuilderError::MissingPlatform)
    }

    fn require_image(&self) -> Result<ImageGeometry, BuilderError> {
        self.image.ok_or(BuilderError::MissingImageSize)
    }
}

impl Default for SwizzleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;
    use texture_swizzle::SwizzleError;

    #[test]
    fn defaults_to_rgba8_blocks() {
        assert_eq!(SwizzleBuilder::new().format(), BlockFormat::new(1, 1, 4));
        assert_eq!(SwizzleBuilder::default(), SwizzleBuilder::new());
    }

    #[test]
    fn requires_platform() {
        let builder = SwizzleBuilder::new().image_size(8, 8);
        assert_eq!(
            builder.swizzle_allocating(&[0; 256]),
            Err(BuilderError::MissingPlatform)
        );
    }

    #[test]
    fn requires_image_size() {
        let builder = SwizzleBuilder::new().platform(Platform::PlayStation4);
        assert_eq!(
            builder.deswizzle_allocating(&[0; 256]),
            Err(BuilderError::MissingImageSize)
        );
        assert_eq!(builder.data_size(), Err(BuilderError::MissingImageSize));
    }

    #[test]
    fn wraps_conversion_errors() {
        let builder = SwizzleBuilder::new()
            .platform(Platform::NintendoSwitch)
            .image_size(16, 8);

        assert_eq!(
            builder.swizzle_allocating(&[0; 512]),
            Err(BuilderError::Swizzle(SwizzleError::MissingSwizzleMode(
                Platform::NintendoSwitch
            )))
        );
    }

    #[rstest]
    #[case(Platform::NintendoSwitch, 0)]
    #[case(Platform::NintendoSwitch, 1)]
    #[case(Platform::PlayStation4, 0)]
    fn slice_and_allocating_agree(#[case] platform: Platform, #[case] mode: u32) {
        let builder = SwizzleBuilder::new()
            .platform(platform)
            .image_size(32, 32)
            .swizzle_mode(mode);
        let linear = pattern_bytes(builder.data_size().unwrap());

        let mut swizzled = vec![0u8; linear.len()];
        builder.swizzle(&linear, &mut swizzled).unwrap();
        assert_eq!(builder.swizzle_allocating(&linear).unwrap(), swizzled);

        let mut restored = vec![0u8; linear.len()];
        builder.deswizzle(&swizzled, &mut restored).unwrap();
        assert_eq!(restored, linear);
        assert_eq!(builder.deswizzle_allocating(&swizzled).unwrap(), linear);
    }
}
