//! Image and block format descriptions.

/// Size of an image (or a single mip level/surface), in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageGeometry {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ImageGeometry {
    /// Creates a new image geometry.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl From<(u32, u32)> for ImageGeometry {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}

/// The smallest addressable unit of a texture format.
///
/// For block compressed formats (BC1-7, ASTC) this is the compressed block, e.g. `4x4` pixels
/// stored in `8` bytes for BC1. For uncompressed formats this is a single pixel, e.g. `1x1`
/// pixels stored in `4` bytes for RGBA8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockFormat {
    /// Width of a block in pixels.
    pub block_width: u32,
    /// Height of a block in pixels.
    pub block_height: u32,
    /// Size of a single block in bytes.
    pub bytes_per_block: u32,
}

impl BlockFormat {
    /// Creates a new block format.
    pub const fn new(block_width: u32, block_height: u32, bytes_per_block: u32) -> Self {
        Self {
            block_width,
            block_height,
            bytes_per_block,
        }
    }

    /// Number of bytes occupied by an image of the given size in this format.
    ///
    /// Saturates on overflow; a saturated size can never match a real buffer.
    pub fn data_size(&self, image: ImageGeometry) -> usize {
        let pixels = (image.width as usize).saturating_mul(image.height as usize);
        let block_pixels = (self.block_width as usize).saturating_mul(self.block_height as usize);
        if block_pixels == 0 {
            return usize::MAX;
        }

        (pixels / block_pixels).saturating_mul(self.bytes_per_block as usize)
    }
}
