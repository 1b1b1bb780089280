//! Nintendo Switch (Tegra X1) block linear layout.
//!
//! Textures are stored as a row-major grid of tiles. Each tile is a column of `2^mode` GOBs
//! ("groups of bytes"), where a GOB is 64 bytes wide and 8 rows tall (512 bytes). Inside a
//! GOB, 16 byte sectors are interleaved so that the byte at `(x, y)` lives at
//!
//! ```text
//! ((x % 64) / 32) * 256 + ((y % 8) / 2) * 64 + ((x % 32) / 16) * 32 + (y % 2) * 16 + x % 16
//! ```
//!
//! The swizzle mode is the base 2 logarithm of the number of GOBs stacked in a tile (the
//! "block height" in Tegra documentation).

use super::{PermutationStep, Platform, TileLayout, TileProfile};
use crate::error::SwizzleError;
use crate::geometry::BlockFormat;
use alloc::vec;

/// Largest supported swizzle mode (32 GOBs per tile).
pub const MAX_SWIZZLE_MODE: u32 = 5;

const GOB_WIDTH_BYTES: u32 = 64;
const GOB_HEIGHT: u32 = 8;
const GOB_SIZE: usize = 512;
const READ_SIZE: usize = 16;

/// Tile layout of the Nintendo Switch for one swizzle mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchLayout {
    swizzle_mode: u32,
}

impl SwitchLayout {
    /// Creates the layout for `swizzle_mode`.
    ///
    /// # Errors
    ///
    /// Returns [`SwizzleError::InvalidSwizzleMode`] if the mode is above [`MAX_SWIZZLE_MODE`].
    pub fn new(swizzle_mode: u32) -> Result<Self, SwizzleError> {
        if swizzle_mode > MAX_SWIZZLE_MODE {
            return Err(SwizzleError::InvalidSwizzleMode {
                mode: swizzle_mode,
                max: MAX_SWIZZLE_MODE,
            });
        }

        Ok(Self { swizzle_mode })
    }

    /// The swizzle mode of this layout.
    pub fn swizzle_mode(&self) -> u32 {
        self.swizzle_mode
    }

    /// Number of GOBs stacked vertically in one tile.
    pub fn gobs_per_tile(&self) -> u32 {
        1 << self.swizzle_mode
    }
}

impl TileLayout for SwitchLayout {
    fn tile_profile(&self, format: &BlockFormat) -> Result<TileProfile, SwizzleError> {
        let invalid = |reason| SwizzleError::InvalidBlockFormat {
            block_width: format.block_width,
            block_height: format.block_height,
            bytes_per_block: format.bytes_per_block,
            reason,
        };

        let bytes_per_block = format.bytes_per_block;
        if bytes_per_block == 0 || GOB_WIDTH_BYTES % bytes_per_block != 0 {
            return Err(invalid("bytes per block must divide the 64 byte GOB width"));
        }

        let gobs = self.gobs_per_tile();
        let tile_width = (GOB_WIDTH_BYTES / bytes_per_block)
            .checked_mul(format.block_width)
            .ok_or_else(|| invalid("tile width overflows"))?;
        let tile_height = (GOB_HEIGHT * gobs)
            .checked_mul(format.block_height)
            .ok_or_else(|| invalid("tile height overflows"))?;

        let gobs = gobs as usize;
        Ok(TileProfile {
            platform: Platform::NintendoSwitch,
            swizzle_mode: Some(self.swizzle_mode),
            tile_width,
            tile_height,
            tile_size: GOB_SIZE * gobs,
            read_size: READ_SIZE,
            deswizzle_steps: vec![
                PermutationStep::vertical(2),
                PermutationStep::horizontal(2),
                PermutationStep::vertical(4),
                PermutationStep::horizontal(2),
                PermutationStep::vertical(gobs),
            ],
            swizzle_steps: vec![
                PermutationStep::vertical(gobs),
                PermutationStep::horizontal(2),
                PermutationStep::vertical(4),
                PermutationStep::horizontal(2),
                PermutationStep::vertical(2),
            ],
        })
    }
}
