//! PlayStation 4 tiled layout.
//!
//! Textures are stored as a row-major grid of 8x8 block tiles. Inside a tile the blocks are
//! in Morton (Z) order, with the lowest address bit selecting the column.

use super::{PermutationStep, Platform, TileLayout, TileProfile};
use crate::error::SwizzleError;
use crate::geometry::BlockFormat;
use alloc::vec;

const TILE_BLOCKS: u32 = 8;

/// Tile layout of the PlayStation 4.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ps4Layout;

impl TileLayout for Ps4Layout {
    fn tile_profile(&self, format: &BlockFormat) -> Result<TileProfile, SwizzleError> {
        let invalid = |reason| SwizzleError::InvalidBlockFormat {
            block_width: format.block_width,
            block_height: format.block_height,
            bytes_per_block: format.bytes_per_block,
            reason,
        };

        if format.bytes_per_block == 0 {
            return Err(invalid("bytes per block must not be zero"));
        }

        let tile_width = TILE_BLOCKS
            .checked_mul(format.block_width)
            .ok_or_else(|| invalid("tile width overflows"))?;
        let tile_height = TILE_BLOCKS
            .checked_mul(format.block_height)
            .ok_or_else(|| invalid("tile height overflows"))?;

        let read_size = format.bytes_per_block as usize;
        let tile_size = ((TILE_BLOCKS * TILE_BLOCKS) as usize)
            .checked_mul(read_size)
            .ok_or_else(|| invalid("tile size overflows"))?;

        Ok(TileProfile {
            platform: Platform::PlayStation4,
            swizzle_mode: None,
            tile_width,
            tile_height,
            tile_size,
            read_size,
            deswizzle_steps: vec![
                PermutationStep::horizontal(2),
                PermutationStep::vertical(2),
                PermutationStep::horizontal(2),
                PermutationStep::vertical(2),
                PermutationStep::horizontal(2),
                PermutationStep::vertical(2),
            ],
            swizzle_steps: vec![
                PermutationStep::vertical(2),
                PermutationStep::horizontal(2),
                PermutationStep::vertical(2),
                PermutationStep::horizontal(2),
                PermutationStep::vertical(2),
                PermutationStep::horizontal(2),
            ],
        })
    }
}
