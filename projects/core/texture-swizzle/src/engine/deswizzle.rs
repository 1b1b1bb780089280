//! Swizzled to linear conversion of a single row of tiles.

use crate::permutation::TilePermutation;

/// Scatters the read units of every tile in `src` to their linear positions in `dst`.
///
/// `src` holds `n` consecutive swizzled tiles and `dst` the matching `n` tiles wide band of
/// the linear image, both `n * tile_size` bytes long. Returns the number of bytes written.
#[inline]
pub(crate) fn deswizzle_tile_row(
    src: &[u8],
    dst: &mut [u8],
    permutation: &TilePermutation,
    tile_size: usize,
    read_size: usize,
) -> usize {
    let columns = permutation.columns();
    let row_units = (src.len() / tile_size) * columns;
    let mut written = 0;

    for (tile_x, tile) in src.chunks_exact(tile_size).enumerate() {
        let tile_column = tile_x * columns;
        for (index, unit) in tile.chunks_exact(read_size).enumerate() {
            let (row, column) = permutation.position(index);
            let offset = (row * row_units + tile_column + column) * read_size;
            dst[offset..offset + read_size].copy_from_slice(unit);
            written += read_size;
        }
    }

    written
}
