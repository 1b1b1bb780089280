//! Linear to swizzled conversion of a single row of tiles.

use crate::permutation::TilePermutation;

/// Gathers the read units of every tile in `dst` from their linear positions in `src`.
///
/// Inverse of [`deswizzle_tile_row`](super::deswizzle::deswizzle_tile_row): `src` is the
/// linear band and `dst` the consecutive swizzled tiles. Returns the number of bytes written.
#[inline]
pub(crate) fn swizzle_tile_row(
    src: &[u8],
    dst: &mut [u8],
    permutation: &TilePermutation,
    tile_size: usize,
    read_size: usize,
) -> usize {
    let columns = permutation.columns();
    let row_units = (dst.len() / tile_size) * columns;
    let mut written = 0;

    for (tile_x, tile) in dst.chunks_exact_mut(tile_size).enumerate() {
        let tile_column = tile_x * columns;
        for (index, unit) in tile.chunks_exact_mut(read_size).enumerate() {
            let (row, column) = permutation.position(index);
            let offset = (row * row_units + tile_column + column) * read_size;
            unit.copy_from_slice(&src[offset..offset + read_size]);
            written += read_size;
        }
    }

    written
}
