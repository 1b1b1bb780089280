//! Precomputed read unit permutations.
//!
//! A step sequence describes a tile layout by repeatedly merging (deswizzle) or splitting
//! (swizzle) groups of read units. Rather than building and discarding nested grids for every
//! tile, the sequence is run once over read unit *indices* and the result is kept as a flat
//! table. Every tile of the texture is then moved with plain offset arithmetic.

use crate::error::SwizzleError;
use crate::profile::{Axis, PermutationStep};
use alloc::vec::Vec;

/// Mapping between the memory order of a swizzled tile and the cells of the linear tile.
///
/// Entry `i` of the table is the row-major cell (`row * columns + column`) of the linear tile
/// that holds the `i`-th read unit of the swizzled tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilePermutation {
    rows: usize,
    columns: usize,
    cells: Vec<usize>,
}

/// A rectangular grid of read unit indices, stored row-major.
struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<usize>,
}

impl Grid {
    fn row(&self, row: usize) -> &[usize] {
        &self.cells[row * self.columns..(row + 1) * self.columns]
    }
}

impl TilePermutation {
    /// Builds the permutation by merging `count` read units with deswizzle steps.
    ///
    /// The read units start as `count` single-cell grids in swizzled memory order. Each step
    /// merges every `group_size` consecutive grids along its axis. Exactly one grid, the
    /// linear tile, must remain at the end.
    ///
    /// # Errors
    ///
    /// Returns [`SwizzleError::MalformedStepSequence`] if a group size does not divide the
    /// number of grids, grids of different shapes are merged, or more than one grid remains.
    pub fn from_merge_steps(steps: &[PermutationStep], count: usize) -> Result<Self, SwizzleError> {
        let mut grids: Vec<Grid> = (0..count)
            .map(|index| Grid {
                rows: 1,
                columns: 1,
                cells: alloc::vec![index],
            })
            .collect();

        for step in steps {
            if step.group_size == 0 || grids.len() % step.group_size != 0 {
                return Err(SwizzleError::MalformedStepSequence(
                    "group size does not divide the element count",
                ));
            }

            let mut merged = Vec::with_capacity(grids.len() / step.group_size);
            for group in grids.chunks(step.group_size) {
                merged.push(merge(group, step.axis)?);
            }
            grids = merged;
        }

        let [tile] = <[Grid; 1]>::try_from(grids).map_err(|_| {
            SwizzleError::MalformedStepSequence("merging did not produce exactly one tile")
        })?;

        // The merged grid holds swizzled indices per cell; invert it.
        let mut cells = alloc::vec![0; tile.cells.len()];
        for (cell, &index) in tile.cells.iter().enumerate() {
            cells[index] = cell;
        }

        Ok(Self {
            rows: tile.rows,
            columns: tile.columns,
            cells,
        })
    }

    /// Builds the permutation by splitting a `rows x columns` tile with swizzle steps.
    ///
    /// The tile starts as a single grid of linear cells. Each step splits every grid into
    /// `group_size` equal consecutive parts along its axis, keeping the flattened order. Every
    /// grid must be a single cell at the end; their order is the swizzled memory order.
    ///
    /// # Errors
    ///
    /// Returns [`SwizzleError::MalformedStepSequence`] if a group size does not divide the grid
    /// along its axis, or grids larger than one cell remain.
    pub fn from_split_steps(
        steps: &[PermutationStep],
        rows: usize,
        columns: usize,
    ) -> Result<Self, SwizzleError> {
        let mut grids = alloc::vec![Grid {
            rows,
            columns,
            cells: (0..rows * columns).collect(),
        }];

        for step in steps {
            let mut parts = Vec::with_capacity(grids.len() * step.group_size);
            for grid in &grids {
                split(grid, step, &mut parts)?;
            }
            grids = parts;
        }

        let cells = grids
            .iter()
            .map(|grid| match grid.cells.as_slice() {
                [cell] => Ok(*cell),
                _ => Err(SwizzleError::MalformedStepSequence(
                    "splitting did not reach single read units",
                )),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            rows,
            columns,
            cells,
        })
    }

    /// Height of the tile, in read units.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Width of the tile, in read units.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of read units in the tile.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the tile has no read units.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Row-major linear cells, indexed by swizzled read unit.
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    /// `(row, column)` in the linear tile of the `index`-th swizzled read unit.
    #[inline(always)]
    pub fn position(&self, index: usize) -> (usize, usize) {
        let cell = self.cells[index];
        (cell / self.columns, cell % self.columns)
    }
}

fn merge(group: &[Grid], axis: Axis) -> Result<Grid, SwizzleError> {
    let first = &group[0];
    match axis {
        Axis::Vertical => {
            if group.iter().any(|grid| grid.columns != first.columns) {
                return Err(SwizzleError::MalformedStepSequence(
                    "vertically merged grids differ in width",
                ));
            }

            Ok(Grid {
                rows: group.iter().map(|grid| grid.rows).sum(),
                columns: first.columns,
                cells: group.iter().flat_map(|grid| grid.cells.iter().copied()).collect(),
            })
        }
        Axis::Horizontal => {
            if group.iter().any(|grid| grid.rows != first.rows) {
                return Err(SwizzleError::MalformedStepSequence(
                    "horizontally merged grids differ in height",
                ));
            }

            let columns = group.iter().map(|grid| grid.columns).sum();
            let mut cells = Vec::with_capacity(first.rows * columns);
            for row in 0..first.rows {
                for grid in group {
                    cells.extend_from_slice(grid.row(row));
                }
            }

            Ok(Grid {
                rows: first.rows,
                columns,
                cells,
            })
        }
    }
}

fn split(grid: &Grid, step: &PermutationStep, parts: &mut Vec<Grid>) -> Result<(), SwizzleError> {
    let extent = match step.axis {
        Axis::Vertical => grid.rows,
        Axis::Horizontal => grid.columns,
    };
    if step.group_size == 0 || extent % step.group_size != 0 {
        return Err(SwizzleError::MalformedStepSequence(
            "group size does not divide the grid",
        ));
    }

    let part_extent = extent / step.group_size;
    for part in 0..step.group_size {
        let start = part * part_extent;
        let grid = match step.axis {
            Axis::Vertical => Grid {
                rows: part_extent,
                columns: grid.columns,
                cells: (start..start + part_extent)
                    .flat_map(|row| grid.row(row).iter().copied())
                    .collect(),
            },
            Axis::Horizontal => Grid {
                rows: grid.rows,
                columns: part_extent,
                cells: (0..grid.rows)
                    .flat_map(|row| grid.row(row)[start..start + part_extent].iter().copied())
                    .collect(),
            },
        };
        parts.push(grid);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::BlockFormat;
    use crate::profile::{Ps4Layout, SwitchLayout, TileLayout, TileProfile};
    use crate::test_prelude::*;

    /// Linear cell of each 16 byte sector of a GOB, worked out by hand from the sector
    /// interleave: bit 0 selects the row, bit 1 the column, bits 2-3 the next two row bits and
    /// bit 4 the 32 byte column half.
    const GOB_SECTOR_CELLS: [usize; 32] = [
        0, 4, 1, 5, 8, 12, 9, 13, 16, 20, 17, 21, 24, 28, 25, 29, //
        2, 6, 3, 7, 10, 14, 11, 15, 18, 22, 19, 23, 26, 30, 27, 31,
    ];

    #[test]
    fn switch_mode_0_matches_hand_computed_gob() {
        let profile = SwitchLayout::new(0)
            .unwrap()
            .tile_profile(&BlockFormat::new(4, 4, 16))
            .unwrap();
        let permutation = TilePermutation::from_merge_steps(&profile.deswizzle_steps, 32).unwrap();

        assert_eq!(permutation.rows(), 8);
        assert_eq!(permutation.columns(), 4);
        assert_eq!(permutation.cells(), &GOB_SECTOR_CELLS);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(3)]
    #[case(5)]
    fn switch_matches_tegra_gob_formula(#[case] mode: u32) {
        let profile = SwitchLayout::new(mode)
            .unwrap()
            .tile_profile(&BlockFormat::new(1, 1, 4))
            .unwrap();
        let permutation =
            TilePermutation::from_merge_steps(&profile.deswizzle_steps, profile.reads_per_tile())
                .unwrap();

        for (index, &cell) in permutation.cells().iter().enumerate() {
            let y = cell / 4;
            let x = (cell % 4) * 16;
            let gob = y / 8;
            let offset = gob * 512
                + ((x % 64) / 32) * 256
                + ((y % 8) / 2) * 64
                + ((x % 32) / 16) * 32
                + (y % 2) * 16;
            assert_eq!(offset, index * 16, "sector {index} (mode {mode})");
        }
    }

    #[test]
    fn ps4_is_morton_order() {
        let profile = Ps4Layout.tile_profile(&BlockFormat::new(4, 4, 8)).unwrap();
        let permutation = TilePermutation::from_merge_steps(&profile.deswizzle_steps, 64).unwrap();

        assert_eq!(permutation.rows(), 8);
        assert_eq!(permutation.columns(), 8);
        for index in 0..64 {
            let column = (index & 1) | ((index >> 1) & 2) | ((index >> 2) & 4);
            let row = ((index >> 1) & 1) | ((index >> 2) & 2) | ((index >> 3) & 4);
            assert_eq!(permutation.position(index), (row, column), "block {index}");
        }
    }

    #[rstest]
    #[case(Ps4Layout.tile_profile(&BlockFormat::new(4, 4, 16)).unwrap())]
    #[case(SwitchLayout::new(0).unwrap().tile_profile(&BlockFormat::new(4, 4, 16)).unwrap())]
    #[case(SwitchLayout::new(2).unwrap().tile_profile(&BlockFormat::new(4, 4, 8)).unwrap())]
    #[case(SwitchLayout::new(4).unwrap().tile_profile(&BlockFormat::new(1, 1, 4)).unwrap())]
    fn split_and_merge_tables_agree(#[case] profile: TileProfile) {
        let merged =
            TilePermutation::from_merge_steps(&profile.deswizzle_steps, profile.reads_per_tile())
                .unwrap();
        let split = TilePermutation::from_split_steps(
            &profile.swizzle_steps,
            merged.rows(),
            merged.columns(),
        )
        .unwrap();

        assert_eq!(merged, split);

        let mut seen = vec![false; merged.len()];
        for &cell in merged.cells() {
            assert!(!seen[cell], "cell {cell} visited twice");
            seen[cell] = true;
        }
    }

    #[test]
    fn merge_rejects_indivisible_group() {
        let steps = [PermutationStep::vertical(3)];
        assert!(matches!(
            TilePermutation::from_merge_steps(&steps, 8),
            Err(SwizzleError::MalformedStepSequence(_))
        ));
    }

    #[test]
    fn merge_rejects_leftover_grids() {
        let steps = [PermutationStep::vertical(2)];
        assert!(matches!(
            TilePermutation::from_merge_steps(&steps, 8),
            Err(SwizzleError::MalformedStepSequence(_))
        ));
    }

    #[test]
    fn merge_rejects_zero_group() {
        let steps = [PermutationStep::horizontal(2), PermutationStep::vertical(0)];
        assert!(matches!(
            TilePermutation::from_merge_steps(&steps, 4),
            Err(SwizzleError::MalformedStepSequence(_))
        ));
    }

    #[test]
    fn split_rejects_incomplete_sequence() {
        let steps = [PermutationStep::vertical(2)];
        assert!(matches!(
            TilePermutation::from_split_steps(&steps, 2, 2),
            Err(SwizzleError::MalformedStepSequence(_))
        ));
    }
}
