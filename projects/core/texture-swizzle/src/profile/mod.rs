//! Platform tile profiles.
//!
//! A [`TileProfile`] describes how one platform's GPU lays out a texture in memory: the size
//! of a tile in pixels and bytes, the size of the atomic unit moved around inside a tile (the
//! read unit), and the sequences of [`PermutationStep`]s that encode the hardware's
//! interleaved addressing.
//!
//! Profiles are produced by [`TileLayout`] implementations. The engine only ever talks to the
//! trait, so supporting another platform means adding a layout type here and a
//! [`Platform`] variant that selects it.
//!
//! ## Step sequences
//!
//! A step sequence is read as follows. For deswizzling, the read units of a tile start out as
//! a flat list in memory order. Each step merges every `group_size` consecutive elements into
//! one, stacking them along [`Axis::Vertical`] or [`Axis::Horizontal`]. After the last step a
//! single element remains: the tile as a 2D grid of read units.
//!
//! For swizzling, the tile starts out as a single 2D grid. Each step splits every element into
//! `group_size` equal consecutive parts along the axis. After the last step every element is a
//! single read unit, and their order is the memory order of the swizzled tile.

mod ps4;
mod switch;

pub use ps4::Ps4Layout;
pub use switch::{SwitchLayout, MAX_SWIZZLE_MODE};

use crate::error::SwizzleError;
use crate::geometry::BlockFormat;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;
use derive_enum_all_values::AllValues;

/// Direction along which a permutation step groups elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Elements are stacked on top of each other (rows). Axis `0`.
    Vertical,
    /// Elements are placed side by side (columns). Axis `1`.
    Horizontal,
}

/// A single group-merge (deswizzle) or group-split (swizzle) operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PermutationStep {
    /// Number of elements merged into one, or parts an element is split into.
    pub group_size: usize,
    /// Direction of the merge or split.
    pub axis: Axis,
}

impl PermutationStep {
    /// A step grouping `group_size` elements vertically.
    pub const fn vertical(group_size: usize) -> Self {
        Self {
            group_size,
            axis: Axis::Vertical,
        }
    }

    /// A step grouping `group_size` elements horizontally.
    pub const fn horizontal(group_size: usize) -> Self {
        Self {
            group_size,
            axis: Axis::Horizontal,
        }
    }
}

/// Supported GPU families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum Platform {
    /// Nintendo Switch (Tegra X1 block linear layout). Requires a swizzle mode.
    NintendoSwitch,
    /// PlayStation 4 (GCN tiled layout).
    PlayStation4,
}

impl Platform {
    /// Short identifier used on the command line and in messages.
    pub const fn short_name(self) -> &'static str {
        match self {
            Platform::NintendoSwitch => "nsw",
            Platform::PlayStation4 => "ps4",
        }
    }

    /// Whether a swizzle mode must be supplied for this platform.
    pub const fn requires_swizzle_mode(self) -> bool {
        matches!(self, Platform::NintendoSwitch)
    }

    /// Selects the tile layout for this platform.
    ///
    /// `swizzle_mode` is required for [`Platform::NintendoSwitch`] and ignored otherwise.
    ///
    /// # Errors
    ///
    /// - [`SwizzleError::MissingSwizzleMode`] if the platform needs a mode and none was given.
    /// - [`SwizzleError::InvalidSwizzleMode`] if the mode is out of range.
    pub fn layout(self, swizzle_mode: Option<u32>) -> Result<PlatformLayout, SwizzleError> {
        match self {
            Platform::NintendoSwitch => {
                let mode = swizzle_mode.ok_or(SwizzleError::MissingSwizzleMode(self))?;
                Ok(PlatformLayout::NintendoSwitch(SwitchLayout::new(mode)?))
            }
            Platform::PlayStation4 => Ok(PlatformLayout::PlayStation4(Ps4Layout)),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for Platform {
    type Err = SwizzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const SWITCH_NAMES: [&str; 3] = ["nsw", "switch", "nintendo-switch"];
        const PS4_NAMES: [&str; 3] = ["ps4", "orbis", "playstation4"];

        let matches = |names: &[&str]| names.iter().any(|name| name.eq_ignore_ascii_case(s));
        if matches(&SWITCH_NAMES) {
            Ok(Platform::NintendoSwitch)
        } else if matches(&PS4_NAMES) {
            Ok(Platform::PlayStation4)
        } else {
            Err(SwizzleError::UnsupportedPlatform(s.into()))
        }
    }
}

/// Produces the tile geometry and step sequences of a platform for a given block format.
pub trait TileLayout {
    /// Builds the tile profile for `format`.
    ///
    /// # Errors
    ///
    /// Returns [`SwizzleError::InvalidBlockFormat`] if the layout cannot store blocks of this
    /// format.
    fn tile_profile(&self, format: &BlockFormat) -> Result<TileProfile, SwizzleError>;
}

/// The layout selected by [`Platform::layout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformLayout {
    /// See [`SwitchLayout`].
    NintendoSwitch(SwitchLayout),
    /// See [`Ps4Layout`].
    PlayStation4(Ps4Layout),
}

impl TileLayout for PlatformLayout {
    fn tile_profile(&self, format: &BlockFormat) -> Result<TileProfile, SwizzleError> {
        match self {
            PlatformLayout::NintendoSwitch(layout) => layout.tile_profile(format),
            PlatformLayout::PlayStation4(layout) => layout.tile_profile(format),
        }
    }
}

/// Tile geometry and permutation steps of one platform for one block format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileProfile {
    /// Platform this profile belongs to.
    pub platform: Platform,
    /// Swizzle mode the profile was built for, if the platform has modes.
    pub swizzle_mode: Option<u32>,
    /// Width of a tile in pixels.
    pub tile_width: u32,
    /// Height of a tile in pixels.
    pub tile_height: u32,
    /// Size of a tile in bytes.
    pub tile_size: usize,
    /// Size of the atomic unit moved by the permutation, in bytes.
    pub read_size: usize,
    /// Merge steps turning a swizzled tile into a linear one.
    pub deswizzle_steps: Vec<PermutationStep>,
    /// Split steps turning a linear tile into a swizzled one.
    pub swizzle_steps: Vec<PermutationStep>,
}

impl TileProfile {
    /// Number of read units in one tile.
    pub fn reads_per_tile(&self) -> usize {
        self.tile_size.checked_div(self.read_size).unwrap_or(0)
    }

    /// Checks that both step sequences describe this profile's tile for `format`.
    ///
    /// The rows of a tile (in read units) must equal its height in blocks, and a row of read
    /// units must hold exactly one tile-wide row of blocks.
    pub(crate) fn check_shape(&self, format: &BlockFormat) -> Result<(), SwizzleError> {
        if self.read_size == 0 || self.tile_size % self.read_size != 0 {
            return Err(SwizzleError::MalformedStepSequence(
                "tile size is not a whole number of read units",
            ));
        }

        if self.tile_width % format.block_width != 0 || self.tile_height % format.block_height != 0
        {
            return Err(SwizzleError::MalformedStepSequence(
                "tile dimensions are not a whole number of blocks",
            ));
        }

        let rows = (self.tile_height / format.block_height) as usize;
        let row_bytes =
            (self.tile_width / format.block_width) as usize * format.bytes_per_block as usize;

        for steps in [&self.deswizzle_steps, &self.swizzle_steps] {
            let (step_rows, step_columns) = grid_shape(steps);
            if step_rows != rows || step_columns * self.read_size != row_bytes {
                return Err(SwizzleError::MalformedStepSequence(
                    "step sequence does not match the tile dimensions",
                ));
            }
            if step_rows * step_columns != self.reads_per_tile() {
                return Err(SwizzleError::MalformedStepSequence(
                    "step sequence does not cover every read unit of the tile",
                ));
            }
        }

        Ok(())
    }
}

/// Rows and columns (in read units) of the grid described by a step sequence.
pub(crate) fn grid_shape(steps: &[PermutationStep]) -> (usize, usize) {
    steps.iter().fold((1, 1), |(rows, columns), step| match step.axis {
        Axis::Vertical => (rows * step.group_size, columns),
        Axis::Horizontal => (rows, columns * step.group_size),
    })
}
