#![no_main]

// Swizzling then deswizzling arbitrary Switch textures must restore the input.

use libfuzzer_sys::{arbitrary, fuzz_target};
use texture_swizzle::{deswizzle, swizzle, BlockFormat, ImageGeometry, Platform, TileLayout};

const BLOCK_SIZES: [u32; 5] = [1, 2, 4, 8, 16];

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct SwitchTexture {
    pub swizzle_mode: u8,
    pub bytes_per_block: u8,
    pub compressed: bool,
    pub tiles_wide: u8,
    pub tiles_high: u8,
    pub seed: u8,
}

fuzz_target!(|texture: SwitchTexture| {
    let mode = u32::from(texture.swizzle_mode % 4);
    let bytes_per_block = BLOCK_SIZES[texture.bytes_per_block as usize % BLOCK_SIZES.len()];
    let block = if texture.compressed { 4 } else { 1 };
    let format = BlockFormat::new(block, block, bytes_per_block);

    let Ok(layout) = Platform::NintendoSwitch.layout(Some(mode)) else {
        return;
    };
    let Ok(profile) = layout.tile_profile(&format) else {
        return;
    };

    let image = ImageGeometry::new(
        profile.tile_width * (u32::from(texture.tiles_wide % 4) + 1),
        profile.tile_height * (u32::from(texture.tiles_high % 2) + 1),
    );
    let original: Vec<u8> = (0..format.data_size(image))
        .map(|x| (x as u8).wrapping_mul(31).wrapping_add(texture.seed))
        .collect();

    let mut swizzled = vec![0u8; original.len()];
    let mut restored = vec![0u8; original.len()];
    swizzle(&original, &mut swizzled, Platform::NintendoSwitch, Some(mode), image, format)
        .expect("Swizzle should succeed for a whole number of tiles");
    deswizzle(&swizzled, &mut restored, Platform::NintendoSwitch, Some(mode), image, format)
        .expect("Deswizzle should succeed for a whole number of tiles");

    assert_eq!(original, restored, "Roundtrip mismatch");
});
