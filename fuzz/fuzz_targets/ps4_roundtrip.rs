#![no_main]

// Deswizzling then swizzling arbitrary PS4 textures must restore the input.

use libfuzzer_sys::{arbitrary, fuzz_target};
use texture_swizzle::{deswizzle, swizzle, BlockFormat, ImageGeometry, Platform};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Ps4Texture {
    pub bytes_per_block: u8,
    pub compressed: bool,
    pub tiles_wide: u8,
    pub tiles_high: u8,
    pub data: Vec<u8>,
}

fuzz_target!(|texture: Ps4Texture| {
    let bytes_per_block = u32::from(texture.bytes_per_block % 16) + 1;
    let block = if texture.compressed { 4 } else { 1 };
    let format = BlockFormat::new(block, block, bytes_per_block);
    let image = ImageGeometry::new(
        8 * block * (u32::from(texture.tiles_wide % 4) + 1),
        8 * block * (u32::from(texture.tiles_high % 4) + 1),
    );

    let len = format.data_size(image);
    let original: Vec<u8> = texture.data.iter().copied().cycle().take(len).collect();
    if original.len() != len {
        return;
    }

    let mut linear = vec![0u8; len];
    let mut restored = vec![0u8; len];
    deswizzle(&original, &mut linear, Platform::PlayStation4, None, image, format)
        .expect("Deswizzle should succeed for a whole number of tiles");
    swizzle(&linear, &mut restored, Platform::PlayStation4, None, image, format)
        .expect("Swizzle should succeed for a whole number of tiles");

    assert_eq!(original, restored, "Roundtrip mismatch");
});
