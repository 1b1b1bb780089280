#![no_main]

// Arbitrary parameters must be rejected with an input error, never a panic or an internal error.

use libfuzzer_sys::{arbitrary, fuzz_target};
use texture_swizzle::{deswizzle, BlockFormat, ErrorCategory, ImageGeometry, Platform};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Parameters {
    pub switch: bool,
    pub swizzle_mode: Option<u32>,
    pub width: u32,
    pub height: u32,
    pub block_width: u32,
    pub block_height: u32,
    pub bytes_per_block: u32,
    pub data: Vec<u8>,
}

fuzz_target!(|params: Parameters| {
    let platform = if params.switch {
        Platform::NintendoSwitch
    } else {
        Platform::PlayStation4
    };
    let mut output = vec![0u8; params.data.len()];

    let result = deswizzle(
        &params.data,
        &mut output,
        platform,
        params.swizzle_mode,
        ImageGeometry::new(params.width, params.height),
        BlockFormat::new(params.block_width, params.block_height, params.bytes_per_block),
    );

    if let Err(e) = result {
        assert_eq!(e.category(), ErrorCategory::InvalidInput, "{e}");
    }
});
