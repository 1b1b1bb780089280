use super::{run_conversion, ConversionOptions};
use crate::util::Direction;
use argh::FromArgs;
use std::path::PathBuf;
use texture_swizzle_api::Platform;

#[derive(FromArgs, Debug)]
/// Deswizzle console GPU texture data into a linear layout
#[argh(subcommand, name = "deswizzle")]
pub struct DeswizzleCmd {
    /// input file or directory path
    #[argh(option, from_str_fn(crate::util::canonicalize_existing_path))]
    pub input: PathBuf,

    /// output file or directory path
    #[argh(option)]
    pub output: PathBuf,

    /// source platform (nsw, ps4)
    #[argh(option)]
    pub platform: Platform,

    /// image width in pixels
    #[argh(option)]
    pub width: u32,

    /// image height in pixels
    #[argh(option)]
    pub height: u32,

    /// block width in pixels [default: 1]
    #[argh(option, default = "1")]
    pub block_width: u32,

    /// block height in pixels [default: 1]
    #[argh(option, default = "1")]
    pub block_height: u32,

    /// size of one block in bytes [default: 4]
    #[argh(option, default = "4")]
    pub bytes_per_block: u32,

    /// swizzle mode, required for nsw (0-5)
    #[argh(option)]
    pub swizzle_mode: Option<u32>,

    /// size of a header to copy unchanged before the texture data [default: 0]
    #[argh(option, default = "0")]
    pub offset: usize,
}

pub fn handle_deswizzle_command(cmd: DeswizzleCmd) -> Result<(), Box<dyn std::error::Error>> {
    let options = ConversionOptions {
        input: cmd.input,
        output: cmd.output,
        platform: cmd.platform,
        width: cmd.width,
        height: cmd.height,
        block_width: cmd.block_width,
        block_height: cmd.block_height,
        bytes_per_block: cmd.bytes_per_block,
        swizzle_mode: cmd.swizzle_mode,
        offset: cmd.offset,
    };
    run_conversion(Direction::Deswizzle, &options)?;
    Ok(())
}
