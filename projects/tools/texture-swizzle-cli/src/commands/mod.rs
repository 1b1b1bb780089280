pub mod deswizzle;
pub mod swizzle;

use crate::error::CliError;
use crate::util::*;
use std::path::PathBuf;
use std::time::Instant;
use texture_swizzle_api::{Platform, SwizzleBuilder};
use tracing::{error, info};

/// Settings shared by the `swizzle` and `deswizzle` commands.
#[derive(Debug, Clone)]
pub struct ConversionOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub platform: Platform,
    pub width: u32,
    pub height: u32,
    pub block_width: u32,
    pub block_height: u32,
    pub bytes_per_block: u32,
    pub swizzle_mode: Option<u32>,
    pub offset: usize,
}

impl ConversionOptions {
    fn builder(&self) -> SwizzleBuilder {
        let builder = SwizzleBuilder::new()
            .platform(self.platform)
            .image_size(self.width, self.height)
            .block_size(self.block_width, self.block_height)
            .bytes_per_block(self.bytes_per_block);

        match self.swizzle_mode {
            Some(mode) => builder.swizzle_mode(mode),
            None => builder,
        }
    }
}

/// Converts every file described by `options`, logging failures per file.
///
/// Returns [`CliError::FilesFailed`] once all files were attempted if any of them failed.
pub fn run_conversion(direction: Direction, options: &ConversionOptions) -> Result<(), CliError> {
    let builder = options.builder();
    let jobs = collect_jobs(&options.input, &options.output)?;
    info!(
        files = jobs.len(),
        platform = %options.platform,
        ?direction,
        "Found {} files to convert",
        jobs.len()
    );

    let start = Instant::now();
    let convert = |job: &FileJob| match convert_file(job, direction, &builder, options.offset) {
        Ok(()) => true,
        Err(e) => {
            error!(file = %job.source.display(), "{e}");
            false
        }
    };

    #[cfg(feature = "multithreaded")]
    let failed = {
        use rayon::prelude::*;
        jobs.par_iter().map(convert).filter(|ok| !ok).count()
    };

    #[cfg(not(feature = "multithreaded"))]
    let failed = jobs.iter().map(convert).filter(|ok| !ok).count();

    info!(
        "Converted {} of {} files in {:.2?}",
        jobs.len() - failed,
        jobs.len(),
        start.elapsed()
    );

    if failed > 0 {
        return Err(CliError::FilesFailed(failed));
    }
    Ok(())
}
