use lightweight_mmap::handles::HandleOpenError;
use lightweight_mmap::mmap::MmapError;
use std::io;
use std::path::PathBuf;
use texture_swizzle_api::BuilderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("Failed to open file handle: {0}")]
    FileHandle(#[from] HandleOpenError),

    #[error("Failed to create memory mapping: {0}")]
    MemoryMapping(#[from] MmapError),

    #[error(transparent)]
    Swizzle(#[from] BuilderError),

    #[error("Path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),

    #[error("File '{}' is {size} bytes, which is smaller than the {offset} byte header.", .path.display())]
    HeaderTooLarge {
        path: PathBuf,
        size: usize,
        offset: usize,
    },

    #[error("{0} file(s) failed to convert.")]
    FilesFailed(usize),
}
