use crate::error::CliError;
use lightweight_mmap::handles::*;
use lightweight_mmap::mmap::*;
use std::fs;
use std::path::*;
use texture_swizzle_api::SwizzleBuilder;
use tracing::debug;

/// Direction of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Linear to swizzled.
    Swizzle,
    /// Swizzled to linear.
    Deswizzle,
}

/// A single input file and the path its converted copy is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileJob {
    pub source: PathBuf,
    pub target: PathBuf,
}

/// Recursively visits directories and collects file paths.
///
/// Directories or entries that cannot be read (e.g. due to missing permissions) are skipped.
///
/// # Arguments
///
/// * `dir`: The directory to start the traversal from.
/// * `files`: The vector of file paths to populate.
pub fn find_all_files(dir: &Path, files: &mut Vec<PathBuf>) -> std::io::Result<()> {
    let dir_entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Ok(()),
    };

    for entry in dir_entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(_) => continue,
        };

        let path = entry.path();
        if path.is_dir() {
            find_all_files(&path, files)?;
        } else {
            files.push(path);
        }
    }
    Ok(())
}

/// Canonicalizes a CLI path argument which must already exist.
pub fn canonicalize_existing_path(value: &str) -> Result<PathBuf, String> {
    fs::canonicalize(value).map_err(|e| format!("Invalid input path '{value}': {e}"))
}

/// Lists the files to convert.
///
/// A file `input` maps to `output` itself. A directory `input` is searched recursively, and
/// every file maps to the same relative path under `output`.
pub fn collect_jobs(input: &Path, output: &Path) -> std::io::Result<Vec<FileJob>> {
    if !input.is_dir() {
        return Ok(vec![FileJob {
            source: input.to_path_buf(),
            target: output.to_path_buf(),
        }]);
    }

    let mut files = Vec::new();
    find_all_files(input, &mut files)?;
    Ok(files
        .into_iter()
        .filter_map(|source| {
            let relative = source.strip_prefix(input).ok()?.to_path_buf();
            Some(FileJob {
                target: output.join(relative),
                source,
            })
        })
        .collect())
}

/// Converts a single file.
///
/// The first `offset` bytes (a header) are copied verbatim, the rest is converted with the
/// settings of `builder`. If conversion fails after the output file was created, the partially
/// written output file is removed. An existing output file is left alone when the source
/// cannot be read.
pub fn convert_file(
    job: &FileJob,
    direction: Direction,
    builder: &SwizzleBuilder,
    offset: usize,
) -> Result<(), CliError> {
    let source_str = path_str(&job.source)?;
    let target_str = path_str(&job.target)?;

    let source_handle = ReadOnlyFileHandle::open(source_str)?;
    let source_size = source_handle.size()? as usize;
    if source_size < offset {
        return Err(CliError::HeaderTooLarge {
            path: job.source.clone(),
            size: source_size,
            offset,
        });
    }
    let source_mapping = ReadOnlyMmap::new(&source_handle, 0, source_size)?;
    let source = source_mapping.as_slice();

    if let Some(parent) = job.target.parent() {
        fs::create_dir_all(parent)?;
    }
    let target_handle = ReadWriteFileHandle::create_preallocated(target_str, source_size as i64)?;

    debug!(
        source = %job.source.display(),
        target = %job.target.display(),
        size = source_size,
        offset,
        ?direction,
        "converting file"
    );

    let result = write_target(target_handle, source, direction, builder, offset);
    if result.is_err() {
        // Best effort, the conversion error is the one worth reporting.
        let _ = fs::remove_file(&job.target);
    }
    result
}

fn write_target(
    target_handle: ReadWriteFileHandle,
    source: &[u8],
    direction: Direction,
    builder: &SwizzleBuilder,
    offset: usize,
) -> Result<(), CliError> {
    let mut target_mapping = ReadWriteMmap::new(&target_handle, 0, source.len())?;
    let target = target_mapping.as_mut_slice();

    let (header, data) = source.split_at(offset);
    let (target_header, target_data) = target.split_at_mut(offset);
    target_header.copy_from_slice(header);

    match direction {
        Direction::Swizzle => builder.swizzle(data, target_data)?,
        Direction::Deswizzle => builder.deswizzle(data, target_data)?,
    }

    Ok(())
}

fn path_str(path: &Path) -> Result<&str, CliError> {
    path.to_str()
        .ok_or_else(|| CliError::NonUtf8Path(path.to_path_buf()))
}
