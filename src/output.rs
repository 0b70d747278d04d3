// Reading legacy route files and writing converted ones

use chrono::NaiveDate;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Counter values 00..=98 are tried before giving up
pub const MAX_OUTPUT_ATTEMPTS: u32 = 99;

/// Read the whole input file into memory
pub fn read_input(path: &Path) -> AppResult<String> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => AppError::InputNotFound(path.to_path_buf()),
        _ => AppError::InputRead {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Candidate output path for a given counter: `<input>_<YYYY-MM-DD>_<NN>`
pub fn output_path_for(input: &Path, dir: &Path, date: NaiveDate, counter: u32) -> PathBuf {
    let stem = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "routes".to_string());

    dir.join(format!("{}_{}_{:02}", stem, date.format("%Y-%m-%d"), counter))
}

/// Pick the first output path that does not exist yet.
///
/// `dir` defaults to the input file's own directory.
pub fn next_output_path(input: &Path, dir: Option<&Path>, date: NaiveDate) -> AppResult<PathBuf> {
    let dir = match dir {
        Some(dir) => dir.to_path_buf(),
        None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
    };

    let mut last = PathBuf::new();
    for counter in 0..MAX_OUTPUT_ATTEMPTS {
        let candidate = output_path_for(input, &dir, date, counter);
        if !candidate.exists() {
            return Ok(candidate);
        }
        tracing::debug!("{} already exists", candidate.display());
        last = candidate;
    }

    Err(AppError::OutputNamesExhausted { dir, last })
}

/// Write the converted routes, refusing to clobber an existing file
pub fn write_output(path: &Path, contents: &str) -> AppResult<()> {
    let to_error = |source: std::io::Error| AppError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(to_error)?;
    file.write_all(contents.as_bytes()).map_err(to_error)?;

    tracing::info!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}
