//! File and directory helpers

use super::string::replace_by_dict;
use crate::config::TextEncoding;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read a whole file as text in `encoding`; malformed bytes are an error
pub fn read_text(path: impl AsRef<Path>, encoding: TextEncoding) -> Result<String> {
    let bytes = fs::read(path.as_ref())?;
    Ok(encoding.decode_strict(&bytes)?.into_owned())
}

/// Write `text` to a file in `encoding`, replacing any existing content
pub fn write_text(path: impl AsRef<Path>, text: &str, encoding: TextEncoding) -> Result<()> {
    let bytes = encoding.encode(text)?;
    fs::write(path.as_ref(), bytes)?;
    Ok(())
}

/// Apply ordered replacements to a file in place.
///
/// The file is left untouched if it does not decode cleanly in `encoding`.
pub fn replace_text_in_file<I, K, V>(
    path: impl AsRef<Path>,
    pairs: I,
    encoding: TextEncoding,
) -> Result<()>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let path = path.as_ref();
    let text = read_text(path, encoding)?;
    let result = replace_by_dict(&text, pairs);
    debug!("Rewriting {}", path.display());
    write_text(path, &result, encoding)
}

/// Files matching a glob pattern such as `logs/*.txt` or `src/**/*.rs`
pub fn find_files(pattern: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in glob::glob(pattern)? {
        let path = entry?;
        if path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}

/// Immediate subdirectories of `dir`
pub fn find_sub_dirs(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let pattern = dir.as_ref().join("*");
    let mut dirs = Vec::new();
    for entry in glob::glob(&pattern.to_string_lossy())? {
        let path = entry?;
        if path.is_dir() {
            dirs.push(path);
        }
    }
    Ok(dirs)
}

/// Every file under `path`, descending into subdirectories when `recursive`.
/// A missing path yields an empty list.
pub fn file_list(path: impl AsRef<Path>, recursive: bool) -> Result<Vec<PathBuf>> {
    let path = path.as_ref();
    let mut files = Vec::new();
    if path.exists() {
        collect_files(path, recursive, &mut files)?;
    }
    files.sort();
    Ok(files)
}

fn collect_files(dir: &Path, recursive: bool, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        } else if recursive && path.is_dir() {
            collect_files(&path, recursive, files)?;
        }
    }
    Ok(())
}
