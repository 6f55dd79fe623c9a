//! Word list file loading
//!
//! One word per line. Lines are passed through as-is; trimming, case
//! normalization, and alphabetic filtering happen in
//! [`crate::dictionary::Dictionary::build`].

use std::fs;
use std::path::{Path, PathBuf};

use crate::io::error::{Result, file_error};

/// Load one word list file into raw lines
///
/// # Errors
///
/// Returns [`crate::FillError::FileSystem`] carrying the offending path if
/// the file cannot be read.
pub fn load_word_list(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|e| file_error(path, "read word list", e))?;
    Ok(text.lines().map(str::to_string).collect())
}

/// Load several word list files, preserving their order
///
/// # Errors
///
/// Returns the first [`crate::FillError::FileSystem`] encountered.
pub fn load_word_lists(paths: &[PathBuf]) -> Result<Vec<Vec<String>>> {
    paths.iter().map(|path| load_word_list(path)).collect()
}
