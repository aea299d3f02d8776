// src/readers/helpers.rs

//! Miscellaneous helper functions for _Readers_.

use crate::common::FPath;

/// Return the basename of an `FPath`.
pub fn basename(path: &FPath) -> FPath {
    let path_ = fpath_to_path(path);
    match path_.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => FPath::new(),
    }
}

/// Helper function for completeness.
pub fn fpath_to_path(path: &FPath) -> &std::path::Path {
    std::path::Path::new(path)
}
