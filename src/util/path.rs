use std::path::Path;

use crate::backends::{ImportError, ImportResult};

pub fn ensure_file_exists(path: &Path) -> ImportResult<()> {
    if !path.exists() {
        Err(ImportError::FileNotFound(path.to_path_buf()))
    } else if !path.is_file() {
        Err(ImportError::NotAFile(path.to_path_buf()))
    } else {
        Ok(())
    }
}

/// Case-insensitive extension check. An empty list accepts any file.
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    if extensions.is_empty() {
        return true;
    }
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}
