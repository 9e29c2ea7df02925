use std::fs;
use std::path::{Path, PathBuf};

use xi_rope::Rope;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a markdown file into an immutable rope
///
/// The whole file must be UTF-8. A document with any invalid byte is rejected
/// with an `InvalidData` [`IoError::Io`] rather than parsed in part.
pub fn read_document(path: &Path) -> Result<Rope, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    Ok(Rope::from(content))
}
