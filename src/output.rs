use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

use crate::generator::GeneratorRequest;

#[derive(Debug, Error)]
#[error("failed to write {}", .path.display())]
pub struct OutputError {
    path: PathBuf,
    #[source]
    source: std::io::Error,
}

pub fn download_file_name(request: &GeneratorRequest) -> String {
    format!("lorem-ipsum-{}-{}.txt", request.unit, request.count)
}

/// Write `text` to `path` through a uniquely named temp file in the same
/// directory. A failed write leaves neither a truncated target nor the temp
/// file behind, and never touches other files next to `path`.
pub fn write_text(path: &Path, text: &str) -> Result<(), OutputError> {
    let err = |source| OutputError {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(err)?;

    // Removed on drop, so every early return cleans up.
    let mut file = NamedTempFile::new_in(parent).map_err(err)?;
    file.write_all(text.as_bytes()).map_err(err)?;
    file.as_file().sync_all().map_err(err)?;
    file.persist(path).map_err(|persist| err(persist.error))?;

    tracing::debug!(path = %path.display(), bytes = text.len(), "text written");
    Ok(())
}
