//! Reading clipping exports and writing cleaned markdown.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, warn};

use super::error::FilesError;

const BOM: &str = "\u{feff}";

/// Read an export as text.
///
/// Invalid UTF-8 sequences are replaced rather than rejected, and a leading
/// byte order mark is removed.
pub fn read_export(path: &Path) -> Result<String, FilesError> {
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => FilesError::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => FilesError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read export");

    let content = match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(err) => {
            warn!(path = %path.display(), "export is not valid UTF-8, replacing invalid bytes");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    };

    Ok(match content.strip_prefix(BOM) {
        Some(stripped) => stripped.to_string(),
        None => content,
    })
}

/// Write rendered markdown, optionally prefixed with a byte order mark.
pub fn write_markdown(path: &Path, markdown: &str, write_bom: bool) -> Result<(), FilesError> {
    let write_err = |source| FilesError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let mut content = String::with_capacity(markdown.len() + BOM.len());
    if write_bom {
        content.push_str(BOM);
    }
    content.push_str(markdown);

    fs::write(path, content).map_err(write_err)?;
    debug!(path = %path.display(), "wrote markdown");
    Ok(())
}
