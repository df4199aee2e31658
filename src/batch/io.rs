use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::AppError;
use crate::text::decode_text;

/// Regular files in `dir` with the given extension, sorted by path.
pub fn discover(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, AppError> {
    if !dir.is_dir() {
        return Err(AppError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let list_err = |source: std::io::Error| AppError::ListDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(list_err)? {
        let path = entry.map_err(list_err)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == extension) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

pub fn read_text(path: &Path) -> Result<String, AppError> {
    let bytes = fs::read(path).map_err(|source| AppError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let (text, fallback) = decode_text(bytes);
    if fallback {
        warn!(path = %path.display(), "file is not valid UTF-8; decoded as Latin-1");
    }
    Ok(text)
}

pub fn write_text(path: &Path, text: &str) -> Result<(), AppError> {
    fs::write(path, text).map_err(|source| AppError::Write {
        path: path.to_path_buf(),
        source,
    })
}
