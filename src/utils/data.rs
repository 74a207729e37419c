use serde::{ Deserialize, Serialize };
/// Data serialization and file management utilities
use std::fs;
use std::path::{ Path, PathBuf };
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read file '{}': {source}", .path.display())]
    Read { path: PathBuf, source: std::io::Error },
    #[error("failed to parse JSON from '{}': {source}", .path.display())]
    Parse { path: PathBuf, source: serde_json::Error },
    #[error("failed to create directory '{}': {source}", .path.display())]
    CreateDir { path: PathBuf, source: std::io::Error },
    #[error("failed to write file '{}': {source}", .path.display())]
    Write { path: PathBuf, source: std::io::Error },
    #[error("failed to serialize data: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Generic function to load JSON data from file
pub fn load_json_from_file<T>(file_path: &Path) -> Result<T, DataError>
    where T: for<'de> Deserialize<'de>
{
    let contents = fs::read_to_string(file_path).map_err(|source| DataError::Read {
        path: file_path.to_path_buf(),
        source,
    })?;

    serde_json::from_str::<T>(&contents).map_err(|source| DataError::Parse {
        path: file_path.to_path_buf(),
        source,
    })
}

/// Generic function to save data as JSON to file
pub fn save_json_to_file<T>(data: &T, file_path: &Path) -> Result<(), DataError> where T: Serialize {
    // Ensure parent directory exists
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).map_err(|source| DataError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let contents = serde_json::to_string_pretty(data)?;

    fs::write(file_path, contents).map_err(|source| DataError::Write {
        path: file_path.to_path_buf(),
        source,
    })
}
