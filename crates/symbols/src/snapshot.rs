//! Reading and writing table snapshots on disk.

use std::{fs, path::Path};

use glyph::error::TableError;
use mime_guess::mime;

use crate::SymbolTable;

pub const DEFAULT_FILE_NAME: &str = "dictionnaire.json";

/// Rejects paths that do not look like a json document, before any read.
pub fn ensure_json_path(path: &Path) -> Result<(), TableError> {
    match mime_guess::from_path(path).first() {
        Some(detected) if detected == mime::APPLICATION_JSON => Ok(()),
        Some(detected) => Err(TableError::InvalidFileType {
            path: path.to_path_buf(),
            detected: detected.essence_str().to_string(),
        }),
        None => Err(TableError::InvalidFileType {
            path: path.to_path_buf(),
            detected: "unknown".to_string(),
        }),
    }
}

pub fn read_snapshot_file(path: &Path) -> Result<Vec<u8>, TableError> {
    ensure_json_path(path)?;
    fs::read(path).map_err(|source| TableError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_table(path: &Path) -> Result<SymbolTable, TableError> {
    let raw = read_snapshot_file(path)?;
    SymbolTable::from_snapshot(&raw)
}

pub fn write_snapshot_file(path: &Path, table: &SymbolTable) -> Result<(), TableError> {
    write_snapshot(path, &table.export_snapshot()?)
}

/// Writes an already exported snapshot.
pub fn write_snapshot(path: &Path, snapshot: &str) -> Result<(), TableError> {
    fs::write(path, snapshot).map_err(|source| TableError::Io {
        path: path.to_path_buf(),
        source,
    })
}
